use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A tracked inventory item, as stored in the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    /// Store-assigned identifier
    pub id: i64,
    /// Owning category (not checked by this service)
    pub category_id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub quantity: i64,
    pub owner: String,
    /// Name of whoever currently has the item, or empty
    pub currently_borrowing: String,
    /// Store-assigned insert time
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new item.
///
/// Missing or `null` fields take their zero value. `id` and `created_at`
/// in the request body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateItem {
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub owner: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currently_borrowing: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    /// Build an item from a draft and the values the store assigned to it.
    pub fn from_draft(input: CreateItem, id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            category_id: input.category_id,
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            quantity: input.quantity,
            owner: input.owner,
            currently_borrowing: input.currently_borrowing,
            created_at,
        }
    }
}
