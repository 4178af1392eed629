use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::time::Duration;
use tracing::instrument;

use crate::{
    error::ItemResult,
    models::{CreateItem, Item},
    repository::ItemRepository,
};

const ITEM_COLUMNS: &str = "id, category_id, name, description, image_url, quantity, owner, \
                            currently_borrowing, created_at";

/// PostgreSQL-backed item repository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn ping(&self, timeout: Duration) -> ItemResult<()> {
        database::postgres::check_health(&self.pool, timeout).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let (id, created_at): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO items (category_id, name, description, image_url, quantity, owner, currently_borrowing)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, created_at
            "#,
        )
        .bind(input.category_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.quantity)
        .bind(&input.owner)
        .bind(&input.currently_borrowing)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(item_id = id, "Created item");
        Ok(Item::from_draft(input, id, created_at))
    }
}
