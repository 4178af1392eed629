//! Item Service - Business logic layer

use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Interprets raw request input and delegates to the repository.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Check the backing store answers within `timeout`
    #[instrument(skip(self))]
    pub async fn ping(&self, timeout: Duration) -> ItemResult<()> {
        self.repository.ping(timeout).await
    }

    /// List all items, newest first
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Get an item by its textual ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, raw_id: &str) -> ItemResult<Item> {
        let id: i64 = raw_id
            .parse()
            .map_err(|_| ItemError::InvalidArgument("invalid id".to_string()))?;

        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Create a new item from an untyped JSON body
    #[instrument(skip(self, body))]
    pub async fn create_item(&self, body: serde_json::Value) -> ItemResult<Item> {
        let input: CreateItem = serde_json::from_value(body)
            .map_err(|e| ItemError::InvalidArgument(e.to_string()))?;

        let item = self.repository.create(input).await?;
        tracing::info!(item_id = item.id, "Item created");
        Ok(item)
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use chrono::Utc;
    use mockall::predicate::eq;
    use serde_json::json;

    fn stored(id: i64, input: CreateItem) -> Item {
        Item::from_draft(input, id, Utc::now())
    }

    #[tokio::test]
    async fn test_get_item_rejects_non_numeric_id() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().never();

        let service = ItemService::new(repo);
        for raw in ["abc", "", "1.5", "99999999999999999999"] {
            let err = service.get_item(raw).await.unwrap_err();
            assert!(matches!(err, ItemError::InvalidArgument(ref m) if m == "invalid id"));
        }
    }

    #[tokio::test]
    async fn test_get_item_missing_is_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(999999))
            .times(1)
            .returning(|_| Ok(None));

        let service = ItemService::new(repo);
        let err = service.get_item("999999").await.unwrap_err();
        assert!(matches!(err, ItemError::NotFound(999999)));
    }

    #[tokio::test]
    async fn test_get_item_accepts_signed_ids() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(-3))
            .times(1)
            .returning(|_| Ok(None));

        let service = ItemService::new(repo);
        assert!(matches!(
            service.get_item("-3").await,
            Err(ItemError::NotFound(-3))
        ));
    }

    #[tokio::test]
    async fn test_get_item_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(stored(id, CreateItem::default()))));

        let service = ItemService::new(repo);
        assert_eq!(service.get_item("5").await.unwrap().id, 5);
    }

    #[tokio::test]
    async fn test_get_item_store_error_propagates() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(ItemError::Store("connection reset".into())));

        let service = ItemService::new(repo);
        assert!(matches!(
            service.get_item("1").await,
            Err(ItemError::Store(_))
        ));
    }

    #[tokio::test]
    async fn test_create_item_passes_draft_through() {
        let mut repo = MockItemRepository::new();
        repo.expect_create()
            .withf(|input| input.name == "Tent" && input.quantity == -2 && input.category_id == 3)
            .times(1)
            .returning(|input| Ok(stored(10, input)));

        let service = ItemService::new(repo);
        let item = service
            .create_item(json!({"category_id": 3, "name": "Tent", "quantity": -2}))
            .await
            .unwrap();

        assert_eq!(item.id, 10);
        assert_eq!(item.name, "Tent");
        assert_eq!(item.description, "");
    }

    #[tokio::test]
    async fn test_create_item_rejects_mistyped_body() {
        let mut repo = MockItemRepository::new();
        repo.expect_create().never();

        let service = ItemService::new(repo);
        let err = service
            .create_item(json!({"quantity": "three"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ItemError::InvalidArgument(_)));

        let err = service.create_item(json!("drill")).await.unwrap_err();
        assert!(matches!(err, ItemError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_list_items_empty() {
        let mut repo = MockItemRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        let service = ItemService::new(repo);
        assert!(service.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ping_forwards_timeout() {
        let mut repo = MockItemRepository::new();
        repo.expect_ping()
            .with(eq(Duration::from_millis(250)))
            .returning(|_| Err(ItemError::StoreUnavailable("timed out".into())));

        let service = ItemService::new(repo);
        assert!(matches!(
            service.ping(Duration::from_millis(250)).await,
            Err(ItemError::StoreUnavailable(_))
        ));
    }
}
