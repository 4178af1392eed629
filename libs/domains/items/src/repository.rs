use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item};

/// Repository trait for Item persistence
///
/// Every call is a single round trip to the store; nothing is retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Check the store answers within `timeout`
    async fn ping(&self, timeout: Duration) -> ItemResult<()>;

    /// All items, newest first
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    /// Insert a new item; the store assigns `id` and `created_at`
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;
}

/// In-memory implementation of ItemRepository (for development/testing)
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<i64, Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn ping(&self, _timeout: Duration) -> ItemResult<()> {
        Ok(())
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let items = self.items.read().await;

        let mut result: Vec<Item> = items.values().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        let id = items.keys().max().copied().unwrap_or(0) + 1;
        let item = Item::from_draft(input, id, Utc::now());
        items.insert(id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> CreateItem {
        CreateItem {
            category_id: 1,
            name: name.to_string(),
            quantity: 3,
            owner: "sam".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryItemRepository::new();

        let item = repo.create(draft("Hammer")).await.unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Hammer");

        let fetched = repo.get_by_id(item.id).await.unwrap();
        assert_eq!(fetched, Some(item));
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryItemRepository::new();
        let a = repo.create(draft("a")).await.unwrap();
        let b = repo.create(draft("b")).await.unwrap();
        assert_eq!(b.id, a.id + 1);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryItemRepository::new();
        repo.create(draft("older")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        repo.create(draft("newer")).await.unwrap();

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["newer", "older"]);
    }

    #[tokio::test]
    async fn test_missing_item_is_none() {
        let repo = InMemoryItemRepository::new();
        assert!(repo.get_by_id(404).await.unwrap().is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
