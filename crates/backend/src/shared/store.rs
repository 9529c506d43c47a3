//! In-memory entity repositories.
//!
//! Every entity lives in an `EntityStore<T>` owned by [`AppState`] and
//! injected into handlers through axum's `State` extractor. Handlers never
//! reach for a global; the stores are the only mutable state in the process.

use std::collections::HashMap;
use std::sync::Arc;

use contracts::domain::customers::Customer;
use contracts::domain::inquiries::Inquiry;
use contracts::domain::orders::Order;
use contracts::domain::products::Product;
use contracts::system::users::User;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("entity {0} not found")]
    NotFound(Uuid),
}

/// Entities addressable by a stable unique id.
pub trait HasId {
    fn id(&self) -> Uuid;
    fn created_at(&self) -> chrono::DateTime<chrono::Utc>;
}

macro_rules! impl_has_id {
    ($($ty:ty),+) => {
        $(impl HasId for $ty {
            fn id(&self) -> Uuid {
                self.id
            }
            fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
                self.timestamps.created_at
            }
        })+
    };
}

impl_has_id!(Customer, Product, Order, Inquiry, User);

/// Thread-safe in-memory repository for one entity type.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: HasId + Clone> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// All entities, oldest first. The order is deterministic so list
    /// endpoints stay stable between calls.
    pub async fn list(&self) -> Vec<T> {
        let guard = self.items.read().await;
        let mut all: Vec<T> = guard.values().cloned().collect();
        all.sort_by_key(|e| (e.created_at(), e.id()));
        all
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.items.read().await.get(&id).cloned()
    }

    pub async fn insert(&self, entity: T) -> Uuid {
        let id = entity.id();
        self.items.write().await.insert(id, entity);
        id
    }

    /// Replace an existing entity in place.
    pub async fn update<F>(&self, id: Uuid, apply: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut guard = self.items.write().await;
        match guard.get_mut(&id) {
            Some(entity) => {
                apply(entity);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.items.write().await.remove(&id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }
}

/// Shared application state handed to every handler.
#[derive(Clone, Default)]
pub struct AppState {
    pub customers: EntityStore<Customer>,
    pub products: EntityStore<Product>,
    pub orders: EntityStore<Order>,
    pub inquiries: EntityStore<Inquiry>,
    pub users: EntityStore<User>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityTimestamps;

    fn customer(name: &str) -> Customer {
        Customer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            company: None,
            country: "Germany".into(),
            city: None,
            address: None,
            is_active: true,
            timestamps: EntityTimestamps::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_get_remove() {
        let store = EntityStore::new();
        let id = store.insert(customer("Ann")).await;

        assert_eq!(store.count().await, 1);
        assert_eq!(store.get(id).await.unwrap().name, "Ann");

        assert!(store.remove(id).await);
        assert!(!store.remove(id).await);
        assert!(store.get(id).await.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_entity_fails() {
        let store: EntityStore<Customer> = EntityStore::new();
        let result = store.update(Uuid::new_v4(), |c| c.name = "X".into()).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_is_oldest_first() {
        let store = EntityStore::new();
        let mut first = customer("Ann");
        first.timestamps.created_at = chrono::Utc::now() - chrono::Duration::days(2);
        let mut second = customer("Bob");
        second.timestamps.created_at = chrono::Utc::now() - chrono::Duration::days(1);

        store.insert(second).await;
        store.insert(first).await;

        let names: Vec<String> = store.list().await.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Ann".to_string(), "Bob".to_string()]);
    }
}
