use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use eucl_state::{Repository, RepositoryError, RepositoryItem};

/// In-memory [`Repository`] standing in for the platform secure store in
/// tests.
pub struct MemoryRepository<V> {
    store: Mutex<HashMap<String, V>>,
}

impl<V> Default for MemoryRepository<V> {
    fn default() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }
}

impl<V> MemoryRepository<V> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, V>>, RepositoryError> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::Internal("memory repository lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl<V: RepositoryItem + Clone> Repository<V> for MemoryRepository<V> {
    async fn get(&self, key: String) -> Result<Option<V>, RepositoryError> {
        Ok(self.lock()?.get(&key).cloned())
    }

    async fn set(&self, key: String, value: V) -> Result<(), RepositoryError> {
        self.lock()?.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: String) -> Result<(), RepositoryError> {
        self.lock()?.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
    struct TestItem(String);

    eucl_state::register_repository_item!(TestItem, "test_item");

    #[tokio::test]
    async fn stores_and_removes_items() {
        let repository = MemoryRepository::new();

        assert_eq!(repository.get("k".to_string()).await.unwrap(), None);

        repository
            .set("k".to_string(), TestItem("v".to_string()))
            .await
            .unwrap();
        assert_eq!(
            repository.get("k".to_string()).await.unwrap(),
            Some(TestItem("v".to_string()))
        );

        repository.remove("k".to_string()).await.unwrap();
        assert_eq!(repository.get("k".to_string()).await.unwrap(), None);
    }
}
