//! In-memory store adapter
//!
//! Mirrors the Redis semantics of [`RedisStore`](super::RedisStore) for
//! tests and local development, including negative list indices and the
//! signed LREM count.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Store;
use crate::error::{AppError, Result};

/// Store implementation holding all state in process memory.
#[derive(Clone, Default)]
pub struct MemoryStore {
    strings: Arc<RwLock<HashMap<String, String>>>,
    lists: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolves a possibly negative Redis index against a list length.
/// The result may still be out of range and must be bounds-checked.
fn resolve_index(index: isize, len: usize) -> isize {
    if index < 0 {
        len as isize + index
    } else {
        index
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let strings = self.strings.read().await;
        Ok(strings.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut strings = self.strings.write().await;
        strings.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn lpush(&self, key: &str, value: &str) -> Result<usize> {
        let mut lists = self.lists.write().await;
        let list = lists.entry(key.to_string()).or_default();
        list.insert(0, value.to_string());
        Ok(list.len())
    }

    async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>> {
        let lists = self.lists.read().await;
        let Some(list) = lists.get(key) else {
            return Ok(Vec::new());
        };

        let len = list.len();
        let start = resolve_index(start, len).max(0) as usize;
        let stop = resolve_index(stop, len).min(len as isize - 1);
        if stop < 0 || start >= len || start as isize > stop {
            return Ok(Vec::new());
        }

        Ok(list[start..=stop as usize].to_vec())
    }

    async fn llen(&self, key: &str) -> Result<usize> {
        let lists = self.lists.read().await;
        Ok(lists.get(key).map_or(0, Vec::len))
    }

    async fn lrem(&self, key: &str, count: isize, value: &str) -> Result<usize> {
        let mut lists = self.lists.write().await;
        let Some(list) = lists.get_mut(key) else {
            return Ok(0);
        };

        let limit = if count == 0 {
            list.len()
        } else {
            count.unsigned_abs()
        };

        let mut removed = 0;
        if count < 0 {
            // Negative count removes matches starting from the tail.
            let mut i = list.len();
            while i > 0 && removed < limit {
                i -= 1;
                if list[i] == value {
                    list.remove(i);
                    removed += 1;
                }
            }
        } else {
            let mut i = 0;
            while i < list.len() && removed < limit {
                if list[i] == value {
                    list.remove(i);
                    removed += 1;
                } else {
                    i += 1;
                }
            }
        }

        if list.is_empty() {
            lists.remove(key);
        }
        Ok(removed)
    }

    async fn lset(&self, key: &str, index: isize, value: &str) -> Result<()> {
        let mut lists = self.lists.write().await;
        let list = lists
            .get_mut(key)
            .ok_or_else(|| AppError::Internal(format!("No such key: {}", key)))?;

        let resolved = resolve_index(index, list.len());
        if resolved < 0 || resolved as usize >= list.len() {
            return Err(AppError::Internal(format!("Index out of range: {}", index)));
        }

        list[resolved as usize] = value.to_string();
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_unset_key_returns_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("name").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("name", "bob").await.unwrap();
        assert_eq!(store.get("name").await.unwrap(), Some("bob".to_string()));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("name", "bob").await.unwrap();
        store.set("name", "alice").await.unwrap();
        assert_eq!(store.get("name").await.unwrap(), Some("alice".to_string()));
    }

    #[tokio::test]
    async fn test_lpush_prepends() {
        let store = MemoryStore::new();
        assert_eq!(store.lpush("list", "a").await.unwrap(), 1);
        assert_eq!(store.lpush("list", "b").await.unwrap(), 2);

        let values = store.lrange("list", 0, -1).await.unwrap();
        assert_eq!(values, vec!["b".to_string(), "a".to_string()]);
    }

    #[tokio::test]
    async fn test_lrange_negative_indices() {
        let store = MemoryStore::new();
        for value in ["c", "b", "a"] {
            store.lpush("list", value).await.unwrap();
        }

        let tail = store.lrange("list", -2, -1).await.unwrap();
        assert_eq!(tail, vec!["b".to_string(), "c".to_string()]);
    }

    #[tokio::test]
    async fn test_lrange_out_of_bounds_is_empty() {
        let store = MemoryStore::new();
        store.lpush("list", "a").await.unwrap();

        assert!(store.lrange("list", 5, 10).await.unwrap().is_empty());
        assert!(store.lrange("missing", 0, -1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_llen() {
        let store = MemoryStore::new();
        assert_eq!(store.llen("list").await.unwrap(), 0);
        store.lpush("list", "a").await.unwrap();
        store.lpush("list", "b").await.unwrap();
        assert_eq!(store.llen("list").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_lrem_from_head() {
        let store = MemoryStore::new();
        for value in ["x", "a", "x", "a", "x"] {
            store.lpush("list", value).await.unwrap();
        }
        // List is now [x, a, x, a, x]

        let removed = store.lrem("list", 2, "x").await.unwrap();
        assert_eq!(removed, 2);
        let values = store.lrange("list", 0, -1).await.unwrap();
        assert_eq!(
            values,
            vec!["a".to_string(), "a".to_string(), "x".to_string()]
        );
    }

    #[tokio::test]
    async fn test_lrem_from_tail() {
        let store = MemoryStore::new();
        for value in ["x", "a", "x"] {
            store.lpush("list", value).await.unwrap();
        }
        // List is now [x, a, x]

        let removed = store.lrem("list", -1, "x").await.unwrap();
        assert_eq!(removed, 1);
        let values = store.lrange("list", 0, -1).await.unwrap();
        assert_eq!(values, vec!["x".to_string(), "a".to_string()]);
    }

    #[tokio::test]
    async fn test_lrem_all() {
        let store = MemoryStore::new();
        for value in ["x", "a", "x"] {
            store.lpush("list", value).await.unwrap();
        }

        let removed = store.lrem("list", 0, "x").await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.llen("list").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lset_in_range() {
        let store = MemoryStore::new();
        store.lpush("list", "a").await.unwrap();
        store.lpush("list", "b").await.unwrap();

        store.lset("list", -1, "z").await.unwrap();
        let values = store.lrange("list", 0, -1).await.unwrap();
        assert_eq!(values, vec!["b".to_string(), "z".to_string()]);
    }

    #[tokio::test]
    async fn test_lset_missing_key_fails() {
        let store = MemoryStore::new();
        assert!(store.lset("missing", 0, "z").await.is_err());
    }

    #[tokio::test]
    async fn test_lset_out_of_range_fails() {
        let store = MemoryStore::new();
        store.lpush("list", "a").await.unwrap();
        assert!(store.lset("list", 3, "z").await.is_err());
    }

    #[tokio::test]
    async fn test_ping_always_succeeds() {
        let store = MemoryStore::new();
        assert!(store.ping().await.is_ok());
    }
}
