//! Store Module
//!
//! Awaitable client adapter for the external key-value/list store.
//!
//! The endpoint layer only exercises `get`/`set`; the list operations
//! are provisioned for upcoming list-backed routes and covered by the
//! `MemoryStore` tests.

mod memory;
mod redis_store;


// Re-export public types
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use async_trait::async_trait;

use crate::error::Result;

/// Storage backend for the greeting service.
///
/// Implementations wrap a fixed set of primitive key-value and list
/// operations with Redis semantics. The handle is created at startup and
/// passed explicitly into the application state; there is no ambient
/// global client.
#[async_trait]
pub trait Store: Send + Sync {
    /// Retrieves the string value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Prepends `value` to the list at `key`, returning the new length.
    async fn lpush(&self, key: &str, value: &str) -> Result<usize>;

    /// Returns the elements of the list at `key` between `start` and
    /// `stop` inclusive. Negative indices count from the end.
    async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>>;

    /// Returns the length of the list at `key` (0 for a missing key).
    async fn llen(&self, key: &str) -> Result<usize>;

    /// Removes occurrences of `value` from the list at `key`, returning
    /// the number removed. `count > 0` removes from the head, `count < 0`
    /// from the tail, `count == 0` removes all.
    async fn lrem(&self, key: &str, count: isize, value: &str) -> Result<usize>;

    /// Overwrites the element at `index` in the list at `key`.
    /// Fails if the key is missing or the index is out of range.
    async fn lset(&self, key: &str, index: isize, value: &str) -> Result<()>;

    /// Checks connectivity to the underlying store.
    ///
    /// Consumed by the readiness probe as the injected dependency-health
    /// check.
    async fn ping(&self) -> Result<()>;
}
