//! Redis-backed store adapter
//!
//! Wraps a `redis::aio::ConnectionManager` so each primitive operation
//! becomes a plain awaitable call. Errors are never retried here; they
//! propagate to the caller and are logged at the response boundary.

use std::sync::Arc;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use tokio::sync::Mutex;

use super::Store;
use crate::error::Result;

/// Store implementation backed by a remote Redis instance.
///
/// The connection manager handles reconnection internally; a hung
/// connection blocks the issuing request, as no timeout is configured.
pub struct RedisStore {
    manager: Arc<Mutex<ConnectionManager>>,
}

impl RedisStore {
    /// Connects to the Redis instance at `url`.
    ///
    /// Fails fast if the initial connection cannot be established, so
    /// startup aborts before the HTTP listener binds.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let manager = client.get_connection_manager().await?;
        Ok(Self {
            manager: Arc::new(Mutex::new(manager)),
        })
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.manager.lock().await;
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut *conn)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.manager.lock().await;
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async::<()>(&mut *conn)
            .await?;
        Ok(())
    }

    async fn lpush(&self, key: &str, value: &str) -> Result<usize> {
        let mut conn = self.manager.lock().await;
        let len: usize = redis::cmd("LPUSH")
            .arg(key)
            .arg(value)
            .query_async(&mut *conn)
            .await?;
        Ok(len)
    }

    async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>> {
        let mut conn = self.manager.lock().await;
        let values: Vec<String> = redis::cmd("LRANGE")
            .arg(key)
            .arg(start)
            .arg(stop)
            .query_async(&mut *conn)
            .await?;
        Ok(values)
    }

    async fn llen(&self, key: &str) -> Result<usize> {
        let mut conn = self.manager.lock().await;
        let len: usize = redis::cmd("LLEN")
            .arg(key)
            .query_async(&mut *conn)
            .await?;
        Ok(len)
    }

    async fn lrem(&self, key: &str, count: isize, value: &str) -> Result<usize> {
        let mut conn = self.manager.lock().await;
        let removed: usize = redis::cmd("LREM")
            .arg(key)
            .arg(count)
            .arg(value)
            .query_async(&mut *conn)
            .await?;
        Ok(removed)
    }

    async fn lset(&self, key: &str, index: isize, value: &str) -> Result<()> {
        let mut conn = self.manager.lock().await;
        redis::cmd("LSET")
            .arg(key)
            .arg(index)
            .arg(value)
            .query_async::<()>(&mut *conn)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.manager.lock().await;
        redis::cmd("PING").query_async::<String>(&mut *conn).await?;
        Ok(())
    }
}
