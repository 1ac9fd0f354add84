use anyhow::{Context, Result};
use redis::aio::ConnectionManager;
use redis::Client;
use tracing::info;

/// Redis connection pool built on the multiplexed connection manager.
///
/// `ConnectionManager` is cheap to clone and reconnects on its own; hand
/// each request its own clone instead of sharing one guarded connection
/// across requests.
pub struct RedisPool {
    manager: ConnectionManager,
}

impl RedisPool {
    /// Connect and verify the endpoint is reachable.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = Client::open(redis_url)
            .context("failed to parse REDIS_URL connection string")?;
        let manager = ConnectionManager::new(client)
            .await
            .context("failed to initialize Redis connection manager")?;

        let pool = Self { manager };
        pool.ping().await.context("Redis endpoint did not answer PING")?;
        info!("Redis connection manager initialized");
        Ok(pool)
    }

    /// A clone of the connection manager for per-request use.
    pub fn manager(&self) -> ConnectionManager {
        self.manager.clone()
    }

    /// Liveness probe; surfaces broken connections early.
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.manager();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .context("Redis health check failed")?;
        Ok(())
    }
}
