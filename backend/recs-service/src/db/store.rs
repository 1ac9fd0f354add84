use std::collections::HashMap;

use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::error::{AppError, Result};
use crate::models::{Scope, ScoredRecord};

/// Thin adapter over the store connection exposing the read primitives the
/// data access layer is built on.
///
/// One instance per request. Batches are request-local `redis::pipe()`
/// values created and consumed inside a single call — there is no batch
/// state on the client itself, so concurrent requests cannot interleave
/// pipelines.
pub struct StoreClient {
    conn: ConnectionManager,
}

impl StoreClient {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Members of the sorted set at `key` by score, descending, windowed by
    /// `scope`. Ties are resolved by the store's lexical order.
    pub async fn ranked_range(&mut self, key: &str, scope: Scope) -> Result<Vec<ScoredRecord>> {
        let raw: Vec<(String, f64)> = self
            .conn
            .zrevrangebyscore_limit_withscores(
                key,
                "+inf",
                "-inf",
                scope.offset as isize,
                scope.limit(),
            )
            .await
            .map_err(AppError::store)?;

        Ok(raw
            .into_iter()
            .map(|(id, score)| ScoredRecord { id, score })
            .collect())
    }

    /// Positional slice of the list at `key`, insertion order preserved.
    pub async fn sequence_range(&mut self, key: &str, scope: Scope) -> Result<Vec<String>> {
        let start = scope.offset as isize;
        let stop = match scope.count {
            Some(0) => return Ok(Vec::new()),
            Some(count) => start + count as isize - 1,
            None => -1,
        };

        self.conn
            .lrange(key, start, stop)
            .await
            .map_err(AppError::store)
    }

    /// Hash contents for every key, fetched in one pipelined round trip.
    ///
    /// Results come back in key order; a missing key yields an empty map,
    /// so the output length always equals the input length. The pipeline is
    /// all-or-nothing: any store failure aborts the whole batch.
    pub async fn field_maps(&mut self, keys: &[String]) -> Result<Vec<HashMap<String, String>>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut pipe = redis::pipe();
        for key in keys {
            pipe.hgetall(key);
        }

        pipe.query_async(&mut self.conn)
            .await
            .map_err(AppError::store)
    }

    /// Plain string value at `key`, if present.
    pub async fn string_value(&mut self, key: &str) -> Result<Option<String>> {
        self.conn.get(key).await.map_err(AppError::store)
    }
}
