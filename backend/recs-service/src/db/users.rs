use redis::aio::ConnectionManager;

use super::{brand_key, recent_key, recs_key, StoreClient};
use crate::error::Result;
use crate::models::{Scope, ScoredRecord};

/// Per-user read operations. Construct one per request.
pub struct UserRecords {
    store: StoreClient,
}

impl UserRecords {
    pub fn new(conn: ConnectionManager) -> Self {
        Self {
            store: StoreClient::new(conn),
        }
    }

    /// Scored cross-sell recommendations for a user, best first.
    pub async fn recommendations(
        &mut self,
        user_id: &str,
        scope: Scope,
    ) -> Result<Vec<ScoredRecord>> {
        self.store.ranked_range(&recs_key(user_id), scope).await
    }

    /// Brand affinities for a user, strongest first.
    pub async fn top_brands(&mut self, user_id: &str, scope: Scope) -> Result<Vec<ScoredRecord>> {
        self.store.ranked_range(&brand_key(user_id), scope).await
    }

    /// Recently viewed article ids, in the order the store recorded them.
    pub async fn recent_views(&mut self, user_id: &str, scope: Scope) -> Result<Vec<String>> {
        self.store.sequence_range(&recent_key(user_id), scope).await
    }
}
