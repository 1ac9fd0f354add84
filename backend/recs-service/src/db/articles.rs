use redis::aio::ConnectionManager;

use super::{brand_key, info_key, recs_key, StoreClient};
use crate::error::Result;
use crate::models::{ArticleInfo, Scope, ScoredRecord};

/// Per-article read operations. Construct one per request.
pub struct ArticleRecords {
    store: StoreClient,
}

impl ArticleRecords {
    pub fn new(conn: ConnectionManager) -> Self {
        Self {
            store: StoreClient::new(conn),
        }
    }

    /// Scored cross-sell recommendations for an article, best first.
    pub async fn recommendations(
        &mut self,
        article_id: &str,
        scope: Scope,
    ) -> Result<Vec<ScoredRecord>> {
        self.store.ranked_range(&recs_key(article_id), scope).await
    }

    /// Metadata hashes for the given article ids, one pipelined round trip.
    ///
    /// The result has exactly one entry per input id, in input order; an
    /// article without an INFO hash yields an empty map.
    pub async fn infos(&mut self, ids: &[String]) -> Result<Vec<ArticleInfo>> {
        let keys: Vec<String> = ids.iter().map(|id| info_key(id)).collect();
        self.store.field_maps(&keys).await
    }

    /// Brand field for an article. Unlike user brand affinities this is a
    /// plain string, not a sorted set.
    pub async fn brand(&mut self, article_id: &str) -> Result<Option<String>> {
        self.store.string_value(&brand_key(article_id)).await
    }
}
