//! Data access layer over the recommendation store.
//!
//! Key layout (fixed; the store's producers depend on it):
//! - `<id>/RECS`   — sorted set of recommended article ids, score-weighted
//! - `<id>/BRAND`  — sorted set of brand affinities (users),
//!   plain brand field (articles)
//! - `<id>/RECENT` — list of recently viewed article ids, insertion-ordered
//! - `<id>/INFO`   — hash of article metadata fields
//!
//! One repo instance per request: each owns its own store client handle, so
//! no batch state ever crosses requests.

mod articles;
mod store;
mod users;

pub use articles::ArticleRecords;
pub use store::StoreClient;
pub use users::UserRecords;

pub(crate) fn recs_key(id: &str) -> String {
    format!("{}/RECS", id)
}

pub(crate) fn brand_key(id: &str) -> String {
    format!("{}/BRAND", id)
}

pub(crate) fn recent_key(id: &str) -> String {
    format!("{}/RECENT", id)
}

pub(crate) fn info_key(id: &str) -> String {
    format!("{}/INFO", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_key_layout() {
        assert_eq!(recs_key("42"), "42/RECS");
        assert_eq!(brand_key("42"), "42/BRAND");
        assert_eq!(recent_key("42"), "42/RECENT");
        assert_eq!(info_key("1020304050"), "1020304050/INFO");
    }
}
