//! Turns raw store records plus batch-fetched metadata into ranked,
//! typed recommendation resources.
//!
//! Records arrive already ordered (score-descending or insertion order);
//! assembly never reorders. Ranks are 1-based and scope-relative: a page
//! starting at offset `o` begins at rank `o + 1`.

use tracing::warn;

use crate::models::{
    ArticleInfo, Brand, ProductVariant, Recommendation, RecommendationItem, RecommendationType,
    ScoredRecord,
};

/// Build product recommendations from scored records and their
/// positionally-matched INFO hashes.
///
/// An empty info map (store miss) still produces an item — with default
/// fields and the master id backstopped from the record — so a page is
/// never silently shortened; the condition is logged as a data-quality
/// warning.
pub fn assemble_products(
    records: &[ScoredRecord],
    infos: &[ArticleInfo],
    rec_type: RecommendationType,
    scope_offset: usize,
) -> Vec<Recommendation> {
    records
        .iter()
        .zip(infos)
        .enumerate()
        .map(|(index, (record, info))| {
            if info.is_empty() {
                warn!(
                    article_id = %record.id,
                    "no metadata for recommended article, serving defaults"
                );
            }
            Recommendation {
                rank: rank_at(scope_offset, index),
                weight: record.score,
                rec_type,
                item: RecommendationItem::Product(ProductVariant::from_info(&record.id, info)),
            }
        })
        .collect()
}

/// Build recently-viewed recommendations from bare article ids.
///
/// The weight is a fixed `0.0`: the RECENT list carries no scores, by
/// design, so there is no score source for this type.
pub fn assemble_recent(
    ids: &[String],
    infos: &[ArticleInfo],
    scope_offset: usize,
) -> Vec<Recommendation> {
    ids.iter()
        .zip(infos)
        .enumerate()
        .map(|(index, (id, info))| {
            if info.is_empty() {
                warn!(
                    article_id = %id,
                    "no metadata for recently viewed article, serving defaults"
                );
            }
            Recommendation {
                rank: rank_at(scope_offset, index),
                weight: 0.0,
                rec_type: RecommendationType::RecentlyViewed,
                item: RecommendationItem::Product(ProductVariant::from_info(id, info)),
            }
        })
        .collect()
}

/// Build top-brand recommendations. Brands carry no article metadata, so no
/// batch fetch is involved.
pub fn assemble_brands(records: &[ScoredRecord], scope_offset: usize) -> Vec<Recommendation> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| Recommendation {
            rank: rank_at(scope_offset, index),
            weight: record.score,
            rec_type: RecommendationType::TopBrands,
            item: RecommendationItem::Brand(Brand::named(record.id.clone())),
        })
        .collect()
}

fn rank_at(scope_offset: usize, index: usize) -> u32 {
    (scope_offset + index + 1) as u32
}
