//! Resource model for recommendation retrieval.
//!
//! Everything here is built fresh per request from store reads; nothing is
//! persisted by this service. The store owns the write lifecycle of the
//! underlying sorted sets, lists and hashes.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Entry of a descending-by-score sorted set.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub id: String,
    pub score: f64,
}

/// Article metadata hash, keyed by field name. A miss in the store comes
/// back as an empty map, never as a missing entry.
pub type ArticleInfo = HashMap<String, String>;

/// Field names used from the article INFO hash.
pub mod fields {
    pub const DEFAULT_VARIATION: &str = "defaultVariation";
    pub const SHORT_DESC: &str = "shortDesc";
    pub const MANUFACTURER: &str = "manufacturer";
    pub const SALE_PRICE: &str = "salePrice";
    pub const EFFECTIVE_URL: &str = "effectiveUrl";
}

/// Page of an ordered collection: offset plus item count.
/// `count: None` means "all remaining".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub offset: usize,
    pub count: Option<usize>,
}

impl Scope {
    /// Unbounded scope from the start of the collection.
    pub const ALL: Scope = Scope {
        offset: 0,
        count: None,
    };

    pub fn new(offset: usize, count: Option<usize>) -> Self {
        Self { offset, count }
    }

    /// LIMIT count argument for store range commands; `-1` means all
    /// remaining.
    pub fn limit(&self) -> isize {
        self.count.map(|c| c as isize).unwrap_or(-1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationType {
    #[serde(rename = "x-sell")]
    XSell,
    #[serde(rename = "top-brands")]
    TopBrands,
    #[serde(rename = "recently-viewed")]
    RecentlyViewed,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::XSell => "x-sell",
            RecommendationType::TopBrands => "top-brands",
            RecommendationType::RecentlyViewed => "recently-viewed",
        }
    }
}

impl FromStr for RecommendationType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x-sell" => Ok(RecommendationType::XSell),
            "top-brands" => Ok(RecommendationType::TopBrands),
            "recently-viewed" => Ok(RecommendationType::RecentlyViewed),
            other => Err(AppError::UnknownType(other.to_string())),
        }
    }
}

/// First 10 characters of a variation SKU identify its master article.
pub fn master_id(sku: &str) -> String {
    sku.chars().take(10).collect()
}

/// Sellable product variant, derived from an article INFO hash.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub sku: String,
    pub description: String,
    pub brand: String,
    /// Kept as the store's string representation; the store's producers own
    /// formatting and currency.
    pub price: String,
    pub image: String,
    pub master: String,
}

impl ProductVariant {
    /// Derive the variant view from an article's INFO hash. `article_id`
    /// backstops the master id when the hash carries no `defaultVariation`
    /// (the record id is already the master SKU).
    pub fn from_info(article_id: &str, info: &ArticleInfo) -> Self {
        let field = |name: &str| info.get(name).cloned().unwrap_or_default();

        let sku = field(fields::DEFAULT_VARIATION);
        let master = if sku.is_empty() {
            article_id.to_string()
        } else {
            master_id(&sku)
        };

        Self {
            description: field(fields::SHORT_DESC),
            brand: field(fields::MANUFACTURER),
            price: field(fields::SALE_PRICE),
            image: field(fields::EFFECTIVE_URL),
            sku,
            master,
        }
    }
}

/// Brand affinity entry. The store only carries brand names; the id is
/// synthesized from the name (lowercased, non-alphanumeric runs collapsed
/// to `-`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

impl Brand {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = brand_slug(&name);
        Self { id, name }
    }
}

fn brand_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}

/// Payload of a recommendation: a product variant or a bare brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecommendationItem {
    Product(ProductVariant),
    Brand(Brand),
}

/// Ranked recommendation as served to clients. `rank` is 1-based and
/// scope-relative: the first item of a page starting at offset `o` has rank
/// `o + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub rank: u32,
    pub weight: f64,
    #[serde(rename = "type")]
    pub rec_type: RecommendationType,
    pub item: RecommendationItem,
}
