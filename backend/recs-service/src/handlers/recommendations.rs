/// Recommendation retrieval endpoints
///
/// Thin glue: parse the range header and path parameters, fetch the ordered
/// slice through the data access layer, assemble ranked resources, mirror
/// the served slice in a `Content-Range` header.
use actix_web::http::header;
use actix_web::{get, web, HttpRequest, HttpResponse};
use redis::aio::ConnectionManager;
use serde::Serialize;
use tracing::debug;

use crate::db::{ArticleRecords, UserRecords};
use crate::error::{AppError, Result};
use crate::http::range;
use crate::models::{
    master_id, Recommendation, RecommendationItem, RecommendationType, Scope,
};
use crate::services::{assemble_brands, assemble_products, assemble_recent};

/// Shared application state: the store connection pool. Repos and batch
/// handles are built per request from clones of it.
pub struct AppState {
    pub redis: ConnectionManager,
}

/// Full recommendation view
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub result: Vec<Recommendation>,
}

/// Item-only view, the Recommendation wrapper stripped
#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub result: Vec<RecommendationItem>,
}

#[derive(Debug, Serialize)]
pub struct ArticleBrandResponse {
    pub result: Option<String>,
}

/// GET /api/users/{owner}/recommendations/{rec_type}
/// Ranked recommendations of the selected type for a user
#[get("/api/users/{owner}/recommendations/{rec_type}")]
pub async fn get_user_recommendations(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let (owner, selector) = path.into_inner();
    let scope = range::scope_from_request(&req)?;
    let rec_type: RecommendationType = selector.parse()?;

    debug!(
        "Serving {} recommendations for user {}, offset {}",
        rec_type.as_str(),
        owner,
        scope.offset
    );

    let result = fetch_user_recommendations(&state, &owner, rec_type, scope).await?;
    let content_range = range::content_range(scope, result.len());

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_RANGE, content_range))
        .json(RecommendationsResponse { result }))
}

/// GET /api/users/{owner}/recommendations/{rec_type}/items
/// Same page, stripped down to the items
#[get("/api/users/{owner}/recommendations/{rec_type}/items")]
pub async fn get_user_recommendation_items(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let (owner, selector) = path.into_inner();
    let scope = range::scope_from_request(&req)?;
    let rec_type: RecommendationType = selector.parse()?;

    let recommendations = fetch_user_recommendations(&state, &owner, rec_type, scope).await?;
    let content_range = range::content_range(scope, recommendations.len());
    let result = recommendations.into_iter().map(|rec| rec.item).collect();

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_RANGE, content_range))
        .json(ItemsResponse { result }))
}

/// GET /api/articles/{article_id}/recommendations
/// Cross-sell recommendations for an article
#[get("/api/articles/{article_id}/recommendations")]
pub async fn get_article_recommendations(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let article_id = normalize_article_id(&path.into_inner())?;
    let scope = range::scope_from_request(&req)?;

    debug!("Serving x-sell recommendations for article {}", article_id);

    let result = fetch_article_recommendations(&state, &article_id, scope).await?;
    let content_range = range::content_range(scope, result.len());

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_RANGE, content_range))
        .json(RecommendationsResponse { result }))
}

/// GET /api/articles/{article_id}/recommendations/items
#[get("/api/articles/{article_id}/recommendations/items")]
pub async fn get_article_recommendation_items(
    req: HttpRequest,
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let article_id = normalize_article_id(&path.into_inner())?;
    let scope = range::scope_from_request(&req)?;

    let recommendations = fetch_article_recommendations(&state, &article_id, scope).await?;
    let content_range = range::content_range(scope, recommendations.len());
    let result = recommendations.into_iter().map(|rec| rec.item).collect();

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_RANGE, content_range))
        .json(ItemsResponse { result }))
}

/// GET /api/articles/{article_id}/brand
/// Brand field of an article (plain value, not a ranked list)
#[get("/api/articles/{article_id}/brand")]
pub async fn get_article_brand(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let article_id = normalize_article_id(&path.into_inner())?;

    let mut articles = ArticleRecords::new(state.redis.clone());
    let result = articles.brand(&article_id).await?;

    Ok(HttpResponse::Ok().json(ArticleBrandResponse { result }))
}

async fn fetch_user_recommendations(
    state: &AppState,
    owner: &str,
    rec_type: RecommendationType,
    scope: Scope,
) -> Result<Vec<Recommendation>> {
    let owner = require_param("owner", owner)?;
    let mut users = UserRecords::new(state.redis.clone());

    match rec_type {
        RecommendationType::XSell => {
            let records = users.recommendations(owner, scope).await?;
            let ids: Vec<String> = records.iter().map(|record| record.id.clone()).collect();
            let mut articles = ArticleRecords::new(state.redis.clone());
            let infos = articles.infos(&ids).await?;
            Ok(assemble_products(&records, &infos, rec_type, scope.offset))
        }
        RecommendationType::TopBrands => {
            let records = users.top_brands(owner, scope).await?;
            Ok(assemble_brands(&records, scope.offset))
        }
        RecommendationType::RecentlyViewed => {
            let ids = users.recent_views(owner, scope).await?;
            let mut articles = ArticleRecords::new(state.redis.clone());
            let infos = articles.infos(&ids).await?;
            Ok(assemble_recent(&ids, &infos, scope.offset))
        }
    }
}

async fn fetch_article_recommendations(
    state: &AppState,
    article_id: &str,
    scope: Scope,
) -> Result<Vec<Recommendation>> {
    let mut articles = ArticleRecords::new(state.redis.clone());

    let records = articles.recommendations(article_id, scope).await?;
    let ids: Vec<String> = records.iter().map(|record| record.id.clone()).collect();
    let infos = articles.infos(&ids).await?;

    Ok(assemble_products(
        &records,
        &infos,
        RecommendationType::XSell,
        scope.offset,
    ))
}

/// Article path parameters may carry a full variation SKU; keys are built
/// from the master id, its first 10 characters.
fn normalize_article_id(raw: &str) -> Result<String> {
    let raw = require_param("article_id", raw)?;
    Ok(master_id(raw))
}

fn require_param<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::MissingRequiredParameter(name.to_string()));
    }
    Ok(trimmed)
}
