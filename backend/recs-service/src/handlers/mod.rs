pub mod recommendations;

// Re-export handlers for convenience
pub use recommendations::{
    get_article_brand, get_article_recommendation_items, get_article_recommendations,
    get_user_recommendation_items, get_user_recommendations, AppState,
};
