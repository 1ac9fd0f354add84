use actix_web::{web, App, HttpServer};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recs_service::config::Config;
use recs_service::handlers::{
    get_article_brand, get_article_recommendation_items, get_article_recommendations,
    get_user_recommendation_items, get_user_recommendations, AppState,
};
use redis_utils::RedisPool;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting recs-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Connect to the recommendation store
    let pool = match RedisPool::connect(&config.redis.url).await {
        Ok(pool) => {
            tracing::info!("Recommendation store connection established");
            pool
        }
        Err(e) => {
            tracing::error!("Failed to connect to the recommendation store: {:#}", e);
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to connect to the recommendation store: {:#}", e),
            ));
        }
    };

    let state = web::Data::new(AppState {
        redis: pool.manager(),
    });

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/health", web::get().to(|| async { "OK" }))
            .service(get_user_recommendations)
            .service(get_user_recommendation_items)
            .service(get_article_recommendations)
            .service(get_article_recommendation_items)
            .service(get_article_brand)
    })
    .bind(format!("0.0.0.0:{}", config.app.port))?
    .run()
    .await
}
