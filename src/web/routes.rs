//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/quran", get(handlers::quran_index))
        .route("/quran/:number", get(handlers::surah_page))
        .route("/hadith", get(handlers::hadith_index))
        .route("/hadith/:id", get(handlers::chapter_page))
        .route("/chat", get(handlers::chat_page))
        .route("/stats", get(handlers::stats_page))
        .route("/language", get(handlers::set_language))
        // JSON API
        .route("/api/surahs", get(handlers::api_surahs))
        .route("/api/surah/:number", get(handlers::api_surah))
        .route("/api/quran/search", get(handlers::api_quran_search))
        .route("/api/quran/editions", get(handlers::api_quran_editions))
        .route("/api/hadith/chapters", get(handlers::api_hadith_chapters))
        .route("/api/hadith/chapters/:id", get(handlers::api_chapter_hadiths))
        .route("/api/hadith/search", get(handlers::api_hadith_search))
        .route("/api/hadith/random", get(handlers::api_random_hadiths))
        .route("/api/chat", post(handlers::api_chat))
        .route("/health", get(handlers::health))
        // Static routes
        .route("/robots.txt", get(handlers::robots_txt))
        .route("/favicon.ico", get(handlers::favicon))
        // Middleware
        .layer(cors)
        // State
        .with_state(state)
}
