pub mod candidate;
pub mod city;
pub mod file;
pub mod form;
pub mod health;
pub mod user;
pub mod vacancy;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/candidates",
            get(candidate::list_candidates).post(candidate::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(candidate::get_candidate)
                .put(candidate::update_candidate)
                .delete(candidate::delete_candidate),
        )
        .route(
            "/api/vacancies",
            get(vacancy::list_vacancies).post(vacancy::create_vacancy),
        )
        .route(
            "/api/vacancies/:id",
            get(vacancy::get_vacancy)
                .put(vacancy::update_vacancy)
                .delete(vacancy::delete_vacancy),
        )
        .route("/api/cities", get(city::list_cities))
        .route("/api/files/:id", get(file::download_file))
        .route("/api/users/register", post(user::register))
        .route("/api/users/login", post(user::login))
        .route("/api/users/delete", post(user::delete_user))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
