use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers;
use crate::shared::store::AppState;

/// Build the full API router. One block per entity, same verb layout
/// everywhere: GET list, GET by id, POST upsert, DELETE.
pub fn api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/customers", get(handlers::customers::list_all))
        .route("/api/customers", post(handlers::customers::upsert))
        .route("/api/customers/:id", get(handlers::customers::get_by_id))
        .route("/api/customers/:id", delete(handlers::customers::delete))
        .route("/api/products", get(handlers::products::list_all))
        .route("/api/products", post(handlers::products::upsert))
        .route("/api/products/:id", get(handlers::products::get_by_id))
        .route("/api/products/:id", delete(handlers::products::delete))
        .route("/api/orders", get(handlers::orders::list_all))
        .route("/api/orders", post(handlers::orders::upsert))
        .route("/api/orders/:id", get(handlers::orders::get_by_id))
        .route("/api/orders/:id", delete(handlers::orders::delete))
        .route("/api/inquiries", get(handlers::inquiries::list_all))
        .route("/api/inquiries", post(handlers::inquiries::upsert))
        .route("/api/inquiries/:id", get(handlers::inquiries::get_by_id))
        .route("/api/inquiries/:id", delete(handlers::inquiries::delete))
        .route("/api/system/users", get(handlers::users::list_all))
        .route("/api/system/users", post(handlers::users::upsert))
        .route("/api/system/users/:id", get(handlers::users::get_by_id))
        .route("/api/system/users/:id", delete(handlers::users::delete))
        .route("/api/dashboard/summary", get(handlers::dashboard::summary))
        .layer(cors)
        .with_state(state)
}
