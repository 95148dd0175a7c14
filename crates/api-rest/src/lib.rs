//! # API REST
//!
//! HTTP surface for the medical orders page.
//!
//! Handles:
//! - The server-rendered page and its accept/reject/disclosure interactions (`pages`)
//! - A JSON API over the same store, documented with OpenAPI/Swagger UI (`orders`)
//! - REST-specific concerns (error mapping, CORS, request tracing)
//!
//! The store lives in [`AppState`]; every handler takes the lock for one synchronous step and
//! releases it before returning, so user actions apply one at a time in arrival order.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod orders;
pub mod pages;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        orders::list_orders,
        orders::get_order,
        orders::list_pending_suggestions,
        orders::accept_suggestion,
        orders::reject_suggestion,
        orders::list_decisions,
    ),
    components(schemas(
        HealthRes,
        orders::EvidenceRes,
        orders::OrderRes,
        orders::ListOrdersRes,
        orders::TransitionRes,
        orders::DecisionRes,
        orders::ListDecisionsRes,
    ))
)]
struct ApiDoc;

/// Build the application router.
///
/// Every route is registered under the configured base path, so a subpath deployment serves
/// the page at `/{repo}` and `/{repo}/`, and the API at `/{repo}/api/...`.
pub fn router(state: AppState) -> Router {
    let base_path = state.config().base_path().to_owned();
    let at = |path: &str| format!("{base_path}{path}");

    let mut routes = Router::new().route(&at("/"), get(pages::index));
    if !base_path.is_empty() {
        routes = routes.route(&base_path, get(pages::index));
    }

    routes
        .route(&at("/suggestions/:id/accept"), post(pages::accept))
        .route(&at("/suggestions/:id/reject"), post(pages::reject))
        .route(&at("/assets/styles.css"), get(pages::stylesheet))
        .route(&at("/health"), get(health))
        .route(&at("/api/orders"), get(orders::list_orders))
        .route(&at("/api/orders/:id"), get(orders::get_order))
        .route(
            &at("/api/suggestions/pending"),
            get(orders::list_pending_suggestions),
        )
        .route(
            &at("/api/suggestions/:id/accept"),
            post(orders::accept_suggestion),
        )
        .route(
            &at("/api/suggestions/:id/reject"),
            post(orders::reject_suggestion),
        )
        .route(&at("/api/decisions"), get(orders::list_decisions))
        .merge(
            SwaggerUi::new(at("/swagger-ui"))
                .url(at("/api-docs/openapi.json"), ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Used for monitoring and load balancer health checks.
async fn health() -> axum::Json<HealthRes> {
    axum::Json(HealthRes {
        ok: true,
        message: "Medical orders service is alive".into(),
    })
}
