//! HTTP API server with observability for the enrollment registry.
//!
//! Maps REST endpoints for courses, students, and enrollments onto the
//! `Registrar` facade, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use domain::Registrar;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::health::welcome))
        .route("/health", get(routes::health::check))
        .route(
            "/courses",
            get(routes::courses::list).post(routes::courses::create),
        )
        .route(
            "/courses/{course_id}",
            get(routes::courses::get).delete(routes::courses::delete),
        )
        .route(
            "/courses/{course_id}/{course_name}",
            put(routes::courses::rename),
        )
        .route("/courses/{course_id}/students", get(routes::courses::students))
        .route(
            "/courses/{course_id}/students/{student_id}",
            get(routes::courses::enrollee)
                .post(routes::courses::enroll)
                .delete(routes::courses::unenroll),
        )
        .route(
            "/students",
            get(routes::students::list).post(routes::students::create),
        )
        .route(
            "/students/{student_id}",
            get(routes::students::get).delete(routes::students::delete),
        )
        .route("/students/{student_id}/courses", get(routes::students::courses))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state around the given registrar.
pub fn create_state(registrar: Registrar) -> Arc<AppState> {
    Arc::new(AppState { registrar })
}

/// Creates application state over the fixture tables.
pub fn create_default_state() -> Arc<AppState> {
    create_state(Registrar::seeded())
}
