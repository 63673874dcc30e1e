//! REST API surface: router, handlers, and status mapping.
//!
//! One handler per store operation.  Handlers hold the database lock only
//! for the duration of the synchronous store call; there is no await point
//! while the lock is held.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use aviary_shared::{Bird, BirdFields};
use aviary_store::Database;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Database>>,
}

pub fn build_router(state: AppState) -> Router {
    // The browser frontend is served from a different origin during
    // development, so CORS is open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/birds", get(list_birds).post(create_bird))
        .route(
            "/api/birds/:id",
            get(get_bird).put(update_bird).delete(delete_bird),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Lock the database, mapping a poisoned lock to this operation's 500.
fn lock_db<'a>(
    state: &'a AppState,
    message: &'static str,
) -> Result<MutexGuard<'a, Database>, ApiError> {
    state.db.lock().map_err(|e| ApiError::Internal {
        message,
        detail: format!("Lock poisoned: {e}"),
    })
}

async fn list_birds(State(state): State<AppState>) -> Result<Json<Vec<Bird>>, ApiError> {
    let db = lock_db(&state, "Error retrieving birds")?;
    let birds = db
        .list_birds()
        .map_err(|e| ApiError::from_store("Error retrieving birds", e))?;
    Ok(Json(birds))
}

async fn create_bird(
    State(state): State<AppState>,
    payload: Result<Json<BirdFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Bird>), ApiError> {
    let Json(fields) = payload.map_err(|e| ApiError::BadRequest {
        message: "Error creating bird",
        detail: e.body_text(),
    })?;

    let db = lock_db(&state, "Error creating bird")?;
    let bird = db
        .create_bird(&fields)
        .map_err(|e| ApiError::from_store("Error creating bird", e))?;

    info!(id = %bird.id, name = %bird.fields.common_name, "Bird created");

    Ok((StatusCode::CREATED, Json(bird)))
}

async fn get_bird(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Bird>, ApiError> {
    let db = lock_db(&state, "Error retrieving bird")?;
    let bird = db
        .get_bird(&id)
        .map_err(|e| ApiError::from_store("Error retrieving bird", e))?;
    Ok(Json(bird))
}

async fn update_bird(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BirdFields>, JsonRejection>,
) -> Result<Json<Bird>, ApiError> {
    let Json(fields) = payload.map_err(|e| ApiError::BadRequest {
        message: "Error updating bird",
        detail: e.body_text(),
    })?;

    let db = lock_db(&state, "Error updating bird")?;
    let bird = db
        .update_bird(&id, &fields)
        .map_err(|e| ApiError::from_store("Error updating bird", e))?;

    info!(id = %bird.id, "Bird updated");

    Ok(Json(bird))
}

async fn delete_bird(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let db = lock_db(&state, "Error deleting bird")?;
    db.delete_bird(&id)
        .map_err(|e| ApiError::from_store("Error deleting bird", e))?;

    info!(id = %id, "Bird deleted");

    Ok(Json(MessageResponse {
        message: "Bird deleted successfully",
    }))
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
