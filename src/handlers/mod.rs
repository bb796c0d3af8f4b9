use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use tokio::sync::RwLock;

use crate::models::{Event, Guest};
use crate::store::{Body, EventStore};
use crate::utils::AppError;

/// Shared handler state: the one store instance for the process.
///
/// Mutations take the write lock for the whole operation, so each request is
/// one atomic step against the store; reads only block on in-flight writes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<EventStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(EventStore::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.store.read().await.list_events())
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<Body>,
) -> Result<Json<Event>, AppError> {
    let event = state.store.write().await.create_event(&body)?;
    tracing::info!(event_id = %event.event_id, "Event created");
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let event = state.store.write().await.delete_event(&event_id)?;
    tracing::info!(event_id = %event.event_id, "Event deleted");
    Ok(Json(event))
}

pub async fn list_guests(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<Guest>>, AppError> {
    let guests = state.store.read().await.list_guests(&event_id)?;
    Ok(Json(guests))
}

pub async fn create_guest(
    State(state): State<AppState>,
    Json(body): Json<Body>,
) -> Result<Json<Guest>, AppError> {
    let guest = state.store.write().await.create_guest(&body)?;
    tracing::info!(guest_id = %guest.id, "Guest created");
    Ok(Json(guest))
}

pub async fn update_guest(
    State(state): State<AppState>,
    Path((event_id, guest_id)): Path<(String, String)>,
    Json(patch): Json<Body>,
) -> Result<Json<Guest>, AppError> {
    let guest = state
        .store
        .write()
        .await
        .update_guest(&event_id, &guest_id, &patch)?;
    Ok(Json(guest))
}

pub async fn delete_guest(
    State(state): State<AppState>,
    Path((event_id, guest_id)): Path<(String, String)>,
) -> Result<Json<Guest>, AppError> {
    let guest = state.store.write().await.delete_guest(&event_id, &guest_id)?;
    tracing::info!(guest_id = %guest.id, "Guest deleted");
    Ok(Json(guest))
}
