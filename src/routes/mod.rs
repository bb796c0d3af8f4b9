use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::create_cors_layer;
use crate::handlers::{
    create_event, create_guest, delete_event, delete_guest, list_events, list_guests,
    update_guest, AppState,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_guest))
        .route("/event", get(list_events).post(create_event))
        .route("/event/:event_id", delete(delete_event))
        .route("/event/:event_id/guest-list", get(list_guests))
        .route(
            "/event/:event_id/guest/:guest_id",
            patch(update_guest).delete(delete_guest),
        )
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}
