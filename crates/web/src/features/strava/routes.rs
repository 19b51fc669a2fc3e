use axum::{Router, routing::post};

use super::handlers::{connect, list_activities};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/connect", post(connect))
        .route("/activities", post(list_activities))
}
