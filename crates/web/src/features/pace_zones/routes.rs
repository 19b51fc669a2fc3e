use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{compute_zones, get_current_zones, list_zone_history};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(compute_zones))
        .route("/current", get(get_current_zones))
        .route("/history", get(list_zone_history))
}
