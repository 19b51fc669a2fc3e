use axum::{Router, routing::get};

use super::handlers::{get_profile, update_profile};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}
