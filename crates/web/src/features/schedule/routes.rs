use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::handlers::{
    complete, get_week, get_year_timeline, reschedule, schedule_workout, uncomplete, unschedule,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(schedule_workout))
        .route("/week", get(get_week))
        .route("/year/:year", get(get_year_timeline))
        .route("/:id", delete(unschedule))
        .route("/:id/date", put(reschedule))
        .route("/:id/complete", put(complete).delete(uncomplete))
}
