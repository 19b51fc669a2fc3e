use sqlx::PgPool;
use storage::{
    dto::common::{PaginatedResponse, PaginationParams},
    dto::pace_zone::{ComputeZonesResponse, PaceZoneSetResponse},
    error::Result,
    repository::pace_zone::PaceZoneRepository,
    services::pace_zones::{self, PaceError},
};
use uuid::Uuid;

/// Compute zones for a 5K time and record them in the user's history
pub async fn compute_zones(
    pool: &PgPool,
    user_id: Uuid,
    minutes: i64,
    seconds: i64,
) -> std::result::Result<ComputeZonesResponse, PaceError> {
    let outcome = pace_zones::compute_and_store_zones(pool, user_id, minutes, seconds).await?;
    let computed = outcome.computed;

    Ok(ComputeZonesResponse {
        vdot_score: computed.vdot_score,
        time_5k_seconds: computed.time_5k_seconds,
        paces: computed.zones.into(),
        saved: outcome.saved.is_ok(),
        save_error: outcome
            .saved
            .err()
            .map(|_| "Zones were calculated but could not be saved".to_string()),
    })
}

/// Most recently stored zone set
pub async fn get_current_zones(pool: &PgPool, user_id: Uuid) -> Result<PaceZoneSetResponse> {
    let set = pace_zones::get_current_zones(pool, user_id).await?;
    Ok(set.into())
}

/// Stored zone sets, newest first
pub async fn list_history(
    pool: &PgPool,
    user_id: Uuid,
    params: &PaginationParams,
) -> Result<PaginatedResponse<PaceZoneSetResponse>> {
    let repo = PaceZoneRepository::new(pool);
    let total = repo.count_for_user(user_id).await?;
    let sets = repo
        .list_for_user(user_id, params.limit(), params.offset())
        .await?;

    Ok(PaginatedResponse::new(
        sets.into_iter().map(Into::into).collect(),
        params,
        total,
    ))
}
