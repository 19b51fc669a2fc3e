use sqlx::PgPool;
use storage::{
    dto::profile::UpdateProfileRequest, error::Result, models::Profile,
    repository::profile::ProfileRepository,
};
use uuid::Uuid;

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Profile> {
    let repo = ProfileRepository::new(pool);
    repo.find(user_id).await
}

pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    request: &UpdateProfileRequest,
) -> Result<Profile> {
    let full_name = request
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());

    let repo = ProfileRepository::new(pool);
    repo.upsert_full_name(user_id, full_name).await
}
