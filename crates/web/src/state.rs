use axum::extract::FromRef;
use importer::StravaImporter;
use std::sync::Arc;
use storage::Database;

use crate::middleware::auth::ApiKeys;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub api_keys: ApiKeys,
    pub strava: StravaService,
}

/// Strava importer, absent when no client credentials are configured
#[derive(Clone, Default)]
pub struct StravaService(pub Option<Arc<StravaImporter>>);

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for ApiKeys {
    fn from_ref(state: &AppState) -> Self {
        state.api_keys.clone()
    }
}

impl FromRef<AppState> for StravaService {
    fn from_ref(state: &AppState) -> Self {
        state.strava.clone()
    }
}
