use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::WebError;

/// The user an API key belongs to, inserted into request extensions by [`require_auth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

/// API keys mapped to the user each one authenticates
#[derive(Clone, Default)]
pub struct ApiKeys {
    keys: Arc<HashMap<String, Uuid>>,
}

impl ApiKeys {
    /// Parses `key:user-uuid` pairs separated by commas.
    ///
    /// Malformed entries are skipped with a warning.
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|entry| {
                let parsed = entry
                    .split_once(':')
                    .and_then(|(key, user)| Some((key.trim(), Uuid::parse_str(user.trim()).ok()?)))
                    .filter(|(key, _)| !key.is_empty());

                if parsed.is_none() {
                    tracing::warn!("Ignoring malformed API_KEYS entry");
                }
                parsed.map(|(key, user)| (key.to_string(), user))
            })
            .collect();

        Self {
            keys: Arc::new(keys),
        }
    }

    pub fn user_for(&self, key: &str) -> Option<Uuid> {
        self.keys.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or(WebError::Unauthorized)?;

    let Some(user_id) = api_keys.user_for(token.trim()) else {
        tracing::warn!("Invalid API key attempt");
        return Err(WebError::Unauthorized);
    };

    request.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "7c1e0c3a-2f4b-4d8e-9a51-0b6f3c2d1e90";

    #[test]
    fn test_parses_key_user_pairs() {
        let keys = ApiKeys::from_comma_separated(&format!("alpha:{USER}, beta : {USER} ,"));
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.user_for("alpha"), Uuid::parse_str(USER).ok());
        assert_eq!(keys.user_for("beta"), Uuid::parse_str(USER).ok());
        assert_eq!(keys.user_for("gamma"), None);
    }

    #[test]
    fn test_skips_malformed_entries() {
        let keys = ApiKeys::from_comma_separated(&format!("nouser,bad:not-a-uuid,:{USER},ok:{USER}"));
        assert_eq!(keys.len(), 1);
        assert!(keys.user_for("ok").is_some());
    }

    #[test]
    fn test_empty_configuration() {
        assert!(ApiKeys::from_comma_separated("").is_empty());
    }
}
