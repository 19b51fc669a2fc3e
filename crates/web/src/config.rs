use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    pub strava_client_id: Option<String>,
    pub strava_client_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            strava_client_id: optional_var("STRAVA_CLIENT_ID"),
            strava_client_secret: optional_var("STRAVA_CLIENT_SECRET"),
        })
    }

    /// Strava settings, if both the client id and the secret are set
    pub fn strava(&self) -> Option<importer::StravaConfig> {
        match (&self.strava_client_id, &self.strava_client_secret) {
            (Some(id), Some(secret)) => Some(importer::StravaConfig::new(id, secret)),
            _ => None,
        }
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
