use std::env;

pub const DEFAULT_PROFILE: &str = "default";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub profile: String,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, so callers can supply values without touching the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup("PROFILE")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            if profile == DEFAULT_PROFILE {
                "sqlite://scroll_portal.db?mode=rwc".to_string()
            } else {
                format!("sqlite://scroll_portal_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            seed_demo: lookup("SEED_DEMO")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(false),
            profile,
        }
    }
}
