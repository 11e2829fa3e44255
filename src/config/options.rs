// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Settings shared by the GUI and the ETL: where the database lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbOptions {
    pub path: PathBuf,
}

impl Default for DbOptions {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_DATABASE) }
    }
}

/// GUI-only settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuiOptions {
    pub tutorial_path: PathBuf,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self { tutorial_path: PathBuf::from(DEFAULT_TUTORIAL) }
    }
}

/// ETL-only settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtlOptions {
    pub quotes_base_url: String,
    pub comments_url: String,
    pub http_timeout: Duration,
    pub max_pages: u32,
    /// Drop and recreate every table before loading.
    pub fresh: bool,
}

impl Default for EtlOptions {
    fn default() -> Self {
        Self {
            quotes_base_url: s!(DEFAULT_QUOTES_BASE_URL),
            comments_url: s!(DEFAULT_COMMENTS_URL),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            max_pages: DEFAULT_MAX_PAGES,
            fresh: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub db: DbOptions,
    pub gui: GuiOptions,
    pub etl: EtlOptions,
}

impl AppOptions {
    /// Read `.env` (if present) and then the process environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(p) => logd!("Config: loaded {}", p.display()),
            Err(e) if e.not_found() => logd!("Config: no .env file"),
            Err(e) => logw!("Config: ignoring unreadable .env ({e})"),
        }
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut o = Self::default();

        if let Some(v) = get("DATABASE_NAME") { o.db.path = PathBuf::from(v); }
        if let Some(v) = get("TUTORIAL_PATH") { o.gui.tutorial_path = PathBuf::from(v); }
        if let Some(v) = get("QUOTES_BASE_URL") {
            o.etl.quotes_base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = get("COMMENTS_URL") { o.etl.comments_url = v; }
        if let Some(v) = get("HTTP_TIMEOUT_SECS") {
            match v.parse::<u64>() {
                Ok(secs) if secs > 0 => o.etl.http_timeout = Duration::from_secs(secs),
                _ => logw!("Config: HTTP_TIMEOUT_SECS={v:?} is not a positive integer, keeping default"),
            }
        }
        if let Some(v) = get("ETL_MAX_PAGES") {
            match v.parse::<u32>() {
                Ok(n) if n > 0 => o.etl.max_pages = n,
                _ => logw!("Config: ETL_MAX_PAGES={v:?} is not a positive integer, keeping default"),
            }
        }
        o
    }
}
