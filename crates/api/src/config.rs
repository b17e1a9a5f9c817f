use std::path::PathBuf;

use repolens_cloud::CloudConfig;

/// Server configuration loaded from environment variables.
///
/// Infrastructure fields (bind address, timeouts) have development
/// defaults and fail fast on unparseable values. Backend credentials are
/// different: they may legitimately be absent, in which case the server
/// still starts and the diagnostics endpoints report what is missing.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the key-value state files.
    pub state_dir: PathBuf,
    /// Whether the plan-override escape hatch is enabled. Off by default;
    /// turn on per-environment for development and testing only.
    pub dev_plan_override: bool,
    /// The runtime's reported locale tag (from `LANG`), used to derive a
    /// locale default when no preference is saved.
    pub runtime_locale_tag: Option<String>,
    /// Hosted backend credentials.
    pub cloud: CloudConfig,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATE_DIR`            | `./state`                  |
    /// | `DEV_PLAN_OVERRIDE`    | `false`                    |
    ///
    /// Cloud credentials (`CLOUD_URL`, `CLOUD_ANON_KEY`, `CLOUD_SERVICE_KEY`,
    /// `CLOUD_JWT_SECRET`) are loaded by [`CloudConfig::from_env`] and have
    /// no defaults.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let state_dir = std::env::var("STATE_DIR")
            .unwrap_or_else(|_| "./state".into())
            .into();

        let dev_plan_override = std::env::var("DEV_PLAN_OVERRIDE")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let runtime_locale_tag = std::env::var("LANG").ok().filter(|v| !v.is_empty());

        let cloud = CloudConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            state_dir,
            dev_plan_override,
            runtime_locale_tag,
            cloud,
        }
    }

    /// Names of required configuration variables that are not set.
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.cloud.missing_required()
    }
}
