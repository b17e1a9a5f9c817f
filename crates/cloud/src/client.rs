//! Guarded construction and HTTP calls for the hosted backend.

use serde::Deserialize;

/// Credentials and endpoint for the hosted backend, loaded once at startup.
///
/// Every field is optional at load time: missing values are reported by
/// [`CloudConfig::missing_required`] and surfaced through the diagnostics
/// endpoints rather than aborting the process.
#[derive(Debug, Clone, Default)]
pub struct CloudConfig {
    /// Project base URL (`CLOUD_URL`).
    pub url: Option<String>,
    /// Publishable API key sent with every request (`CLOUD_ANON_KEY`).
    pub anon_key: Option<String>,
    /// Privileged server-side key (`CLOUD_SERVICE_KEY`, optional).
    pub service_key: Option<String>,
    /// HS256 secret the provider signs identity tokens with
    /// (`CLOUD_JWT_SECRET`).
    pub jwt_secret: Option<String>,
}

impl CloudConfig {
    /// Load cloud credentials from environment variables.
    ///
    /// | Env Var            | Required |
    /// |--------------------|----------|
    /// | `CLOUD_URL`        | **yes**  |
    /// | `CLOUD_ANON_KEY`   | **yes**  |
    /// | `CLOUD_SERVICE_KEY`| no       |
    /// | `CLOUD_JWT_SECRET` | **yes**  |
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            url: non_empty_env("CLOUD_URL"),
            anon_key: non_empty_env("CLOUD_ANON_KEY"),
            service_key: non_empty_env("CLOUD_SERVICE_KEY"),
            jwt_secret: non_empty_env("CLOUD_JWT_SECRET"),
        }
    }

    /// Names of required variables that are not set.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.url.is_none() {
            missing.push("CLOUD_URL");
        }
        if self.anon_key.is_none() {
            missing.push("CLOUD_ANON_KEY");
        }
        if self.jwt_secret.is_none() {
            missing.push("CLOUD_JWT_SECRET");
        }
        missing
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Errors from the hosted backend.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("Cloud request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// ---------------------------------------------------------------------------
// Handle
// ---------------------------------------------------------------------------

/// The application's single handle to the hosted backend.
///
/// `Unavailable` is an explicit sentinel, not an error: the server runs
/// without the backend, and routes that need it answer 503 with the list of
/// missing credentials.
pub enum CloudHandle {
    Ready(CloudClient),
    Unavailable { missing: Vec<&'static str> },
}

impl CloudHandle {
    /// Construct the client if and only if the connection credentials are
    /// present.
    pub fn connect(config: &CloudConfig) -> Self {
        match (&config.url, &config.anon_key) {
            (Some(url), Some(anon_key)) => {
                tracing::info!(url = %url, "Cloud client ready");
                CloudHandle::Ready(CloudClient::new(url.clone(), anon_key.clone()))
            }
            _ => {
                let mut missing = Vec::new();
                if config.url.is_none() {
                    missing.push("CLOUD_URL");
                }
                if config.anon_key.is_none() {
                    missing.push("CLOUD_ANON_KEY");
                }
                tracing::warn!(?missing, "Cloud client unavailable");
                CloudHandle::Unavailable { missing }
            }
        }
    }

    /// The client, when ready.
    pub fn client(&self) -> Option<&CloudClient> {
        match self {
            CloudHandle::Ready(client) => Some(client),
            CloudHandle::Unavailable { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the hosted backend's auth API.
#[derive(Clone)]
pub struct CloudClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

/// Identity record returned by the provider's user endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CloudUser {
    pub id: String,
    pub email: Option<String>,
}

impl CloudClient {
    fn new(base_url: String, anon_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            anon_key,
        }
    }

    /// Project base URL the client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve the user behind an access token.
    ///
    /// Returns `Ok(None)` when the provider rejects the token (expired,
    /// revoked, or not one of ours); transport failures are errors.
    pub async fn fetch_user(&self, access_token: &str) -> Result<Option<CloudUser>, CloudError> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if matches!(response.status().as_u16(), 401 | 403 | 404) {
            return Ok(None);
        }

        let user = response.error_for_status()?.json::<CloudUser>().await?;
        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: Option<&str>, anon_key: Option<&str>) -> CloudConfig {
        CloudConfig {
            url: url.map(String::from),
            anon_key: anon_key.map(String::from),
            service_key: None,
            jwt_secret: Some("secret".into()),
        }
    }

    #[test]
    fn connect_requires_url_and_anon_key() {
        let handle = CloudHandle::connect(&config(Some("https://abcd1234.repolens.dev"), None));
        match handle {
            CloudHandle::Unavailable { missing } => {
                assert_eq!(missing, vec!["CLOUD_ANON_KEY"]);
            }
            CloudHandle::Ready(_) => panic!("must not construct a client without an anon key"),
        }
    }

    #[test]
    fn connect_with_credentials_is_ready() {
        let handle = CloudHandle::connect(&config(
            Some("https://abcd1234.repolens.dev/"),
            Some("anon-key"),
        ));
        let client = handle.client().expect("client should be ready");
        // Trailing slash is normalized away.
        assert_eq!(client.base_url(), "https://abcd1234.repolens.dev");
    }

    #[test]
    fn missing_required_lists_unset_names() {
        let cfg = CloudConfig::default();
        assert_eq!(
            cfg.missing_required(),
            vec!["CLOUD_URL", "CLOUD_ANON_KEY", "CLOUD_JWT_SECRET"]
        );

        let cfg = config(Some("https://x.repolens.dev"), Some("k"));
        assert!(cfg.missing_required().is_empty());
    }
}
