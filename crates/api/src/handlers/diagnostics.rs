//! Configuration diagnostics.
//!
//! These endpoints exist to debug deployments where the hosted backend is
//! misconfigured, so they must work no matter how broken the configuration
//! is: every response is HTTP 200 with a descriptive body. Secret values
//! are never echoed -- only presence, length, and (for the URL) a
//! truncated preview.

use axum::extract::State;
use axum::Json;
use chrono::DateTime;
use repolens_cloud::peek_claims;
use repolens_core::types::Timestamp;
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

/// Longest prefix of a non-secret value shown in a preview.
const PREVIEW_CHARS: usize = 24;

// ---------------------------------------------------------------------------
// Environment report
// ---------------------------------------------------------------------------

/// Presence report for one configuration variable.
#[derive(Debug, Serialize)]
pub struct EnvCheck {
    pub name: &'static str,
    pub required: bool,
    /// `"SET"` or `"NOT SET"`. Never the value itself.
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Truncated preview, only for values that are not secrets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnvReport {
    pub checks: Vec<EnvCheck>,
    pub missing_required: Vec<&'static str>,
}

/// GET /api/v1/diagnostics/env
///
/// Which configuration values are present. Always 200; a missing required
/// credential is a `NOT SET` row, not an error.
pub async fn env_report(State(state): State<AppState>) -> Json<DataResponse<EnvReport>> {
    let cloud = &state.config.cloud;

    let checks = vec![
        public_check("CLOUD_URL", true, cloud.url.as_deref()),
        secret_check("CLOUD_ANON_KEY", true, cloud.anon_key.as_deref()),
        secret_check("CLOUD_SERVICE_KEY", false, cloud.service_key.as_deref()),
        secret_check("CLOUD_JWT_SECRET", true, cloud.jwt_secret.as_deref()),
    ];

    Json(DataResponse {
        data: EnvReport {
            checks,
            missing_required: state.config.missing_required(),
        },
    })
}

fn secret_check(name: &'static str, required: bool, value: Option<&str>) -> EnvCheck {
    EnvCheck {
        name,
        required,
        status: if value.is_some() { "SET" } else { "NOT SET" },
        length: value.map(|v| v.len()),
        preview: None,
    }
}

fn public_check(name: &'static str, required: bool, value: Option<&str>) -> EnvCheck {
    let mut check = secret_check(name, required, value);
    check.preview = value.map(truncate_preview);
    check
}

fn truncate_preview(value: &str) -> String {
    if value.chars().count() <= PREVIEW_CHARS {
        return value.to_owned();
    }
    let prefix: String = value.chars().take(PREVIEW_CHARS).collect();
    format!("{prefix}...")
}

// ---------------------------------------------------------------------------
// Token report
// ---------------------------------------------------------------------------

/// What the configured anon key claims to be, plus a cross-check that the
/// configured URL actually belongs to the claimed project.
#[derive(Debug, Serialize)]
pub struct TokenReport {
    /// Whether an anon key is configured at all.
    pub present: bool,
    /// Whether the key parsed as a three-segment token with JSON claims.
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_ref: Option<String>,
    /// Whether `CLOUD_URL` contains the claimed project ref. Absent when
    /// either side is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_contains_ref: Option<bool>,
}

/// GET /api/v1/diagnostics/token
///
/// Decode the configured anon key's claims segment (no signature check)
/// and report what it says. Malformed keys produce a structured `error`
/// field in a 200 body, never an HTTP error.
pub async fn token_report(State(state): State<AppState>) -> Json<DataResponse<TokenReport>> {
    let cloud = &state.config.cloud;

    let Some(anon_key) = cloud.anon_key.as_deref() else {
        return Json(DataResponse {
            data: TokenReport {
                present: false,
                valid: false,
                error: Some("CLOUD_ANON_KEY is not set".into()),
                issuer: None,
                role: None,
                expires_at: None,
                project_ref: None,
                url_contains_ref: None,
            },
        });
    };

    let report = match peek_claims(anon_key) {
        Ok(claims) => {
            let url_contains_ref = match (cloud.url.as_deref(), claims.project_ref.as_deref()) {
                (Some(url), Some(project_ref)) => Some(url.contains(project_ref)),
                _ => None,
            };
            TokenReport {
                present: true,
                valid: true,
                error: None,
                issuer: claims.iss,
                role: claims.role,
                expires_at: claims.exp.and_then(|exp| DateTime::from_timestamp(exp, 0)),
                project_ref: claims.project_ref,
                url_contains_ref,
            }
        }
        Err(error) => TokenReport {
            present: true,
            valid: false,
            error: Some(error.to_string()),
            issuer: None,
            role: None,
            expires_at: None,
            project_ref: None,
            url_contains_ref: None,
        },
    };

    Json(DataResponse { data: report })
}
