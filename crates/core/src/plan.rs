//! The plan catalog: subscription tiers and the limits each tier grants.
//!
//! The catalog is a build-time constant table. Lookups are pure and cannot
//! fail because [`PlanTier`] is a closed enum. [`PlanInfo`] serializes
//! directly into the shape the pricing table renders, with no
//! transformation step.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Sentinel for "no ceiling" in numeric limit fields.
///
/// This is the only legal negative value in a [`PlanLimits`] record.
pub const UNLIMITED: i32 = -1;

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Subscription tier. Closed set, defined at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Pro,
    Business,
}

impl PlanTier {
    /// All tiers in display order (cheapest first).
    pub fn all() -> &'static [PlanTier] {
        &[PlanTier::Free, PlanTier::Pro, PlanTier::Business]
    }

    /// Lowercase identifier, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Pro => "pro",
            PlanTier::Business => "business",
        }
    }

    /// Catalog entry for this tier.
    pub fn plan(self) -> &'static PlanInfo {
        match self {
            PlanTier::Free => &FREE,
            PlanTier::Pro => &PRO,
            PlanTier::Business => &BUSINESS,
        }
    }
}

impl Default for PlanTier {
    fn default() -> Self {
        PlanTier::Free
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Resource limits granted by a plan tier.
///
/// Exactly one record exists per tier. `-1` ([`UNLIMITED`]) means "no
/// ceiling" in the two integer quota fields; every other numeric field is
/// non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    /// Repository analyses per calendar month (`-1` = unlimited).
    pub repos_per_month: i32,
    /// API calls per day (`-1` = unlimited).
    pub api_calls_per_day: i32,
    /// Whether data export is available.
    pub export_enabled: bool,
    /// Whether AI-powered analysis is available.
    pub ai_analysis: bool,
    /// Whether realtime repository data is available.
    pub realtime_data: bool,
    /// Cache freshness policy: displayed data may be up to this many hours
    /// stale. `0` means always fetch fresh.
    pub cache_hours: u32,
    /// Included team seats. Only the business tier sets this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_seats: Option<u32>,
}

impl PlanLimits {
    /// Validate an externally supplied limits record.
    ///
    /// Catalog entries are correct by construction; this guards records
    /// arriving through the entitlement save surface, where `-1` is the
    /// only legal negative value.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("repos_per_month", self.repos_per_month),
            ("api_calls_per_day", self.api_calls_per_day),
        ] {
            if value < 0 && value != UNLIMITED {
                return Err(CoreError::Validation(format!(
                    "Limit '{field}' must be {UNLIMITED} (unlimited) or >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PlanLimits {
    /// Free-tier limits. Used when deserializing a legacy entitlement blob
    /// that predates the `limits` snapshot field.
    fn default() -> Self {
        FREE.limits.clone()
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One row of the pricing table.
#[derive(Debug, Clone, Serialize)]
pub struct PlanInfo {
    /// The tier this entry describes.
    pub tier: PlanTier,
    /// Display name.
    pub name: &'static str,
    /// Monthly price in whole US dollars.
    pub monthly_price_usd: u32,
    /// External billing-plan identifier. Absent for the free tier, which
    /// never goes through the billing provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_plan_id: Option<&'static str>,
    /// Human-readable feature strings, in display order.
    pub features: &'static [&'static str],
    /// The limits record in effect on this tier.
    pub limits: PlanLimits,
}

pub static FREE: PlanInfo = PlanInfo {
    tier: PlanTier::Free,
    name: "Free",
    monthly_price_usd: 0,
    billing_plan_id: None,
    features: &[
        "5 repository analyses per month",
        "50 API calls per day",
        "Data refreshed daily",
    ],
    limits: PlanLimits {
        repos_per_month: 5,
        api_calls_per_day: 50,
        export_enabled: false,
        ai_analysis: false,
        realtime_data: false,
        cache_hours: 24,
        team_seats: None,
    },
};

pub static PRO: PlanInfo = PlanInfo {
    tier: PlanTier::Pro,
    name: "Pro",
    monthly_price_usd: 9,
    billing_plan_id: Some("plan_pro_monthly"),
    features: &[
        "100 repository analyses per month",
        "1,000 API calls per day",
        "AI-powered analysis",
        "Data export",
        "Realtime repository data",
        "Data refreshed hourly",
    ],
    limits: PlanLimits {
        repos_per_month: 100,
        api_calls_per_day: 1_000,
        export_enabled: true,
        ai_analysis: true,
        realtime_data: true,
        cache_hours: 1,
        team_seats: None,
    },
};

pub static BUSINESS: PlanInfo = PlanInfo {
    tier: PlanTier::Business,
    name: "Business",
    monthly_price_usd: 29,
    billing_plan_id: Some("plan_business_monthly"),
    features: &[
        "Unlimited repository analyses",
        "Unlimited API calls",
        "AI-powered analysis",
        "Data export",
        "Realtime repository data",
        "Always-fresh data",
        "10 team seats",
    ],
    limits: PlanLimits {
        repos_per_month: UNLIMITED,
        api_calls_per_day: UNLIMITED,
        export_enabled: true,
        ai_analysis: true,
        realtime_data: true,
        cache_hours: 0,
        team_seats: Some(10),
    },
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn quota_fields_are_unlimited_or_non_negative() {
        for tier in PlanTier::all() {
            let limits = &tier.plan().limits;
            assert!(
                limits.repos_per_month == UNLIMITED || limits.repos_per_month >= 0,
                "repos_per_month for '{tier}' must be -1 or >= 0"
            );
            assert!(
                limits.api_calls_per_day == UNLIMITED || limits.api_calls_per_day >= 0,
                "api_calls_per_day for '{tier}' must be -1 or >= 0"
            );
        }
    }

    #[test]
    fn only_business_has_team_seats() {
        for tier in PlanTier::all() {
            let limits = &tier.plan().limits;
            if *tier == PlanTier::Business {
                assert!(limits.team_seats.is_some());
            } else {
                assert!(
                    limits.team_seats.is_none(),
                    "tier '{tier}' must not grant team seats"
                );
            }
        }
    }

    #[test]
    fn only_paid_tiers_have_billing_plan_ids() {
        assert!(PlanTier::Free.plan().billing_plan_id.is_none());
        assert!(PlanTier::Pro.plan().billing_plan_id.is_some());
        assert!(PlanTier::Business.plan().billing_plan_id.is_some());
    }

    #[test]
    fn catalog_entries_match_their_tier() {
        for tier in PlanTier::all() {
            assert_eq!(tier.plan().tier, *tier);
        }
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&PlanTier::Business).unwrap();
        assert_eq!(json, "\"business\"");

        let parsed: PlanTier = serde_json::from_str("\"pro\"").unwrap();
        assert_eq!(parsed, PlanTier::Pro);
    }

    #[test]
    fn plan_info_serializes_for_display() {
        let json = serde_json::to_value(PlanTier::Pro.plan()).unwrap();
        assert_eq!(json["name"], "Pro");
        assert_eq!(json["monthly_price_usd"], 9);
        assert_eq!(json["billing_plan_id"], "plan_pro_monthly");
        assert!(json["features"].as_array().unwrap().len() >= 4);
        assert_eq!(json["limits"]["repos_per_month"], 100);
        // Free tier omits the billing id entirely rather than sending null.
        let free = serde_json::to_value(PlanTier::Free.plan()).unwrap();
        assert!(free.get("billing_plan_id").is_none());
    }

    #[test]
    fn default_limits_are_the_free_limits() {
        assert_eq!(PlanLimits::default(), PlanTier::Free.plan().limits);
    }

    #[test]
    fn validate_rejects_negatives_other_than_the_sentinel() {
        let mut limits = PlanLimits::default();
        assert!(limits.validate().is_ok());

        limits.repos_per_month = UNLIMITED;
        assert!(limits.validate().is_ok());

        limits.api_calls_per_day = -2;
        assert_matches!(limits.validate(), Err(CoreError::Validation(_)));
    }
}
