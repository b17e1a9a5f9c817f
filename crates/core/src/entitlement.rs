//! Entitlement state: the locally persisted record of a user's current
//! plan, remaining quota, and subscription status.
//!
//! The record is owned by the persistence store and is always replaced
//! wholesale; nothing merges or partially updates it. Gating decisions go
//! through [`EntitlementState::effective`] so an expired subscription is
//! read as free-tier access even though the stored record still says
//! `is_pro`. The stored blob is never rewritten on expiry.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::plan::{PlanLimits, PlanTier, BUSINESS};
use crate::types::Timestamp;

/// Quota written by the forced-upgrade path, for both analysis kinds.
pub const FORCED_UPGRADE_QUOTA: u32 = 100;

/// Forward expiry window written by the forced-upgrade path.
pub const FORCED_UPGRADE_PERIOD_DAYS: i64 = 30;

// ---------------------------------------------------------------------------
// Subscription metadata
// ---------------------------------------------------------------------------

/// Subscription status as last reported by the billing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    #[default]
    Inactive,
    Canceled,
    PastDue,
}

/// Billing-provider subscription metadata carried in the entitlement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SubscriptionInfo {
    pub status: SubscriptionStatus,
    /// End of the current billing period. A past value downgrades the
    /// record to free-tier gating at read time.
    pub current_period_end: Option<Timestamp>,
}

/// Usage counters, reset externally on billing-cycle rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UsageCounters {
    pub analyses: u32,
    pub ai_analyses: u32,
}

// ---------------------------------------------------------------------------
// Entitlement state
// ---------------------------------------------------------------------------

/// The per-user entitlement record.
///
/// Serde defaults keep legacy blobs readable: a field missing from a stored
/// record deserializes to its free-tier default instead of failing the read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitlementState {
    pub is_pro: bool,
    /// Repository analyses remaining in the current period.
    pub analyses_remaining: u32,
    /// AI analyses remaining in the current period.
    pub ai_analyses_remaining: u32,
    pub subscription: SubscriptionInfo,
    pub usage: UsageCounters,
    /// Snapshot of the limits in effect when the record was written.
    pub limits: PlanLimits,
}

impl Default for EntitlementState {
    fn default() -> Self {
        Self::free()
    }
}

impl EntitlementState {
    /// The state every caller assumes when no record exists: free-tier
    /// limits, a fresh month of free quota, no AI allowance.
    pub fn free() -> Self {
        let limits = PlanTier::Free.plan().limits.clone();
        EntitlementState {
            is_pro: false,
            analyses_remaining: limits.repos_per_month.max(0) as u32,
            ai_analyses_remaining: 0,
            subscription: SubscriptionInfo::default(),
            usage: UsageCounters::default(),
            limits,
        }
    }

    /// The synthetic business-equivalent state written by the override
    /// mechanism: full quota and a 30-day forward expiry.
    pub fn forced_business(now: Timestamp) -> Self {
        EntitlementState {
            is_pro: true,
            analyses_remaining: FORCED_UPGRADE_QUOTA,
            ai_analyses_remaining: FORCED_UPGRADE_QUOTA,
            subscription: SubscriptionInfo {
                status: SubscriptionStatus::Active,
                current_period_end: Some(now + Duration::days(FORCED_UPGRADE_PERIOD_DAYS)),
            },
            usage: UsageCounters::default(),
            limits: BUSINESS.limits.clone(),
        }
    }

    /// Whether the billing period this record belongs to has ended.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.subscription
            .current_period_end
            .is_some_and(|end| end < now)
    }

    /// The gating view of this record at `now`.
    ///
    /// Expired records come back downgraded to free-tier gating regardless
    /// of the stored `is_pro` flag. Usage counters and the stale period end
    /// are kept so callers can show why the downgrade happened. Non-expired
    /// records come back unchanged.
    pub fn effective(&self, now: Timestamp) -> EntitlementState {
        if !self.is_expired(now) {
            return self.clone();
        }
        let mut downgraded = EntitlementState::free();
        downgraded.usage = self.usage;
        downgraded.subscription = SubscriptionInfo {
            status: SubscriptionStatus::Inactive,
            current_period_end: self.subscription.current_period_end,
        };
        downgraded
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
