//! Handlers for the plan catalog.
//!
//! The catalog is a build-time constant table; these endpoints render it
//! as-is for pricing pages and upgrade dialogs.

use axum::extract::Path;
use axum::Json;
use repolens_core::error::CoreError;
use repolens_core::plan::{PlanInfo, PlanTier};

use crate::error::AppResult;
use crate::response::DataResponse;

/// GET /api/v1/plans
///
/// All tiers in display order.
pub async fn list_plans() -> Json<DataResponse<Vec<&'static PlanInfo>>> {
    let plans = PlanTier::all().iter().map(|t| t.plan()).collect();
    Json(DataResponse { data: plans })
}

/// GET /api/v1/plans/{tier}
///
/// A single tier by its lowercase identifier.
pub async fn get_plan(Path(tier): Path<String>) -> AppResult<Json<DataResponse<&'static PlanInfo>>> {
    let tier = PlanTier::all()
        .iter()
        .find(|t| t.as_str() == tier)
        .ok_or(CoreError::NotFound {
            entity: "plan",
            key: tier,
        })?;

    Ok(Json(DataResponse { data: tier.plan() }))
}
