//! Handlers for freelancer pricing.
//!
//! Reads are public. Updates and deletes require a bearer token whose user
//! owns the freelancer profile. The ownership check runs before the payload is
//! validated, so 404 and 403 never depend on body content.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use rateboard_core::gate::{self, PricingAction};
use rateboard_core::pricing::{self, PricingUpdate, PricingView};
use rateboard_core::reconciler;
use rateboard_core::types::DbId;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /freelancers/{freelancer_id}/pricing
// ---------------------------------------------------------------------------

/// Get a freelancer's pricing.
///
/// Returns the empty shape (all tiers `null`) when nothing is stored yet.
pub async fn get_pricing(
    State(state): State<AppState>,
    Path(freelancer_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let view = reconciler::get_pricing(state.store.as_ref(), freelancer_id).await?;

    tracing::debug!(
        %freelancer_id,
        stored = matches!(view, PricingView::Stored(_)),
        "Fetched freelancer pricing",
    );

    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// PUT /freelancers/{freelancer_id}/pricing
// ---------------------------------------------------------------------------

/// Update the hourly rate and/or packages, returning the merged profile view.
pub async fn update_pricing(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(freelancer_id): Path<DbId>,
    AppJson(input): AppJson<PricingUpdate>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let authorized =
        gate::authorize(store, freelancer_id, &auth.caller(), PricingAction::Update).await?;
    pricing::validate_update(&input)?;
    let view = reconciler::apply_update(store, &authorized, &input, chrono::Utc::now()).await?;

    tracing::info!(
        %freelancer_id,
        user_id = %auth.user_id,
        rate_changed = input.hourly_rate.is_some(),
        packages_replaced = input.pricing.is_some(),
        "Freelancer pricing updated",
    );

    Ok(Json(DataResponse { data: view }))
}

// ---------------------------------------------------------------------------
// DELETE /freelancers/{freelancer_id}/pricing
// ---------------------------------------------------------------------------

/// Delete the pricing record and clear the hourly rate.
pub async fn delete_pricing(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(freelancer_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let store = state.store.as_ref();
    let authorized =
        gate::authorize(store, freelancer_id, &auth.caller(), PricingAction::Delete).await?;
    let ack = reconciler::delete_pricing(store, &authorized).await?;

    tracing::info!(%freelancer_id, user_id = %auth.user_id, "Freelancer pricing deleted");

    Ok(Json(DataResponse { data: ack }))
}
