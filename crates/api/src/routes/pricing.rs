//! Route definitions for freelancer pricing, mounted at `/freelancers`.

use axum::routing::get;
use axum::Router;

use crate::handlers::pricing;
use crate::state::AppState;

/// Pricing routes.
///
/// ```text
/// GET    /{freelancer_id}/pricing -> get_pricing
/// PUT    /{freelancer_id}/pricing -> update_pricing
/// DELETE /{freelancer_id}/pricing -> delete_pricing
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{freelancer_id}/pricing",
        get(pricing::get_pricing)
            .put(pricing::update_pricing)
            .delete(pricing::delete_pricing),
    )
}
