pub mod health;
pub mod pricing;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /freelancers/{freelancer_id}/pricing     get (public), update, delete (owner)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/freelancers", pricing::router())
}
