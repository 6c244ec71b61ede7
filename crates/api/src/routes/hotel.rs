//! Route definitions for the `/hotels` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::hotel;
use crate::state::AppState;

/// Routes mounted at `/hotels`.
///
/// ```text
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(hotel::create))
        .route("/{id}", get(hotel::get_by_id))
}
