pub mod health;
pub mod hotel;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hotels                  create (POST)
/// /hotels/{id}             get (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/hotels", hotel::router())
}
