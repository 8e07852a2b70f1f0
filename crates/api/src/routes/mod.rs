pub mod favorites;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /favorites                                       list, create
/// /favorites/{id}                                  get, update, delete
/// /favorites/search?name=                          name substring search
/// /favorites/platform/{platform}                   platform search
/// /favorites/platform/{platform}/count             platform count
/// /favorites/year/{year}                           exact year search
/// /favorites/years?from=&to=                       year range search
/// /favorites/external/{external_ref_id}            lookup by external reference
/// /favorites/external/{external_ref_id}/exists     existence check
/// /favorites/stats                                 statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/favorites", favorites::router())
}
