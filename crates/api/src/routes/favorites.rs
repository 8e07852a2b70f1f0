//! Route definitions for favorite games.

use axum::routing::get;
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /search                            -> search_by_name
/// GET    /platform/{platform}               -> search_by_platform
/// GET    /platform/{platform}/count         -> count_by_platform
/// GET    /year/{year}                       -> search_by_year
/// GET    /years                             -> search_by_year_range
/// GET    /external/{external_ref_id}        -> get_by_external_ref
/// GET    /external/{external_ref_id}/exists -> external_ref_exists
/// GET    /stats                             -> statistics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::list).post(favorites::create))
        .route("/search", get(favorites::search_by_name))
        .route("/stats", get(favorites::statistics))
        .route("/years", get(favorites::search_by_year_range))
        .route("/year/{year}", get(favorites::search_by_year))
        .route("/platform/{platform}", get(favorites::search_by_platform))
        .route(
            "/platform/{platform}/count",
            get(favorites::count_by_platform),
        )
        .route(
            "/external/{external_ref_id}",
            get(favorites::get_by_external_ref),
        )
        .route(
            "/external/{external_ref_id}/exists",
            get(favorites::external_ref_exists),
        )
        .route(
            "/{id}",
            get(favorites::get_by_id)
                .put(favorites::update)
                .delete(favorites::delete),
        )
}
