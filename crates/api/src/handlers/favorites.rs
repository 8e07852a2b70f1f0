//! Handlers for the `/favorites` resource.
//!
//! Thin wrappers around [`CatalogService`](favorites_catalog::CatalogService):
//! extract, delegate, wrap in the response envelope.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use favorites_core::ordering::SortOrder;
use favorites_core::types::{DbId, ExternalRefId};
use favorites_db::models::favorite_game::FavoriteGameDto;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::{ListParams, NameSearchParams, YearRangeParams};
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// Response body for the external reference existence check.
#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub external_ref_id: ExternalRefId,
    pub exists: bool,
}

/// Response body for the per-platform count.
#[derive(Debug, Serialize)]
pub struct PlatformCount {
    pub platform: String,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/favorites?sort=name
///
/// List every favorite game, most recent first unless `sort=name`.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let order = SortOrder::from_param(params.sort.as_deref());
    let games = state.catalog.list_all(order).await?;
    Ok(Json(ListResponse::new(games)))
}

/// POST /api/v1/favorites
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<FavoriteGameDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let game = state.catalog.add(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: game })))
}

/// GET /api/v1/favorites/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let game = state.catalog.get_by_id(id).await?;
    Ok(Json(DataResponse { data: game }))
}

/// PUT /api/v1/favorites/{id}
///
/// Replace every field except `id` and `added_at`.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<FavoriteGameDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let Json(input) = body?;
    let game = state.catalog.update(id, &input).await?;
    Ok(Json(DataResponse { data: game }))
}

/// DELETE /api/v1/favorites/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/favorites/search?name=mario
pub async fn search_by_name(
    State(state): State<AppState>,
    query: Result<Query<NameSearchParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let games = state.catalog.search_by_name(&params.name).await?;
    Ok(Json(ListResponse::new(games)))
}

/// GET /api/v1/favorites/platform/{platform}
pub async fn search_by_platform(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(platform) = path?;
    let games = state.catalog.search_by_platform(&platform).await?;
    Ok(Json(ListResponse::new(games)))
}

/// GET /api/v1/favorites/platform/{platform}/count
pub async fn count_by_platform(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(platform) = path?;
    let count = state.catalog.count_by_platform(&platform).await?;
    Ok(Json(DataResponse {
        data: PlatformCount { platform, count },
    }))
}

/// GET /api/v1/favorites/year/{year}
pub async fn search_by_year(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(year) = path?;
    let games = state.catalog.search_by_year(year).await?;
    Ok(Json(ListResponse::new(games)))
}

/// GET /api/v1/favorites/years?from=1990&to=1999
pub async fn search_by_year_range(
    State(state): State<AppState>,
    query: Result<Query<YearRangeParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let games = state
        .catalog
        .search_by_year_range(params.from, params.to)
        .await?;
    Ok(Json(ListResponse::new(games)))
}

/// GET /api/v1/favorites/external/{external_ref_id}
pub async fn get_by_external_ref(
    State(state): State<AppState>,
    path: Result<Path<ExternalRefId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(external_ref_id) = path?;
    let game = state.catalog.get_by_external_ref_id(external_ref_id).await?;
    Ok(Json(DataResponse { data: game }))
}

/// GET /api/v1/favorites/external/{external_ref_id}/exists
///
/// Lets clients check for a duplicate before attempting to add.
pub async fn external_ref_exists(
    State(state): State<AppState>,
    path: Result<Path<ExternalRefId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(external_ref_id) = path?;
    let exists = state
        .catalog
        .exists_by_external_ref_id(external_ref_id)
        .await?;
    Ok(Json(DataResponse {
        data: ExistsResponse {
            external_ref_id,
            exists,
        },
    }))
}

/// GET /api/v1/favorites/stats
pub async fn statistics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = state.catalog.statistics().await?;
    Ok(Json(DataResponse { data: stats }))
}
