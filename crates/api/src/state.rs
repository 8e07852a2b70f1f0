use favorites_catalog::CatalogService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the catalog holds its store behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog business operations over the configured store.
    pub catalog: CatalogService,
}
