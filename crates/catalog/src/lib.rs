//! Catalog service for favorite games.
//!
//! [`CatalogService`] owns the business rules (validation, duplicate
//! prevention, lookup, search, ordering and statistics) and talks to
//! storage only through [`FavoriteGameStore`].

mod service;

pub use service::CatalogService;

pub use favorites_db::store::FavoriteGameStore;
