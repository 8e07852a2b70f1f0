//! Storage contract for the catalog service.
//!
//! [`FavoriteGameStore`] is the only way the service touches persisted
//! state. Implementations must enforce uniqueness of `external_ref_id`
//! themselves and report a collision as [`StoreError::ExternalRefTaken`], so
//! a duplicate check that races a concurrent write still cannot produce two
//! rows with the same reference.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use favorites_core::error::StoreError;
use favorites_core::ordering::SortOrder;
use favorites_core::types::DbId;

use crate::models::favorite_game::{
    FavoriteGame, FavoriteGameChanges, GameFilter, NewFavoriteGame,
};

#[async_trait]
pub trait FavoriteGameStore: Send + Sync {
    async fn find_by_id(&self, id: DbId) -> Result<Option<FavoriteGame>, StoreError>;

    async fn list(&self, order: SortOrder) -> Result<Vec<FavoriteGame>, StoreError>;

    /// Rows matching `filter`, ordered by release year for year ranges and
    /// by recency otherwise.
    async fn find_where(&self, filter: &GameFilter) -> Result<Vec<FavoriteGame>, StoreError>;

    async fn count_where(&self, filter: &GameFilter) -> Result<i64, StoreError>;

    async fn exists_where(&self, filter: &GameFilter) -> Result<bool, StoreError>;

    /// Insert a row, assigning its id.
    async fn insert(&self, game: &NewFavoriteGame) -> Result<FavoriteGame, StoreError>;

    /// Replace the mutable columns of a row. `None` if the row is gone.
    async fn update(
        &self,
        id: DbId,
        changes: &FavoriteGameChanges,
    ) -> Result<Option<FavoriteGame>, StoreError>;

    /// Hard delete. `false` if the row did not exist.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}
