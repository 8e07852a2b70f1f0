use async_trait::async_trait;
use favorites_core::error::StoreError;
use favorites_core::ordering::SortOrder;
use favorites_core::types::{DbId, ExternalRefId};

use super::FavoriteGameStore;
use crate::models::favorite_game::{
    FavoriteGame, FavoriteGameChanges, GameFilter, NewFavoriteGame,
};
use crate::repositories::FavoriteGameRepo;
use crate::DbPool;

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Constraint guarding `favorite_games.external_ref_id`.
const EXTERNAL_REF_CONSTRAINT: &str = "uq_favorite_games_external_ref_id";

/// [`FavoriteGameStore`] backed by PostgreSQL through [`FavoriteGameRepo`].
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "favorite_games query failed");
    StoreError::Backend(Box::new(err))
}

/// Classify a write error, surfacing external reference collisions.
fn classify_write_error(err: sqlx::Error, external_ref_id: Option<ExternalRefId>) -> StoreError {
    if let (sqlx::Error::Database(db_err), Some(external_ref_id)) = (&err, external_ref_id) {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
            && db_err.constraint() == Some(EXTERNAL_REF_CONSTRAINT)
        {
            tracing::debug!(external_ref_id, "External reference already taken");
            return StoreError::ExternalRefTaken(external_ref_id);
        }
    }
    backend(err)
}

#[async_trait]
impl FavoriteGameStore for PgStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<FavoriteGame>, StoreError> {
        FavoriteGameRepo::find_by_id(&self.pool, id)
            .await
            .map_err(backend)
    }

    async fn list(&self, order: SortOrder) -> Result<Vec<FavoriteGame>, StoreError> {
        FavoriteGameRepo::list(&self.pool, order)
            .await
            .map_err(backend)
    }

    async fn find_where(&self, filter: &GameFilter) -> Result<Vec<FavoriteGame>, StoreError> {
        FavoriteGameRepo::find_where(&self.pool, filter)
            .await
            .map_err(backend)
    }

    async fn count_where(&self, filter: &GameFilter) -> Result<i64, StoreError> {
        FavoriteGameRepo::count_where(&self.pool, filter)
            .await
            .map_err(backend)
    }

    async fn exists_where(&self, filter: &GameFilter) -> Result<bool, StoreError> {
        FavoriteGameRepo::exists_where(&self.pool, filter)
            .await
            .map_err(backend)
    }

    async fn insert(&self, game: &NewFavoriteGame) -> Result<FavoriteGame, StoreError> {
        FavoriteGameRepo::create(&self.pool, game)
            .await
            .map_err(|e| classify_write_error(e, game.external_ref_id))
    }

    async fn update(
        &self,
        id: DbId,
        changes: &FavoriteGameChanges,
    ) -> Result<Option<FavoriteGame>, StoreError> {
        FavoriteGameRepo::update(&self.pool, id, changes)
            .await
            .map_err(|e| classify_write_error(e, changes.external_ref_id))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        FavoriteGameRepo::delete(&self.pool, id)
            .await
            .map_err(backend)
    }
}
