use std::sync::Arc;

use chrono::Utc;
use favorites_core::error::{CoreError, StoreError};
use favorites_core::favorite_game::{validate, validate_year_range, GameRules};
use favorites_core::ordering::SortOrder;
use favorites_core::statistics::{summarize, CatalogStatistics};
use favorites_core::types::{DbId, ExternalRefId};
use favorites_db::models::favorite_game::{FavoriteGame, FavoriteGameDto, GameFilter};
use favorites_db::store::FavoriteGameStore;

/// Entity name used in [`CoreError::NotFound`].
const ENTITY: &str = "FavoriteGame";

/// Entity name used when a lookup by external reference misses.
const EXTERNAL_REF_ENTITY: &str = "FavoriteGame external reference";

/// Business operations over the favorite games catalog.
///
/// Stateless apart from its configuration; cheap to clone and safe to share
/// across concurrent requests. Every read reflects whatever storage has
/// committed at call time.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn FavoriteGameStore>,
    rules: GameRules,
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: ENTITY, id }
}

/// Translate a storage uniqueness violation into the domain duplicate error.
fn map_store_error(err: StoreError) -> CoreError {
    match err {
        StoreError::ExternalRefTaken(external_ref_id) => CoreError::Duplicate { external_ref_id },
        other => CoreError::Storage(other),
    }
}

fn to_dtos(rows: Vec<FavoriteGame>) -> Vec<FavoriteGameDto> {
    rows.into_iter().map(FavoriteGameDto::from).collect()
}

impl CatalogService {
    pub fn new(store: Arc<dyn FavoriteGameStore>, rules: GameRules) -> Self {
        Self { store, rules }
    }

    /// Every favorite game in the requested order.
    pub async fn list_all(&self, order: SortOrder) -> Result<Vec<FavoriteGameDto>, CoreError> {
        let rows = self.store.list(order).await?;
        Ok(to_dtos(rows))
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<FavoriteGameDto, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .map(FavoriteGameDto::from)
            .ok_or_else(|| not_found(id))
    }

    /// Validate and insert a new favorite game.
    ///
    /// `id` and `added_at` on the input are ignored; storage assigns the id
    /// and the creation instant is taken here.
    pub async fn add(&self, input: &FavoriteGameDto) -> Result<FavoriteGameDto, CoreError> {
        validate(&input.fields(), &self.rules)?;

        if let Some(external_ref_id) = input.external_ref_id {
            if self.exists_by_external_ref_id(external_ref_id).await? {
                return Err(CoreError::Duplicate { external_ref_id });
            }
        }

        let row = self
            .store
            .insert(&input.to_new(Utc::now()))
            .await
            .map_err(map_store_error)?;
        tracing::info!(id = row.id, external_ref_id = ?row.external_ref_id, "Favorite game added");
        Ok(row.into())
    }

    /// Replace every field of an existing favorite game except `id` and
    /// `added_at`.
    pub async fn update(
        &self,
        id: DbId,
        input: &FavoriteGameDto,
    ) -> Result<FavoriteGameDto, CoreError> {
        let existing = self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        validate(&input.fields(), &self.rules)?;

        if let Some(external_ref_id) = input.external_ref_id {
            if existing.external_ref_id != Some(external_ref_id)
                && self.exists_by_external_ref_id(external_ref_id).await?
            {
                return Err(CoreError::Duplicate { external_ref_id });
            }
        }

        let row = self
            .store
            .update(id, &input.to_changes())
            .await
            .map_err(map_store_error)?
            // Deleted between the lookup and the write.
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, external_ref_id = ?row.external_ref_id, "Favorite game updated");
        Ok(row.into())
    }

    /// Permanently remove a favorite game.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(id, "Favorite game deleted");
        Ok(())
    }

    /// Games whose name contains `substring`, ignoring case. An empty
    /// substring matches every game.
    pub async fn search_by_name(&self, substring: &str) -> Result<Vec<FavoriteGameDto>, CoreError> {
        self.find(GameFilter::NameContains(substring.to_string()))
            .await
    }

    /// Games whose platform equals `platform`, ignoring case.
    pub async fn search_by_platform(
        &self,
        platform: &str,
    ) -> Result<Vec<FavoriteGameDto>, CoreError> {
        self.find(GameFilter::Platform(platform.to_string())).await
    }

    /// Games released in exactly `year`.
    pub async fn search_by_year(&self, year: i32) -> Result<Vec<FavoriteGameDto>, CoreError> {
        self.find(GameFilter::ReleaseYear(year)).await
    }

    /// Games released between `from` and `to` inclusive, oldest first.
    pub async fn search_by_year_range(
        &self,
        from: i32,
        to: i32,
    ) -> Result<Vec<FavoriteGameDto>, CoreError> {
        validate_year_range(from, to)?;
        self.find(GameFilter::ReleaseYearBetween { from, to }).await
    }

    /// Number of games on `platform`, ignoring case.
    pub async fn count_by_platform(&self, platform: &str) -> Result<i64, CoreError> {
        Ok(self
            .store
            .count_where(&GameFilter::Platform(platform.to_string()))
            .await?)
    }

    pub async fn get_by_external_ref_id(
        &self,
        external_ref_id: ExternalRefId,
    ) -> Result<FavoriteGameDto, CoreError> {
        self.store
            .find_where(&GameFilter::ExternalRef(external_ref_id))
            .await?
            .into_iter()
            .next()
            .map(FavoriteGameDto::from)
            .ok_or(CoreError::NotFound {
                entity: EXTERNAL_REF_ENTITY,
                id: DbId::from(external_ref_id),
            })
    }

    pub async fn exists_by_external_ref_id(
        &self,
        external_ref_id: ExternalRefId,
    ) -> Result<bool, CoreError> {
        Ok(self
            .store
            .exists_where(&GameFilter::ExternalRef(external_ref_id))
            .await?)
    }

    /// Total count plus a per-decade breakdown of release years.
    pub async fn statistics(&self) -> Result<CatalogStatistics, CoreError> {
        let rows = self.store.list(SortOrder::RecencyDesc).await?;
        Ok(summarize(rows.iter().map(|row| row.release_year)))
    }

    async fn find(&self, filter: GameFilter) -> Result<Vec<FavoriteGameDto>, CoreError> {
        let rows = self.store.find_where(&filter).await?;
        Ok(to_dtos(rows))
    }
}
