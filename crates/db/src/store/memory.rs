use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use favorites_core::error::StoreError;
use favorites_core::ordering::SortOrder;
use favorites_core::types::DbId;
use tokio::sync::RwLock;

use super::FavoriteGameStore;
use crate::models::favorite_game::{
    FavoriteGame, FavoriteGameChanges, GameFilter, NewFavoriteGame,
};

/// In-process [`FavoriteGameStore`] for tests and embedded use.
///
/// Mirrors the PostgreSQL semantics: ids come from a monotonically
/// increasing counter and are never reused, and `external_ref_id`
/// uniqueness is checked under the same write lock as the mutation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, FavoriteGame>,
}

impl Inner {
    fn external_ref_taken(&self, external_ref_id: Option<i32>, except: Option<DbId>) -> Option<i32> {
        let external_ref_id = external_ref_id?;
        self.rows
            .values()
            .any(|row| Some(row.id) != except && row.external_ref_id == Some(external_ref_id))
            .then_some(external_ref_id)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_rows(rows: &mut [FavoriteGame], order: SortOrder) {
    match order {
        SortOrder::RecencyDesc => {
            rows.sort_by(|a, b| b.added_at.cmp(&a.added_at).then(b.id.cmp(&a.id)));
        }
        SortOrder::NameAsc => {
            rows.sort_by(|a, b| cmp_names(&a.name, &b.name).then(a.id.cmp(&b.id)));
        }
    }
}

/// Lowercased code point order, then exact code point order. Matches the
/// `COLLATE "C"` ordering used by the PostgreSQL repository.
fn cmp_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn sort_by_year(rows: &mut [FavoriteGame]) {
    rows.sort_by(|a, b| {
        a.release_year
            .cmp(&b.release_year)
            .then_with(|| cmp_names(&a.name, &b.name))
            .then(a.id.cmp(&b.id))
    });
}

#[async_trait]
impl FavoriteGameStore for MemoryStore {
    async fn find_by_id(&self, id: DbId) -> Result<Option<FavoriteGame>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn list(&self, order: SortOrder) -> Result<Vec<FavoriteGame>, StoreError> {
        let mut rows: Vec<FavoriteGame> = self.inner.read().await.rows.values().cloned().collect();
        sort_rows(&mut rows, order);
        Ok(rows)
    }

    async fn find_where(&self, filter: &GameFilter) -> Result<Vec<FavoriteGame>, StoreError> {
        let mut rows: Vec<FavoriteGame> = self
            .inner
            .read()
            .await
            .rows
            .values()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        if filter.orders_by_year() {
            sort_by_year(&mut rows);
        } else {
            sort_rows(&mut rows, SortOrder::RecencyDesc);
        }
        Ok(rows)
    }

    async fn count_where(&self, filter: &GameFilter) -> Result<i64, StoreError> {
        let count = self
            .inner
            .read()
            .await
            .rows
            .values()
            .filter(|row| filter.matches(row))
            .count();
        Ok(count as i64)
    }

    async fn exists_where(&self, filter: &GameFilter) -> Result<bool, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .rows
            .values()
            .any(|row| filter.matches(row)))
    }

    async fn insert(&self, game: &NewFavoriteGame) -> Result<FavoriteGame, StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(taken) = inner.external_ref_taken(game.external_ref_id, None) {
            return Err(StoreError::ExternalRefTaken(taken));
        }
        inner.last_id += 1;
        let row = game.clone().into_row(inner.last_id);
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: DbId,
        changes: &FavoriteGameChanges,
    ) -> Result<Option<FavoriteGame>, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.rows.contains_key(&id) {
            return Ok(None);
        }
        if let Some(taken) = inner.external_ref_taken(changes.external_ref_id, Some(id)) {
            return Err(StoreError::ExternalRefTaken(taken));
        }
        Ok(inner.rows.get_mut(&id).map(|row| {
            changes.apply_to(row);
            row.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}
