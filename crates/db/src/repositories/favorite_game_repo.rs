//! Repository for the `favorite_games` table.

use favorites_core::ordering::SortOrder;
use favorites_core::types::DbId;
use sqlx::PgPool;

use crate::models::favorite_game::{
    FavoriteGame, FavoriteGameChanges, GameFilter, NewFavoriteGame,
};

/// Column list for the `favorite_games` table.
const COLUMNS: &str = "id, name, image_url, platform, release_year, \
    external_ref_id, description, added_at";

/// Shared WHERE clause for [`GameFilter`] lookups.
///
/// Every criterion is a nullable parameter so a single statement serves all
/// filters. `strpos` keeps name search a literal substring match (no LIKE
/// wildcards) and returns 1 for an empty needle, so `''` matches every row.
const FILTER_CLAUSE: &str = "($1::text IS NULL OR strpos(LOWER(name), LOWER($1)) > 0) \
    AND ($2::text IS NULL OR LOWER(platform) = LOWER($2)) \
    AND ($3::int IS NULL OR release_year >= $3) \
    AND ($4::int IS NULL OR release_year <= $4) \
    AND ($5::int IS NULL OR external_ref_id = $5)";

const ORDER_RECENCY: &str = "added_at DESC, id DESC";

/// Names compare by code point (`COLLATE "C"`), independent of the
/// database's default collation, so results match [`MemoryStore`].
///
/// [`MemoryStore`]: crate::store::MemoryStore
const ORDER_NAME: &str = r#"LOWER(name) COLLATE "C", name COLLATE "C", id"#;
const ORDER_YEAR: &str = r#"release_year, LOWER(name) COLLATE "C", name COLLATE "C", id"#;

/// Bind values for [`FILTER_CLAUSE`], in parameter order.
struct FilterParams<'a> {
    name: Option<&'a str>,
    platform: Option<&'a str>,
    year_from: Option<i32>,
    year_to: Option<i32>,
    external_ref_id: Option<i32>,
}

impl<'a> From<&'a GameFilter> for FilterParams<'a> {
    fn from(filter: &'a GameFilter) -> Self {
        let mut params = FilterParams {
            name: None,
            platform: None,
            year_from: None,
            year_to: None,
            external_ref_id: None,
        };
        match filter {
            GameFilter::NameContains(name) => params.name = Some(name.as_str()),
            GameFilter::Platform(platform) => params.platform = Some(platform.as_str()),
            GameFilter::ReleaseYear(year) => {
                params.year_from = Some(*year);
                params.year_to = Some(*year);
            }
            GameFilter::ReleaseYearBetween { from, to } => {
                params.year_from = Some(*from);
                params.year_to = Some(*to);
            }
            GameFilter::ExternalRef(id) => params.external_ref_id = Some(*id),
        }
        params
    }
}

fn order_clause(order: SortOrder) -> &'static str {
    match order {
        SortOrder::RecencyDesc => ORDER_RECENCY,
        SortOrder::NameAsc => ORDER_NAME,
    }
}

/// Provides CRUD and lookup operations for favorite games.
pub struct FavoriteGameRepo;

impl FavoriteGameRepo {
    /// Insert a new favorite game, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewFavoriteGame,
    ) -> Result<FavoriteGame, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorite_games \
                (name, image_url, platform, release_year, external_ref_id, description, added_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FavoriteGame>(&query)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.platform)
            .bind(input.release_year)
            .bind(input.external_ref_id)
            .bind(&input.description)
            .bind(input.added_at)
            .fetch_one(pool)
            .await
    }

    /// Find a favorite game by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FavoriteGame>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorite_games WHERE id = $1");
        sqlx::query_as::<_, FavoriteGame>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every favorite game in the requested order.
    pub async fn list(pool: &PgPool, order: SortOrder) -> Result<Vec<FavoriteGame>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM favorite_games ORDER BY {}",
            order_clause(order)
        );
        sqlx::query_as::<_, FavoriteGame>(&query)
            .fetch_all(pool)
            .await
    }

    /// List favorite games matching `filter`.
    ///
    /// Year-range results are ordered by release year, everything else by
    /// recency.
    pub async fn find_where(
        pool: &PgPool,
        filter: &GameFilter,
    ) -> Result<Vec<FavoriteGame>, sqlx::Error> {
        let order = if filter.orders_by_year() {
            ORDER_YEAR
        } else {
            ORDER_RECENCY
        };
        let query =
            format!("SELECT {COLUMNS} FROM favorite_games WHERE {FILTER_CLAUSE} ORDER BY {order}");
        let params = FilterParams::from(filter);
        sqlx::query_as::<_, FavoriteGame>(&query)
            .bind(params.name)
            .bind(params.platform)
            .bind(params.year_from)
            .bind(params.year_to)
            .bind(params.external_ref_id)
            .fetch_all(pool)
            .await
    }

    /// Count favorite games matching `filter`.
    pub async fn count_where(pool: &PgPool, filter: &GameFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM favorite_games WHERE {FILTER_CLAUSE}");
        let params = FilterParams::from(filter);
        sqlx::query_scalar::<_, i64>(&query)
            .bind(params.name)
            .bind(params.platform)
            .bind(params.year_from)
            .bind(params.year_to)
            .bind(params.external_ref_id)
            .fetch_one(pool)
            .await
    }

    /// Whether any favorite game matches `filter`.
    pub async fn exists_where(pool: &PgPool, filter: &GameFilter) -> Result<bool, sqlx::Error> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM favorite_games WHERE {FILTER_CLAUSE})");
        let params = FilterParams::from(filter);
        sqlx::query_scalar::<_, bool>(&query)
            .bind(params.name)
            .bind(params.platform)
            .bind(params.year_from)
            .bind(params.year_to)
            .bind(params.external_ref_id)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable column of a favorite game.
    ///
    /// `id` and `added_at` are never written. Returns `None` if no row with
    /// the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &FavoriteGameChanges,
    ) -> Result<Option<FavoriteGame>, sqlx::Error> {
        let query = format!(
            "UPDATE favorite_games SET \
                name = $2, \
                image_url = $3, \
                platform = $4, \
                release_year = $5, \
                external_ref_id = $6, \
                description = $7 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FavoriteGame>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.platform)
            .bind(input.release_year)
            .bind(input.external_ref_id)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a favorite game. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorite_games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
