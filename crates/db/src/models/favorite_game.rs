//! Favorite game entity model and DTOs.
//!
//! The persisted row ([`FavoriteGame`]) and the external-facing shape
//! ([`FavoriteGameDto`]) are separate structs joined by pure
//! mapping functions. Only `id` and `added_at` differ in ownership: storage
//! assigns them, callers never do.

use favorites_core::favorite_game::GameFields;
use favorites_core::types::{DbId, ExternalRefId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `favorite_games` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FavoriteGame {
    pub id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub platform: Option<String>,
    pub release_year: Option<i32>,
    pub external_ref_id: Option<ExternalRefId>,
    pub description: Option<String>,
    pub added_at: Timestamp,
}

/// External-facing record, used both as request body and response payload.
///
/// `id` and `added_at` are ignored on input and always present on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteGameDto {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub external_ref_id: Option<ExternalRefId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub added_at: Option<Timestamp>,
}

/// Values for inserting a new row. The id is left to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavoriteGame {
    pub name: String,
    pub image_url: Option<String>,
    pub platform: Option<String>,
    pub release_year: Option<i32>,
    pub external_ref_id: Option<ExternalRefId>,
    pub description: Option<String>,
    pub added_at: Timestamp,
}

/// Full replacement of the mutable columns of an existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteGameChanges {
    pub name: String,
    pub image_url: Option<String>,
    pub platform: Option<String>,
    pub release_year: Option<i32>,
    pub external_ref_id: Option<ExternalRefId>,
    pub description: Option<String>,
}

/// Selection criteria understood by every storage implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameFilter {
    /// Case-insensitive substring of the name. Empty matches everything.
    NameContains(String),
    /// Case-insensitive exact platform.
    Platform(String),
    /// Exact release year.
    ReleaseYear(i32),
    /// Inclusive release year range.
    ReleaseYearBetween { from: i32, to: i32 },
    /// Exact external reference id.
    ExternalRef(ExternalRefId),
}

/* --------------------------------------------------------------------------
Mapping
-------------------------------------------------------------------------- */

impl From<FavoriteGame> for FavoriteGameDto {
    fn from(game: FavoriteGame) -> Self {
        Self {
            id: Some(game.id),
            name: game.name,
            image_url: game.image_url,
            platform: game.platform,
            release_year: game.release_year,
            external_ref_id: game.external_ref_id,
            description: game.description,
            added_at: Some(game.added_at),
        }
    }
}

impl FavoriteGameDto {
    /// Borrow the fields subject to validation.
    pub fn fields(&self) -> GameFields<'_> {
        GameFields {
            name: &self.name,
            image_url: self.image_url.as_deref(),
            platform: self.platform.as_deref(),
            release_year: self.release_year,
        }
    }

    /// Insert values for this record, stamped with the creation instant.
    pub fn to_new(&self, added_at: Timestamp) -> NewFavoriteGame {
        NewFavoriteGame {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            platform: self.platform.clone(),
            release_year: self.release_year,
            external_ref_id: self.external_ref_id,
            description: self.description.clone(),
            added_at,
        }
    }

    /// Replacement values for an existing record.
    pub fn to_changes(&self) -> FavoriteGameChanges {
        FavoriteGameChanges {
            name: self.name.clone(),
            image_url: self.image_url.clone(),
            platform: self.platform.clone(),
            release_year: self.release_year,
            external_ref_id: self.external_ref_id,
            description: self.description.clone(),
        }
    }
}

impl NewFavoriteGame {
    /// The row this insert produces once storage assigns `id`.
    pub fn into_row(self, id: DbId) -> FavoriteGame {
        FavoriteGame {
            id,
            name: self.name,
            image_url: self.image_url,
            platform: self.platform,
            release_year: self.release_year,
            external_ref_id: self.external_ref_id,
            description: self.description,
            added_at: self.added_at,
        }
    }
}

impl FavoriteGameChanges {
    /// Apply the changes to `game`, leaving `id` and `added_at` untouched.
    pub fn apply_to(&self, game: &mut FavoriteGame) {
        game.name.clone_from(&self.name);
        game.image_url.clone_from(&self.image_url);
        game.platform.clone_from(&self.platform);
        game.release_year = self.release_year;
        game.external_ref_id = self.external_ref_id;
        game.description.clone_from(&self.description);
    }
}

impl GameFilter {
    /// Evaluate the filter against a row held in memory.
    ///
    /// Must agree with the SQL produced by the repository.
    pub fn matches(&self, game: &FavoriteGame) -> bool {
        match self {
            GameFilter::NameContains(needle) => game
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            GameFilter::Platform(platform) => game
                .platform
                .as_deref()
                .is_some_and(|p| p.to_lowercase() == platform.to_lowercase()),
            GameFilter::ReleaseYear(year) => game.release_year == Some(*year),
            GameFilter::ReleaseYearBetween { from, to } => game
                .release_year
                .is_some_and(|y| (*from..=*to).contains(&y)),
            GameFilter::ExternalRef(id) => game.external_ref_id == Some(*id),
        }
    }

    /// Whether results are ordered by release year rather than recency.
    pub fn orders_by_year(&self) -> bool {
        matches!(self, GameFilter::ReleaseYearBetween { .. })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn row() -> FavoriteGame {
        FavoriteGame {
            id: 7,
            name: "Super Mario Bros.".to_string(),
            image_url: Some("https://example.com/smb.png".to_string()),
            platform: Some("NES".to_string()),
            release_year: Some(1985),
            external_ref_id: Some(4200),
            description: None,
            added_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn row_maps_to_dto_field_for_field() {
        let dto = FavoriteGameDto::from(row());
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.name, "Super Mario Bros.");
        assert_eq!(dto.platform.as_deref(), Some("NES"));
        assert_eq!(dto.external_ref_id, Some(4200));
        assert_eq!(dto.added_at, Some(row().added_at));
    }

    #[test]
    fn dto_to_new_uses_supplied_timestamp_not_dto_timestamp() {
        let mut dto = FavoriteGameDto::from(row());
        dto.added_at = None;
        let stamp = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let new = dto.to_new(stamp);
        assert_eq!(new.added_at, stamp);
        assert_eq!(new.into_row(99).id, 99);
    }

    #[test]
    fn changes_preserve_id_and_added_at() {
        let mut game = row();
        let changes = FavoriteGameDto {
            id: Some(1),
            name: "Zelda".to_string(),
            added_at: Some(Utc::now()),
            ..Default::default()
        }
        .to_changes();
        changes.apply_to(&mut game);
        assert_eq!(game.id, 7);
        assert_eq!(game.added_at, row().added_at);
        assert_eq!(game.name, "Zelda");
        assert_eq!(game.platform, None);
        assert_eq!(game.external_ref_id, None);
    }

    #[test]
    fn dto_deserializes_without_id_or_timestamp() {
        let dto: FavoriteGameDto =
            serde_json::from_str(r#"{"name":"Celeste","release_year":2018}"#).unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.added_at, None);
        assert_eq!(dto.release_year, Some(2018));
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let game = row();
        assert!(GameFilter::NameContains("mario".into()).matches(&game));
        assert!(GameFilter::NameContains(String::new()).matches(&game));
        assert!(!GameFilter::NameContains("zelda".into()).matches(&game));
    }

    #[test]
    fn platform_filter_is_case_insensitive_exact() {
        let game = row();
        assert!(GameFilter::Platform("nes".into()).matches(&game));
        assert!(!GameFilter::Platform("SNES".into()).matches(&game));
        assert!(!GameFilter::Platform("NE".into()).matches(&game));
    }

    #[test]
    fn year_filters_never_match_undated_rows() {
        let mut game = row();
        game.release_year = None;
        assert!(!GameFilter::ReleaseYear(1985).matches(&game));
        assert!(!GameFilter::ReleaseYearBetween { from: 1900, to: 2100 }.matches(&game));
    }
}
