//! Field constraints for favorite game records.
//!
//! Validation runs before any record reaches storage. Checks are applied in a
//! fixed order (name, image URL, platform, release year) so the first reported
//! violation is deterministic for a given input.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Minimum length of a game name, in characters.
pub const NAME_MIN_LEN: usize = 2;

/// Maximum length of a game name, in characters.
pub const NAME_MAX_LEN: usize = 255;

/// Maximum length of a platform label, in characters.
pub const PLATFORM_MAX_LEN: usize = 100;

/// Earliest accepted release year.
pub const RELEASE_YEAR_MIN: i32 = 1970;

/// Default latest accepted release year. Overridable via [`GameRules`].
pub const DEFAULT_RELEASE_YEAR_MAX: i32 = 2024;

pub const FIELD_NAME: &str = "name";
pub const FIELD_IMAGE_URL: &str = "image_url";
pub const FIELD_PLATFORM: &str = "platform";
pub const FIELD_RELEASE_YEAR: &str = "release_year";

/// Image URLs must be http(s) and point at a common raster image file.
const IMAGE_URL_PATTERN: &str = r"(?i)^https?://.*\.(jpg|jpeg|png|gif|webp)$";

static IMAGE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IMAGE_URL_PATTERN).expect("valid regex"));

/* --------------------------------------------------------------------------
Types
-------------------------------------------------------------------------- */

/// Configurable bounds applied during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub release_year_min: i32,
    pub release_year_max: i32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            release_year_min: RELEASE_YEAR_MIN,
            release_year_max: DEFAULT_RELEASE_YEAR_MAX,
        }
    }
}

impl GameRules {
    /// Rules with a custom upper bound for release years.
    pub fn with_release_year_max(release_year_max: i32) -> Self {
        Self {
            release_year_max,
            ..Self::default()
        }
    }
}

/// Borrowed view of the validated fields of an incoming record.
///
/// `external_ref_id`, `description` and the timestamps carry no constraints
/// beyond their type, so they are not part of the view.
#[derive(Debug, Clone, Copy)]
pub struct GameFields<'a> {
    pub name: &'a str,
    pub image_url: Option<&'a str>,
    pub platform: Option<&'a str>,
    pub release_year: Option<i32>,
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate all fields, returning the first violation found.
pub fn validate(fields: &GameFields<'_>, rules: &GameRules) -> Result<(), CoreError> {
    match validate_all(fields, rules).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Validate all fields, returning every violation in check order.
pub fn validate_all(fields: &GameFields<'_>, rules: &GameRules) -> Vec<CoreError> {
    [
        validate_name(fields.name),
        fields.image_url.map_or(Ok(()), validate_image_url),
        fields.platform.map_or(Ok(()), validate_platform),
        fields
            .release_year
            .map_or(Ok(()), |year| validate_release_year(year, rules)),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

/// Validate that the name is non-blank and within length bounds.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::validation(FIELD_NAME, "Name is required"));
    }
    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(CoreError::validation(
            FIELD_NAME,
            format!("Name must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters (got {len})"),
        ));
    }
    Ok(())
}

/// Validate that the image URL is http(s) and ends in a supported extension.
pub fn validate_image_url(url: &str) -> Result<(), CoreError> {
    if IMAGE_URL_RE.is_match(url) {
        Ok(())
    } else {
        Err(CoreError::validation(
            FIELD_IMAGE_URL,
            "Image must be an http(s) URL ending in jpg, jpeg, png, gif or webp",
        ))
    }
}

/// Validate that the platform label does not exceed its maximum length.
pub fn validate_platform(platform: &str) -> Result<(), CoreError> {
    let len = platform.chars().count();
    if len > PLATFORM_MAX_LEN {
        return Err(CoreError::validation(
            FIELD_PLATFORM,
            format!("Platform must not exceed {PLATFORM_MAX_LEN} characters (got {len})"),
        ));
    }
    Ok(())
}

/// Validate that the release year falls within the configured bounds.
pub fn validate_release_year(year: i32, rules: &GameRules) -> Result<(), CoreError> {
    if year < rules.release_year_min || year > rules.release_year_max {
        return Err(CoreError::validation(
            FIELD_RELEASE_YEAR,
            format!(
                "Release year must be between {} and {} (got {year})",
                rules.release_year_min, rules.release_year_max
            ),
        ));
    }
    Ok(())
}

/// Validate that a year range is not inverted.
pub fn validate_year_range(from: i32, to: i32) -> Result<(), CoreError> {
    if from > to {
        return Err(CoreError::validation(
            "from",
            format!("Range start {from} must not be after range end {to}"),
        ));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
