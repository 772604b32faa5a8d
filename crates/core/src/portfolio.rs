//! Portfolio item categories, publication status, validation, and stats.
//!
//! Portfolio rows store `category` and `status` as TEXT; the enums here are
//! the canonical set of accepted values and their display labels.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const CATEGORY_PERSONAL: &str = "personal";
pub const CATEGORY_COMMERCIAL: &str = "commercial";
pub const CATEGORY_EVENTS: &str = "events";

/// All valid portfolio categories.
pub const VALID_CATEGORIES: &[&str] = &[CATEGORY_PERSONAL, CATEGORY_COMMERCIAL, CATEGORY_EVENTS];

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PUBLISHED: &str = "published";

/// All valid publication statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_PUBLISHED];

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum number of tags on one item.
pub const MAX_TAGS: usize = 20;

/// Maximum length of a single tag.
pub const MAX_TAG_LEN: usize = 50;

/// Number of items returned by the homepage featured strip.
pub const FEATURED_LIMIT: i64 = 6;

/// Number of items in the dashboard's recent activity list.
pub const RECENT_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Portfolio section an item is shown under on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Personal,
    Commercial,
    Events,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Personal, Self::Commercial, Self::Events];

    /// Parse from the database `category` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            CATEGORY_PERSONAL => Ok(Self::Personal),
            CATEGORY_COMMERCIAL => Ok(Self::Commercial),
            CATEGORY_EVENTS => Ok(Self::Events),
            other => Err(CoreError::Validation(format!(
                "Invalid category '{other}'. Must be one of: {}",
                VALID_CATEGORIES.join(", ")
            ))),
        }
    }

    /// Database value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Personal => CATEGORY_PERSONAL,
            Self::Commercial => CATEGORY_COMMERCIAL,
            Self::Events => CATEGORY_EVENTS,
        }
    }

    /// Section heading used on the site and in the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Projects",
            Self::Commercial => "Commercial Work",
            Self::Events => "Events",
        }
    }
}

/// Whether an item is visible on the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublishStatus {
    Draft,
    Published,
}

impl PublishStatus {
    /// Parse from the database `status` column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            STATUS_DRAFT => Ok(Self::Draft),
            STATUS_PUBLISHED => Ok(Self::Published),
            other => Err(CoreError::Validation(format!(
                "Invalid status '{other}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Draft => STATUS_DRAFT,
            Self::Published => STATUS_PUBLISHED,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an item title as it will be stored: trimmed, non-empty, at most
/// 200 characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate the cover image URL. Every item needs one.
pub fn validate_image_url(url: &str) -> Result<(), CoreError> {
    if url.trim().is_empty() {
        return Err(CoreError::Validation("Image URL must not be empty".into()));
    }
    Ok(())
}

/// Validate an already-normalised tag list.
pub fn validate_tags(tags: &[String]) -> Result<(), CoreError> {
    if tags.len() > MAX_TAGS {
        return Err(CoreError::Validation(format!(
            "A maximum of {MAX_TAGS} tags is allowed"
        )));
    }
    if let Some(tag) = tags.iter().find(|t| t.chars().count() > MAX_TAG_LEN) {
        return Err(CoreError::Validation(format!(
            "Tag '{tag}' exceeds {MAX_TAG_LEN} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Normalisation
// ---------------------------------------------------------------------------

/// Treat blank optional text (`""`, whitespace) as absent.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Trim every tag, drop blanks, and remove duplicates keeping first occurrence.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !out.iter().any(|existing| existing == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Item counts per category and per status, as shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioStats {
    pub personal: i64,
    pub commercial: i64,
    pub events: i64,
    pub published: i64,
    pub draft: i64,
    pub total: i64,
}

impl PortfolioStats {
    /// Aggregate from `(category, status)` pairs.
    ///
    /// Unknown category or status values still count toward `total`.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut stats = Self::default();
        for (category, status) in pairs {
            stats.total += 1;
            match Category::from_name(category) {
                Ok(Category::Personal) => stats.personal += 1,
                Ok(Category::Commercial) => stats.commercial += 1,
                Ok(Category::Events) => stats.events += 1,
                Err(_) => {}
            }
            match PublishStatus::from_name(status) {
                Ok(PublishStatus::Published) => stats.published += 1,
                Ok(PublishStatus::Draft) => stats.draft += 1,
                Err(_) => {}
            }
        }
        stats
    }

    /// Count for one category.
    pub fn for_category(&self, category: Category) -> i64 {
        match category {
            Category::Personal => self.personal,
            Category::Commercial => self.commercial,
            Category::Events => self.events,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
