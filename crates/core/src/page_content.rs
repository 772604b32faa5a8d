//! Page content sections: key validation, content types, and lookup helpers.
//!
//! A section is addressed by `(page_name, section)`, both URL-safe slugs, so
//! they can appear directly in `/pages/{page}/sections/{section}`.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const CONTENT_TYPE_TEXT: &str = "text";
pub const CONTENT_TYPE_HTML: &str = "html";
pub const CONTENT_TYPE_JSON: &str = "json";

/// All valid section content types.
pub const VALID_CONTENT_TYPES: &[&str] = &[CONTENT_TYPE_TEXT, CONTENT_TYPE_HTML, CONTENT_TYPE_JSON];

/// Page the landing-page sections live on.
pub const HOME_PAGE: &str = "home";

/// Maximum length of a page name or section key.
pub const MAX_KEY_LEN: usize = 100;

/// Page names that collide with static routes under `/pages`.
pub const RESERVED_PAGE_NAMES: &[&str] = &["sections"];

/// Maximum length of a section title.
pub const MAX_SECTION_TITLE_LEN: usize = 200;

/// A section slot the landing page knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredefinedSection {
    pub section: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Sections rendered by the home page, in display order.
pub const PREDEFINED_HOME_SECTIONS: &[PredefinedSection] = &[
    PredefinedSection {
        section: "hero-title",
        label: "Hero Title",
        description: "Main headline on homepage",
    },
    PredefinedSection {
        section: "hero-subtitle",
        label: "Hero Subtitle",
        description: "Secondary text under main title",
    },
    PredefinedSection {
        section: "about-title",
        label: "About Title",
        description: "About section heading",
    },
    PredefinedSection {
        section: "about-text",
        label: "About Text",
        description: "About section content",
    },
    PredefinedSection {
        section: "services-title",
        label: "Services Title",
        description: "Services section heading",
    },
    PredefinedSection {
        section: "services-text",
        label: "Services Text",
        description: "Services description",
    },
    PredefinedSection {
        section: "contact-title",
        label: "Contact Title",
        description: "Contact section heading",
    },
    PredefinedSection {
        section: "contact-text",
        label: "Contact Text",
        description: "Contact information",
    },
];

// ---------------------------------------------------------------------------
// Content type
// ---------------------------------------------------------------------------

/// How a section's `content` is interpreted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Html,
    Json,
}

impl ContentType {
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            CONTENT_TYPE_TEXT => Ok(Self::Text),
            CONTENT_TYPE_HTML => Ok(Self::Html),
            CONTENT_TYPE_JSON => Ok(Self::Json),
            other => Err(CoreError::Validation(format!(
                "Invalid content type '{other}'. Must be one of: {}",
                VALID_CONTENT_TYPES.join(", ")
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Text => CONTENT_TYPE_TEXT,
            Self::Html => CONTENT_TYPE_HTML,
            Self::Json => CONTENT_TYPE_JSON,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a page name or section key: lowercase alphanumerics and hyphens.
pub fn validate_key(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > MAX_KEY_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_KEY_LEN} characters"
        )));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(format!(
            "{field} must contain only lowercase alphanumeric characters and hyphens"
        )));
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Err(CoreError::Validation(format!(
            "{field} must not start or end with a hyphen"
        )));
    }
    Ok(())
}

/// Validate a page name: a slug as for [`validate_key`] that is not one of
/// [`RESERVED_PAGE_NAMES`].
pub fn validate_page_name(value: &str) -> Result<(), CoreError> {
    validate_key("page_name", value)?;
    if RESERVED_PAGE_NAMES.contains(&value) {
        return Err(CoreError::Validation(format!(
            "page_name '{value}' is reserved"
        )));
    }
    Ok(())
}

/// Validate an optional section title.
pub fn validate_section_title(title: Option<&str>) -> Result<(), CoreError> {
    match title {
        Some(t) if t.chars().count() > MAX_SECTION_TITLE_LEN => Err(CoreError::Validation(
            format!("Title must be at most {MAX_SECTION_TITLE_LEN} characters"),
        )),
        _ => Ok(()),
    }
}

/// Validate that `content` is well-formed for `content_type`.
///
/// Only `json` has structure to check; text and HTML are stored verbatim.
pub fn validate_content(content_type: ContentType, content: &str) -> Result<(), CoreError> {
    if content_type == ContentType::Json {
        serde_json::from_str::<serde_json::Value>(content).map_err(|e| {
            CoreError::Validation(format!("Content is not valid JSON: {e}"))
        })?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Anything that carries a section key and body, so lookups work on both
/// database rows and test fixtures.
pub trait SectionBody {
    fn section_key(&self) -> &str;
    fn body(&self) -> &str;
}

/// Body of `section` within `sections`, or `fallback` when the section is
/// missing or its body is empty.
pub fn section_or<'a, S: SectionBody>(
    sections: &'a [S],
    section: &str,
    fallback: &'a str,
) -> &'a str {
    sections
        .iter()
        .find(|s| s.section_key() == section)
        .map(|s| s.body())
        .filter(|body| !body.is_empty())
        .unwrap_or(fallback)
}
