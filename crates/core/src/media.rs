//! Media asset classification, upload validation, and object key helpers.

use crate::error::CoreError;

pub const KIND_IMAGE: &str = "image";
pub const KIND_VIDEO: &str = "video";

/// All valid media kinds.
pub const VALID_KINDS: &[&str] = &[KIND_IMAGE, KIND_VIDEO];

/// Default upload ceiling (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Extension used when the original file name has none.
const FALLBACK_EXTENSION: &str = "bin";

/// Whether an asset is a still image or a video clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify by declared MIME type. Anything that is not `image/*` or
    /// `video/*` is rejected.
    pub fn from_mime(mime: &str) -> Result<Self, CoreError> {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Ok(Self::Image)
        } else if mime.starts_with("video/") {
            Ok(Self::Video)
        } else {
            Err(CoreError::Validation(format!(
                "Unsupported file type '{mime}'. Only image and video files can be uploaded"
            )))
        }
    }

    /// Parse from the database `kind` column or a `?kind=` filter.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            KIND_IMAGE => Ok(Self::Image),
            KIND_VIDEO => Ok(Self::Video),
            other => Err(CoreError::Validation(format!(
                "Invalid media kind '{other}'. Must be one of: {}",
                VALID_KINDS.join(", ")
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Image => KIND_IMAGE,
            Self::Video => KIND_VIDEO,
        }
    }
}

/// Validate an incoming upload and classify it.
pub fn validate_upload(mime: &str, size: u64, max_bytes: u64) -> Result<MediaKind, CoreError> {
    let kind = MediaKind::from_mime(mime)?;
    if size == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if size > max_bytes {
        return Err(CoreError::Validation(format!(
            "File is {} but the upload limit is {}",
            format_file_size(size),
            format_file_size(max_bytes)
        )));
    }
    Ok(kind)
}

/// Lowercased extension of `file_name`, without the dot.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Build a collision-resistant object key: `<unix-millis>_<random>.<ext>`.
///
/// The original file name only contributes its extension so keys are always
/// safe single path segments.
pub fn generate_object_key(file_name: &str, now_millis: i64) -> String {
    let ext = file_extension(file_name).unwrap_or_else(|| FALLBACK_EXTENSION.to_string());
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("{now_millis}_{}.{ext}", &random[..12])
}

/// Human-readable size with two decimals, e.g. `1.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}
