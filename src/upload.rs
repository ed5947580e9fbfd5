//! File-selection handling for avatar and topic-image uploads
//!
//! Validates a user's file selection before any request is built: exactly
//! one file, with a declared media type on the image allow-list.

use anyhow::{Context, Result};
use std::path::Path;

/// Media types accepted for avatar and topic-image uploads.
pub const ACCEPTED_IMAGE_TYPES: [&str; 4] =
    ["image/gif", "image/jpeg", "image/pjpeg", "image/png"];

/// A file picked by the user: the name and declared media type travel with
/// the bytes into the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Read a file from disk, deriving the media type from its extension.
    /// Unrecognized extensions get `application/octet-stream` so the
    /// selection check rejects them with the usual alert.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        let media_type = media_type_for_path(path)
            .unwrap_or("application/octet-stream")
            .to_string();
        Ok(Self {
            name,
            media_type,
            bytes,
        })
    }
}

/// Outcome of validating a file selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSelection {
    /// Exactly one file with an accepted image type.
    Image(SelectedFile),
    /// Exactly one file, but not an accepted image type.
    NotAnImage,
    /// Zero or multiple files selected. Dropped without feedback.
    Ignored,
}

/// Validate a selection down to a single accepted image.
pub fn select_image(files: &[SelectedFile]) -> ImageSelection {
    if files.len() != 1 {
        return ImageSelection::Ignored;
    }
    let file = &files[0];
    if ACCEPTED_IMAGE_TYPES.contains(&file.media_type.as_str()) {
        ImageSelection::Image(file.clone())
    } else {
        ImageSelection::NotAnImage
    }
}

/// Map a file extension to the media type a browser would declare for it.
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "gif" => Some("image/gif"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}
