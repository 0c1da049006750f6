//! Error types shared by every stage of a conversion run.
//!
//! Each variant corresponds to one failure class of the pipeline: request
//! validation, filesystem access, content validation, decoding, encoding, and
//! extension-pair dispatch.

use std::path::{Path, PathBuf};

use crate::types::{ContentType, ImageFormat};

/// Common error type for imgconv.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The conversion request itself is malformed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Opening, creating, or traversing a path failed.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content does not match the format its extension claims.
    #[error(
        "content type of {} is not {} (detected {})",
        .path.display(),
        .expected.mime(),
        .detected.map_or("unknown", ContentType::mime)
    )]
    ContentMismatch {
        path: PathBuf,
        expected: ImageFormat,
        /// `None` when the leading bytes could not be read.
        detected: Option<ContentType>,
    },

    /// The byte stream is not a valid instance of the claimed format.
    #[error("failed to decode {} as {format}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        format: ImageFormat,
        #[source]
        source: image::ImageError,
    },

    /// Writing the target format failed.
    #[error("failed to encode {} as {format}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        format: ImageFormat,
        #[source]
        source: image::ImageError,
    },

    /// The extension pair is not one of the supported conversions.
    #[error("unsupported extension combination to convert from: {from} to: {to}")]
    UnsupportedConversion { from: String, to: String },
}

impl Error {
    /// Create a new InvalidRequest error.
    pub fn invalid_request<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a new Io error bound to the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new UnsupportedConversion error naming both extensions.
    pub fn unsupported(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnsupportedConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. }
            | Self::ContentMismatch { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. } => Some(path),
            Self::InvalidRequest(_) | Self::UnsupportedConversion { .. } => None,
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
