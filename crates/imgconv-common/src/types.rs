//! Core type definitions for image formats, content types, and conversions.
//!
//! The extension and MIME constants used across imgconv live here as
//! fixed enumerations; nothing in this module holds mutable state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Raster image format handled by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG, written with the `.jpg` extension.
    Jpeg,
    /// PNG, written with the `.png` extension.
    Png,
}

impl ImageFormat {
    /// Canonical file extension, including the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => ".jpg",
            Self::Png => ".png",
        }
    }

    /// MIME type the sniffer reports for this format.
    pub const fn mime(self) -> &'static str {
        self.content_type().mime()
    }

    /// Content type that a valid file of this format sniffs as.
    pub const fn content_type(self) -> ContentType {
        match self {
            Self::Jpeg => ContentType::Jpeg,
            Self::Png => ContentType::Png,
        }
    }

    /// Look up a format by its exact canonical extension.
    ///
    /// Matching is literal: `.jpeg`, `.JPG` and `jpg` are not recognised.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".jpg" => Some(Self::Jpeg),
            ".png" => Some(Self::Png),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpeg => write!(f, "jpeg"),
            Self::Png => write!(f, "png"),
        }
    }
}

/// Content type detected from the leading bytes of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Webp,
    Icon,
    Pdf,
    Zip,
    Gzip,
    /// Textual data with no recognised signature.
    Text,
    /// Binary data with no recognised signature.
    OctetStream,
}

impl ContentType {
    /// MIME string for this content type.
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Webp => "image/webp",
            Self::Icon => "image/x-icon",
            Self::Pdf => "application/pdf",
            Self::Zip => "application/zip",
            Self::Gzip => "application/x-gzip",
            Self::Text => "text/plain; charset=utf-8",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// A supported source/target format combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionPair {
    JpegToPng,
    PngToJpeg,
}

impl ConversionPair {
    /// Resolve an extension pair into a supported conversion.
    ///
    /// Only `.jpg -> .png` and `.png -> .jpg` are accepted; every other
    /// combination is an [`Error::UnsupportedConversion`].
    pub fn resolve(from: &str, to: &str) -> Result<Self> {
        match (ImageFormat::from_extension(from), ImageFormat::from_extension(to)) {
            (Some(ImageFormat::Jpeg), Some(ImageFormat::Png)) => Ok(Self::JpegToPng),
            (Some(ImageFormat::Png), Some(ImageFormat::Jpeg)) => Ok(Self::PngToJpeg),
            _ => Err(Error::unsupported(from, to)),
        }
    }

    pub const fn source(self) -> ImageFormat {
        match self {
            Self::JpegToPng => ImageFormat::Jpeg,
            Self::PngToJpeg => ImageFormat::Png,
        }
    }

    pub const fn target(self) -> ImageFormat {
        match self {
            Self::JpegToPng => ImageFormat::Png,
            Self::PngToJpeg => ImageFormat::Jpeg,
        }
    }
}

impl fmt::Display for ConversionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_format_constants() {
        assert_eq!(ImageFormat::Jpeg.extension(), ".jpg");
        assert_eq!(ImageFormat::Png.extension(), ".png");
        assert_eq!(ImageFormat::Jpeg.mime(), "image/jpeg");
        assert_eq!(ImageFormat::Png.mime(), "image/png");
    }

    #[test]
    fn test_from_extension_is_literal() {
        assert_eq!(ImageFormat::from_extension(".jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension(".png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension(".jpeg"), None);
        assert_eq!(ImageFormat::from_extension(".JPG"), None);
        assert_eq!(ImageFormat::from_extension("png"), None);
    }

    #[test]
    fn test_resolve_supported_pairs() {
        assert_eq!(
            ConversionPair::resolve(".jpg", ".png").unwrap(),
            ConversionPair::JpegToPng
        );
        assert_eq!(
            ConversionPair::resolve(".png", ".jpg").unwrap(),
            ConversionPair::PngToJpeg
        );
    }

    #[test]
    fn test_resolve_unsupported_pairs() {
        for (from, to) in [(".gif", ".bmp"), (".jpg", ".jpg"), (".jpg", ".gif"), ("", ".png")] {
            let err = ConversionPair::resolve(from, to).unwrap_err();
            assert!(matches!(err, Error::UnsupportedConversion { .. }), "{from} -> {to}");
        }
    }

    #[test]
    fn test_pair_formats() {
        assert_eq!(ConversionPair::JpegToPng.source(), ImageFormat::Jpeg);
        assert_eq!(ConversionPair::JpegToPng.target(), ImageFormat::Png);
        assert_eq!(ConversionPair::PngToJpeg.to_string(), "png -> jpeg");
    }

    #[test]
    fn test_content_type_display() {
        assert_eq!(ContentType::Jpeg.to_string(), "image/jpeg");
        assert_eq!(ContentType::Text.to_string(), "text/plain; charset=utf-8");
        assert_eq!(ContentType::OctetStream.mime(), "application/octet-stream");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&ImageFormat::Png).unwrap(), "\"png\"");
        assert_eq!(
            serde_json::to_string(&ConversionPair::JpegToPng).unwrap(),
            "\"jpeg_to_png\""
        );
    }
}
