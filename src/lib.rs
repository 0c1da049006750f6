//! Imgconv - Recursive JPEG/PNG conversion with content validation
//!
//! This library crate exposes the conversion pipeline for the `imgconv`
//! binary and for integration testing.

pub mod convert;
pub mod sniff;

pub use convert::{
    convert_file, convert_images, ConversionRequest, ConversionSummary, ConvertedFile,
};
