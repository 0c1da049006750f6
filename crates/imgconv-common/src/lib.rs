//! Imgconv-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across imgconv:
//!
//! - **Core Types**: Image formats, sniffed content types, and supported conversion pairs
//! - **Path Utilities**: Extension suffix matching and destination path derivation
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use imgconv_common::{ConversionPair, ImageFormat, Error, Result};
//! use imgconv_common::paths::has_extension;
//! use std::path::Path;
//!
//! // Resolve a conversion from extensions
//! let pair = ConversionPair::resolve(".jpg", ".png").unwrap();
//! assert_eq!(pair.target(), ImageFormat::Png);
//!
//! // Match candidate files
//! assert!(has_extension(Path::new("photo.jpg"), ".jpg"));
//!
//! // Use common error types
//! fn example() -> Result<()> {
//!     Err(Error::invalid_request("specified extensions must be distinct"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
