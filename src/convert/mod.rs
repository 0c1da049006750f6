//! Recursive image conversion.
//!
//! This module walks a directory tree, picks out files by extension, and
//! converts each one in place (a sibling file is written next to the
//! original). Processing is sequential and fail-fast: the first error stops
//! the walk and is returned to the caller, leaving files converted so far
//! in place.

pub mod codec;
mod file;

pub use file::convert_file;

use std::io;
use std::path::{Path, PathBuf};

use imgconv_common::paths::has_extension;
use imgconv_common::{Error, Result};
use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

/// A validated request to convert every matching file under a directory.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    dest_dir: PathBuf,
    source_extension: String,
    target_extension: String,
}

/// One converted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Result of a conversion run that completed without errors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionSummary {
    pub source_extension: String,
    pub target_extension: String,
    pub converted: Vec<ConvertedFile>,
}

impl ConversionSummary {
    pub fn len(&self) -> usize {
        self.converted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converted.is_empty()
    }
}

impl ConversionRequest {
    /// Create a new request.
    ///
    /// Fails with [`Error::InvalidRequest`] when both extensions are equal.
    /// The directory is not touched until [`run`](Self::run) or
    /// [`candidates`](Self::candidates) is called.
    pub fn new(
        dest_dir: impl Into<PathBuf>,
        source_extension: impl Into<String>,
        target_extension: impl Into<String>,
    ) -> Result<Self> {
        let source_extension = source_extension.into();
        let target_extension = target_extension.into();

        if source_extension == target_extension {
            return Err(Error::invalid_request(
                "specified extensions must be distinct",
            ));
        }

        Ok(Self {
            dest_dir: dest_dir.into(),
            source_extension,
            target_extension,
        })
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    pub fn source_extension(&self) -> &str {
        &self.source_extension
    }

    pub fn target_extension(&self) -> &str {
        &self.target_extension
    }

    /// Convert every matching file, stopping at the first failure.
    pub fn run(&self) -> Result<ConversionSummary> {
        info!(
            "Converting {} -> {} under {:?}",
            self.source_extension, self.target_extension, self.dest_dir
        );

        let mut summary = ConversionSummary {
            source_extension: self.source_extension.clone(),
            target_extension: self.target_extension.clone(),
            converted: Vec::new(),
        };

        self.walk(|path| {
            let destination =
                convert_file(path, &self.source_extension, &self.target_extension)?;
            summary.converted.push(ConvertedFile {
                source: path.to_path_buf(),
                destination,
            });
            Ok(())
        })?;

        info!(
            "Conversion complete: {} files converted under {:?}",
            summary.len(),
            self.dest_dir
        );
        Ok(summary)
    }

    /// List the files [`run`](Self::run) would convert, in walk order.
    pub fn candidates(&self) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        self.walk(|path| {
            found.push(path.to_path_buf());
            Ok(())
        })?;
        Ok(found)
    }

    /// Depth-first walk in file-name order, calling `visit` for each
    /// non-directory entry ending with the source extension.
    fn walk<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&Path) -> Result<()>,
    {
        for entry in WalkDir::new(&self.dest_dir).sort_by_file_name() {
            let entry = entry.map_err(walk_error)?;
            let path = entry.path();

            if entry.file_type().is_dir() {
                continue;
            }

            if entry.file_name().to_str().is_none() {
                debug!("Skipping non UTF-8 file name: {:?}", path);
                continue;
            }

            if !has_extension(path, &self.source_extension) {
                continue;
            }

            debug!("Visiting {:?}", path);
            visit(path)?;
        }

        Ok(())
    }
}

/// Convert every file ending with `ext_from` under `dest_dir` to `ext_to`.
///
/// Equal extensions are rejected before any filesystem access. Only
/// `.jpg -> .png` and `.png -> .jpg` are supported; any other pair fails on
/// the first matching file, and succeeds trivially if nothing matches.
pub fn convert_images(dest_dir: impl AsRef<Path>, ext_from: &str, ext_to: &str) -> Result<()> {
    ConversionRequest::new(dest_dir.as_ref(), ext_from, ext_to)?
        .run()
        .map(|_| ())
}

fn walk_error(err: walkdir::Error) -> Error {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    Error::io(path, source)
}
