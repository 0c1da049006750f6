//! Single-file conversion with cleanup of partial output.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use imgconv_common::paths::destination_path;
use imgconv_common::{ConversionPair, Error, Result};
use tracing::debug;

use super::codec;

/// Source and destination handles for one conversion.
///
/// Both handles are closed when the pair is dropped.
struct FileDest {
    source: BufReader<File>,
    destination: BufWriter<File>,
}

impl FileDest {
    fn open(source: &Path, destination: &Path) -> Result<Self> {
        let source = File::open(source).map_err(|e| Error::io(source, e))?;
        let destination = File::create(destination).map_err(|e| Error::io(destination, e))?;

        Ok(Self {
            source: BufReader::new(source),
            destination: BufWriter::new(destination),
        })
    }
}

/// Convert `path` from the `from` extension to the `to` extension.
///
/// The converted image is written next to the source with `from` replaced
/// by `to`; the source itself is left untouched. If the conversion step fails
/// the partially written destination is removed before the error is returned.
///
/// # Returns
///
/// The path of the newly written file.
pub fn convert_file(path: &Path, from: &str, to: &str) -> Result<PathBuf> {
    let dest_path = destination_path(path, from, to).ok_or_else(|| {
        Error::invalid_request(format!("{} does not end with {from}", path.display()))
    })?;

    let files = FileDest::open(path, &dest_path)?;

    if let Err(err) = transcode(files, path, from, to) {
        // Secondary failure; the conversion error is what the caller sees.
        if let Err(cleanup) = fs::remove_file(&dest_path) {
            debug!(
                path = %dest_path.display(),
                error = %cleanup,
                "Failed to remove partial output"
            );
        }
        return Err(err);
    }

    debug!("Converted {} -> {}", path.display(), dest_path.display());
    Ok(dest_path)
}

/// Dispatch on the extension pair. Consumes the handles so they are closed
/// before any cleanup runs.
fn transcode(files: FileDest, path: &Path, from: &str, to: &str) -> Result<()> {
    let FileDest {
        mut source,
        destination,
    } = files;

    let pair = ConversionPair::resolve(from, to)?;
    codec::transcode(pair, &mut source, destination, path)
}
