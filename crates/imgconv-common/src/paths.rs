//! Path utilities for extension matching and destination naming.
//!
//! Extensions are matched as literal, case-sensitive suffixes of the file
//! name, so `.jpg` matches `photo.jpg` but not `photo.JPG` or `photo.jpeg`.
//! Only the file name has to be valid UTF-8; parent directories may hold
//! arbitrary bytes.

use std::path::{Path, PathBuf};

/// Check if a path's file name ends with the given extension suffix.
///
/// File names that are not valid UTF-8 never match.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use imgconv_common::paths::has_extension;
///
/// assert!(has_extension(Path::new("/images/a.jpg"), ".jpg"));
/// assert!(!has_extension(Path::new("/images/a.jpeg"), ".jpg"));
/// ```
pub fn has_extension(path: &Path, ext: &str) -> bool {
    file_name(path).is_some_and(|name| name.ends_with(ext))
}

/// Derive the destination path by replacing the `from` suffix with `to`.
///
/// The parent directory is kept as-is. Returns `None` when the file name
/// does not end with `from`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use imgconv_common::paths::destination_path;
///
/// assert_eq!(
///     destination_path(Path::new("/images/a.jpg"), ".jpg", ".png"),
///     Some(PathBuf::from("/images/a.png"))
/// );
/// assert_eq!(destination_path(Path::new("b.txt"), ".jpg", ".png"), None);
/// ```
pub fn destination_path(path: &Path, from: &str, to: &str) -> Option<PathBuf> {
    let stem = file_name(path)?.strip_suffix(from)?;
    Some(path.with_file_name(format!("{stem}{to}")))
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()
}

/// Prefix an extension with a dot if it lacks one.
///
/// Empty input is returned unchanged.
///
/// # Examples
///
/// ```
/// use imgconv_common::paths::normalize_extension;
///
/// assert_eq!(normalize_extension("png"), ".png");
/// assert_eq!(normalize_extension(".jpg"), ".jpg");
/// ```
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
