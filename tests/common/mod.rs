//! Shared fixtures for integration tests.
//!
//! Provides helpers that write real JPEG/PNG files into a scratch tree and
//! check that converted output decodes as the expected format.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use walkdir::WalkDir;

fn pattern(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7) as u8, (y * 11) as u8, ((x + y) * 3) as u8])
    }))
}

fn write_image(path: &Path, width: u32, height: u32, format: ImageFormat) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    pattern(width, height)
        .save_with_format(path, format)
        .unwrap();
}

/// Write a valid JPEG image to `path`, creating parent directories.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    write_image(path, width, height, ImageFormat::Jpeg);
}

/// Write a valid PNG image to `path`, creating parent directories.
pub fn write_png(path: &Path, width: u32, height: u32) {
    write_image(path, width, height, ImageFormat::Png);
}

/// Decode `path` strictly as `format` and return its dimensions.
pub fn decode_as(path: &Path, format: ImageFormat) -> (u32, u32) {
    let data = fs::read(path).unwrap();
    let img = image::load_from_memory_with_format(&data, format)
        .unwrap_or_else(|e| panic!("{} is not a valid {:?}: {}", path.display(), format, e));
    (img.width(), img.height())
}

/// All regular files under `root`, sorted.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}
