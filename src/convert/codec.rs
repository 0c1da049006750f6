//! Format converters between JPEG and PNG.
//!
//! Each converter validates the sniffed content type of its source before
//! decoding, so a `.jpg` holding PNG bytes is rejected rather than silently
//! transcoded.

use std::io::{BufRead, Seek, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageError};
use imgconv_common::{ConversionPair, Error, ImageFormat, Result};
use tracing::trace;

use crate::sniff;

/// Run the converter for `pair`, reading `source` and writing `destination`.
///
/// `path` names the source file in errors.
pub fn transcode<R, W>(
    pair: ConversionPair,
    source: &mut R,
    destination: W,
    path: &Path,
) -> Result<()>
where
    R: BufRead + Seek,
    W: Write,
{
    match pair {
        ConversionPair::JpegToPng => jpeg_to_png(source, destination, path),
        ConversionPair::PngToJpeg => png_to_jpeg(source, destination, path),
    }
}

/// Convert a JPEG stream into PNG.
pub fn jpeg_to_png<R, W>(source: &mut R, mut destination: W, path: &Path) -> Result<()>
where
    R: BufRead + Seek,
    W: Write,
{
    validate(source, ImageFormat::Jpeg, path)?;
    let img = decode(source, ImageFormat::Jpeg, path)?;

    img.write_with_encoder(PngEncoder::new(&mut destination))
        .and_then(|()| destination.flush().map_err(ImageError::IoError))
        .map_err(|source| encode_error(source, ImageFormat::Png, path))
}

/// Convert a PNG stream into JPEG at the encoder's default quality.
pub fn png_to_jpeg<R, W>(source: &mut R, mut destination: W, path: &Path) -> Result<()>
where
    R: BufRead + Seek,
    W: Write,
{
    validate(source, ImageFormat::Png, path)?;
    let img = jpeg_compatible(decode(source, ImageFormat::Png, path)?);

    img.write_with_encoder(JpegEncoder::new(&mut destination))
        .and_then(|()| destination.flush().map_err(ImageError::IoError))
        .map_err(|source| encode_error(source, ImageFormat::Jpeg, path))
}

/// Reject sources whose sniffed content type is not `expected`.
///
/// An unreadable prefix is treated as an unknown content type.
fn validate<R: BufRead + Seek>(source: &mut R, expected: ImageFormat, path: &Path) -> Result<()> {
    let detected = sniff::file_content_type(source).ok();
    trace!(path = %path.display(), ?detected, "sniffed source");

    if detected == Some(expected.content_type()) {
        Ok(())
    } else {
        Err(Error::ContentMismatch {
            path: path.to_path_buf(),
            expected,
            detected,
        })
    }
}

fn decode<R: BufRead + Seek>(
    source: &mut R,
    format: ImageFormat,
    path: &Path,
) -> Result<DynamicImage> {
    image::load(source, codec_format(format)).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        format,
        source,
    })
}

fn encode_error(source: ImageError, format: ImageFormat, path: &Path) -> Error {
    Error::Encode {
        path: path.to_path_buf(),
        format,
        source,
    }
}

/// JPEG carries neither alpha nor 16-bit samples; flatten anything else to RGB8.
fn jpeg_compatible(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

fn codec_format(format: ImageFormat) -> image::ImageFormat {
    match format {
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Png => image::ImageFormat::Png,
    }
}
