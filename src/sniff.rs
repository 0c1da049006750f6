//! Content-type detection from file magic bytes.
//!
//! Only the first [`SNIFF_LEN`] bytes are inspected. Readers are always
//! rewound to offset 0 afterwards so a decoder can consume the full stream.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use imgconv_common::{ContentType, Error, Result};

/// Number of leading bytes considered when sniffing.
pub const SNIFF_LEN: usize = 512;

/// Exact-prefix signatures, checked in order.
const SIGNATURES: &[(&[u8], ContentType)] = &[
    (&[0xFF, 0xD8, 0xFF], ContentType::Jpeg),
    (b"\x89PNG\r\n\x1A\n", ContentType::Png),
    (b"GIF87a", ContentType::Gif),
    (b"GIF89a", ContentType::Gif),
    (b"BM", ContentType::Bmp),
    (&[0x00, 0x00, 0x01, 0x00], ContentType::Icon),
    (b"%PDF-", ContentType::Pdf),
    (b"PK\x03\x04", ContentType::Zip),
    (&[0x1F, 0x8B, 0x08], ContentType::Gzip),
];

/// Detect the content type of a byte prefix.
///
/// Bytes beyond [`SNIFF_LEN`] are ignored. Unrecognised data is reported as
/// [`ContentType::Text`] when it contains no binary control bytes and
/// [`ContentType::OctetStream`] otherwise.
pub fn detect_content_type(data: &[u8]) -> ContentType {
    let data = &data[..data.len().min(SNIFF_LEN)];

    if let Some((_, content_type)) = SIGNATURES.iter().find(|(sig, _)| data.starts_with(sig)) {
        return *content_type;
    }

    // RIFF container: 4-byte size, then the form type
    if data.len() >= 14 && data.starts_with(b"RIFF") && &data[8..14] == b"WEBPVP" {
        return ContentType::Webp;
    }

    if data.iter().copied().any(is_binary_byte) {
        ContentType::OctetStream
    } else {
        ContentType::Text
    }
}

/// Control bytes that never appear in plain text.
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

/// Sniff the content type of a reader and rewind it to the start.
///
/// The rewind happens even when the read fails. An empty stream is an
/// [`io::ErrorKind::UnexpectedEof`] error, since there is nothing to sniff.
pub fn file_content_type<R: Read + Seek>(reader: &mut R) -> io::Result<ContentType> {
    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    let read = reader
        .by_ref()
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut prefix);

    // Reset reader position
    let rewound = reader.rewind();

    read?;
    rewound?;

    if prefix.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no data to sniff",
        ));
    }

    Ok(detect_content_type(&prefix))
}

/// Whether the reader holds JPEG data. Read failures count as `false`.
pub fn is_jpeg<R: Read + Seek>(reader: &mut R) -> bool {
    matches!(file_content_type(reader), Ok(ContentType::Jpeg))
}

/// Whether the reader holds PNG data. Read failures count as `false`.
pub fn is_png<R: Read + Seek>(reader: &mut R) -> bool {
    matches!(file_content_type(reader), Ok(ContentType::Png))
}

/// Open a file and sniff its content type.
pub fn sniff_path(path: &Path) -> Result<ContentType> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = BufReader::new(file);
    file_content_type(&mut reader).map_err(|e| Error::io(path, e))
}
