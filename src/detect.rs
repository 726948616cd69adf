//! PDF header sniffing and input-file filtering.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // "1.7"

/// Read the PDF version ("1.4", "2.0", ...) from the start of a buffer.
///
/// Returns [`Error::UnknownFormat`] when the `%PDF-` marker is missing and
/// [`Error::UnsupportedVersion`] when the version is not `<digit>.<digit>`.
pub fn sniff_version(data: &[u8]) -> Result<String> {
    let rest = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    let version = rest.get(..VERSION_LEN).ok_or(Error::UnknownFormat)?;

    match version {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(String::from_utf8_lossy(version).into_owned())
        }
        _ => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(version).into_owned(),
        )),
    }
}

/// Read the PDF version from the header of a file on disk.
pub fn sniff_version_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut header = Vec::with_capacity(16);
    File::open(path)?.take(16).read_to_end(&mut header)?;
    sniff_version(&header)
}

/// Check whether a buffer starts with a usable PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    sniff_version(data).is_ok()
}

/// Whether a path names a PDF by extension (case-insensitive).
///
/// The batch driver selects inputs this way; the header is only checked
/// when the file is actually opened.
pub fn has_pdf_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
