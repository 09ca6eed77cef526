//! Mapping between filesystem paths and `file://` URIs.
//!
//! Symbols carry URIs so the index can reconcile updates per document;
//! navigation needs the reverse mapping to read the file back. Non-`file:`
//! identifiers pass through untouched, since the parser treats URIs as
//! opaque.

use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use crate::error::{Error, Result};

/// Characters escaped when rendering a path as a URI. Forward slashes stay
/// literal so the path structure remains readable.
const PATH_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%');

/// Render a filesystem path as a `file://` URI.
#[must_use]
pub fn path_to_uri(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    let encoded = utf8_percent_encode(&normalized, PATH_ESCAPES);
    if normalized.starts_with('/') {
        format!("file://{encoded}")
    } else {
        // Windows drive-letter paths need the extra slash: file:///C:/...
        format!("file:///{encoded}")
    }
}

/// Map a `file://` URI back to a filesystem path.
///
/// Identifiers without a `file://` scheme are returned as paths verbatim.
///
/// # Errors
///
/// Returns [`Error::Uri`] when the percent-encoded payload is not valid
/// UTF-8.
pub fn uri_to_path(uri: &str) -> Result<PathBuf> {
    let Some(rest) = uri.strip_prefix("file://") else {
        return Ok(PathBuf::from(uri));
    };

    let decoded = percent_decode_str(rest)
        .decode_utf8()
        .map_err(|e| Error::Uri(format!("{uri}: {e}")))?;

    #[cfg(windows)]
    let path = {
        // file:///C:/dir -> C:/dir
        let trimmed = decoded.strip_prefix('/').unwrap_or(&decoded);
        PathBuf::from(trimmed)
    };
    #[cfg(not(windows))]
    let path = PathBuf::from(decoded.as_ref());

    Ok(path)
}
