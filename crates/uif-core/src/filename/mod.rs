//! Filename resolution for fetched images.
//!
//! The local name comes from the last path segment of the URL when that
//! segment carries an extension; otherwise a name is synthesized from the
//! content type plus a stable numeric tag derived from the URL itself.

mod path;
mod sanitize;

pub use path::basename_from_url;
pub use sanitize::sanitize_filename;

use sha2::{Digest, Sha256};

use crate::content_type;

/// Stem of synthesized names.
const SYNTHESIZED_STEM: &str = "downloaded_image";

/// The URL tag is reduced to at most four digits.
const URL_TAG_MODULUS: u64 = 10_000;

/// Resolves the local filename for a resource fetched from `url`.
///
/// A URL path ending in a real basename with an extension wins:
/// `https://example.com/cat.png` resolves to `cat.png`. When the path yields
/// no usable name (missing, extension-less, or destroyed by sanitization),
/// the result is `downloaded_image_<tag><ext>` with `<ext>` mapped from
/// `content_type`.
///
/// Always returns a non-empty name containing an extension.
pub fn resolve_filename(url: &str, content_type: Option<&str>) -> String {
    if let Some(candidate) = basename_from_url(url) {
        if candidate.contains('.') {
            let cleaned = sanitize_filename(&candidate);
            if !cleaned.is_empty() && cleaned.contains('.') {
                return cleaned;
            }
        }
    }
    let ext = content_type::extension_for(content_type);
    format!("{SYNTHESIZED_STEM}_{}{ext}", url_tag(url))
}

/// Stable per-URL tag: the first 8 bytes of the URL's SHA-256 digest,
/// big-endian, reduced modulo [`URL_TAG_MODULUS`]. Deterministic across runs
/// and platforms; collisions are tolerated because the store step resolves
/// them with a counter suffix.
fn url_tag(url: &str) -> u64 {
    let digest = Sha256::digest(url.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix) % URL_TAG_MODULUS
}
