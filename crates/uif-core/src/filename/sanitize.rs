//! Filename sanitization for the local filesystem.

/// Linux NAME_MAX.
const MAX_NAME_BYTES: usize = 255;

/// Cleans a candidate basename so it is safe to create inside the target
/// directory: path separators, NUL, and other control characters become `_`,
/// leading dots and surrounding whitespace are stripped (no hidden files, no
/// `.`/`..`), and the result is clamped to 255 bytes on a char boundary.
///
/// May return an empty string; the caller treats that as "no usable name".
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '/' || c == '\\' || c == '\0' || c.is_control() {
            out.push('_');
        } else {
            out.push(c);
        }
    }

    let trimmed = out.trim().trim_start_matches('.');
    let mut take = trimmed.len().min(MAX_NAME_BYTES);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    trimmed[..take].to_string()
}
