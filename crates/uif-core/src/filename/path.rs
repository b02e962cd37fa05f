//! Candidate basename extraction from the URL path.

/// Returns the text after the last `/` of the URL path, or `None` when the
/// URL does not parse, the path ends in `/`, or the segment is a reserved
/// name (`.` / `..`).
///
/// Note the trailing-slash case: `https://example.com/a/b/` has no basename
/// to offer, so the caller falls through to a synthesized name.
pub fn basename_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
