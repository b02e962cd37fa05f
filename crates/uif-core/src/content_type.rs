//! Content-type checks and extension mapping for image payloads.
//!
//! Matching is deliberately loose: servers report values like
//! `image/jpeg; charset=binary`, so both checks use case-insensitive
//! substring matching on the raw header value.

/// MIME types accepted without a caller decision.
const SAFE_IMAGE_TYPES: [&str; 7] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
    "image/svg+xml",
];

/// True iff `content_type` names one of the recognized safe image types.
pub fn is_safe_image_type(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    SAFE_IMAGE_TYPES.iter().any(|safe| ct.contains(safe))
}

/// Extension used when a filename has to be synthesized from the content
/// type. Unknown or missing types map to `.jpg`.
pub fn extension_for(content_type: Option<&str>) -> &'static str {
    let Some(ct) = content_type else {
        return ".jpg";
    };
    let ct = ct.to_ascii_lowercase();
    if ct.contains("jpeg") || ct.contains("jpg") {
        ".jpg"
    } else if ct.contains("png") {
        ".png"
    } else if ct.contains("gif") {
        ".gif"
    } else if ct.contains("webp") {
        ".webp"
    } else {
        ".jpg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_safe_types() {
        for ct in [
            "image/jpeg",
            "image/jpg",
            "image/png",
            "image/gif",
            "image/webp",
            "image/bmp",
            "image/svg+xml",
        ] {
            assert!(is_safe_image_type(ct), "{ct} should be safe");
        }
    }

    #[test]
    fn matching_is_case_insensitive_and_substring_based() {
        assert!(is_safe_image_type("IMAGE/PNG"));
        assert!(is_safe_image_type("image/jpeg; charset=binary"));
    }

    #[test]
    fn rejects_non_image_types() {
        assert!(!is_safe_image_type("text/html"));
        assert!(!is_safe_image_type("application/octet-stream"));
        assert!(!is_safe_image_type(""));
    }

    #[test]
    fn extension_mapping_table() {
        assert_eq!(extension_for(Some("image/jpeg")), ".jpg");
        assert_eq!(extension_for(Some("image/jpg")), ".jpg");
        assert_eq!(extension_for(Some("image/png")), ".png");
        assert_eq!(extension_for(Some("image/gif")), ".gif");
        assert_eq!(extension_for(Some("image/webp")), ".webp");
    }

    #[test]
    fn unknown_or_missing_type_defaults_to_jpg() {
        assert_eq!(extension_for(Some("image/bmp")), ".jpg");
        assert_eq!(extension_for(Some("text/plain")), ".jpg");
        assert_eq!(extension_for(None), ".jpg");
    }
}
