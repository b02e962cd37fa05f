//! Response metadata extraction from captured header lines.

/// Metadata the validation and store steps need from the final response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMeta {
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
}

/// Parses captured header lines into a [`ResponseMeta`].
///
/// With redirects followed, the capture holds one header block per hop. Each
/// `HTTP/` status line resets the accumulated state so only the final
/// response's headers count; an intermediate hop's `Content-Length` must not
/// leak into the result.
pub(crate) fn response_meta(lines: &[String]) -> ResponseMeta {
    let mut meta = ResponseMeta::default();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            meta = ResponseMeta::default();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-type") {
                meta.content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("content-length") {
                meta.content_length = value.parse::<u64>().ok();
            }
        }
    }
    meta
}
