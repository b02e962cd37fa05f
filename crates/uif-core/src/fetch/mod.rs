//! HTTP GET fetch of a single resource.
//!
//! Uses the curl crate (libcurl) with a fixed request timeout and a
//! browser-like User-Agent. The whole payload is buffered in memory together
//! with the reported content type and length; the store step decides what
//! happens to it. Blocking; called once per URL.

mod parse;

use std::str;
use std::time::Duration;

use crate::error::FetchError;

/// Fixed whole-request timeout (connect time included).
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent. Some image hosts refuse requests without a
/// browser-like identity.
pub const USER_AGENT: &str = "Mozilla/5.0 (Ubuntu; Linux x86_64) AppleWebKit/537.36";

/// A fetched payload plus the response metadata the store step needs.
#[derive(Debug, Clone)]
pub struct FetchedResource {
    /// URL the resource was requested from; feeds filename resolution.
    pub url: String,
    /// Raw response body.
    pub body: Vec<u8>,
    /// `Content-Type` reported by the final response, if any.
    pub content_type: Option<String>,
    /// `Content-Length` reported by the final response, if any.
    pub content_length: Option<u64>,
}

/// Issues a GET for `url` and buffers the full response body.
///
/// Follows redirects (at most 10 hops); the reported metadata comes from the
/// final response. Fails with `Timeout`, `Connection`, or `Request` on
/// transport errors and `Http` when the final status is outside 2xx.
pub fn fetch(url: &str, user_agent: &str) -> Result<FetchedResource, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(FetchError::from_curl)?;
    easy.useragent(user_agent).map_err(FetchError::from_curl)?;
    easy.follow_location(true).map_err(FetchError::from_curl)?;
    easy.max_redirections(10).map_err(FetchError::from_curl)?;
    easy.connect_timeout(REQUEST_TIMEOUT)
        .map_err(FetchError::from_curl)?;
    easy.timeout(REQUEST_TIMEOUT).map_err(FetchError::from_curl)?;

    let mut body: Vec<u8> = Vec::new();
    let mut header_lines: Vec<String> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|line| {
                if let Ok(s) = str::from_utf8(line) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })
            .map_err(FetchError::from_curl)?;
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(FetchError::from_curl)?;
        transfer.perform().map_err(FetchError::from_curl)?;
    }

    let status = easy.response_code().map_err(FetchError::from_curl)?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http(status));
    }

    let meta = parse::response_meta(&header_lines);
    tracing::debug!(
        url,
        status,
        content_type = meta.content_type.as_deref().unwrap_or("-"),
        bytes = body.len(),
        "fetched"
    );

    Ok(FetchedResource {
        url: url.to_string(),
        body,
        content_type: meta.content_type,
        content_length: meta.content_length,
    })
}
