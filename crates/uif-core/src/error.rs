//! Error taxonomy for a single download attempt.
//!
//! Every kind is terminal for the attempt it occurs in; nothing is retried
//! automatically. A batch caller reports the failure and moves on to the
//! next URL.

use std::io;
use std::path::{Path, PathBuf};

/// Terminal failure of one fetch-and-store attempt.
///
/// The transport kinds (`Timeout`, `Connection`, `Http`, `Request`) come out
/// of the GET; `Store` covers local I/O; `UnsafeContentType` and `Oversized`
/// report a declined decision point so a front end can ask the user and
/// re-invoke with the decision granted.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The transfer exceeded the fixed request timeout.
    #[error("request timed out")]
    Timeout(#[source] curl::Error),

    /// The host could not be reached (connect, DNS, or proxy resolution).
    #[error("could not reach the server")]
    Connection(#[source] curl::Error),

    /// The final response carried a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),

    /// Any other transport failure, malformed URLs included.
    #[error("request failed: {0}")]
    Request(curl::Error),

    /// Local I/O failed while persisting the payload.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The content type is not a recognized image type and the caller's
    /// `proceed_on_unsafe_type` decision was false.
    #[error("content type {} is not a recognized image type", .content_type.as_deref().unwrap_or("(none reported)"))]
    UnsafeContentType { content_type: Option<String> },

    /// The reported content length exceeds the large-file threshold and the
    /// caller's `proceed_on_large_file` decision was false.
    #[error("reported size of {content_length} bytes exceeds the large-file threshold")]
    Oversized { content_length: u64 },
}

impl FetchError {
    /// Classifies a libcurl failure into the transport taxonomy: operation
    /// timeout, unreachable host, or any other transport error.
    pub(crate) fn from_curl(e: curl::Error) -> Self {
        if e.is_operation_timedout() {
            return FetchError::Timeout(e);
        }
        if e.is_couldnt_connect() || e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
            return FetchError::Connection(e);
        }
        FetchError::Request(e)
    }
}

/// Local I/O failure during a store step, carrying the action that failed
/// ("write", "hash", "rename", ...) and the path it failed on.
#[derive(Debug, thiserror::Error)]
#[error("could not {action} {}: {source}", .path.display())]
pub struct StoreError {
    pub action: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl StoreError {
    pub(crate) fn new(action: &'static str, path: &Path, source: io::Error) -> Self {
        StoreError {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
