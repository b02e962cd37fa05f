//! The fetch-validate-store pipeline.
//!
//! One call runs a whole download: GET the URL, gate on content type and
//! reported size, resolve the local filename, and persist without clobbering
//! or duplicating existing files. Strictly sequential and blocking; a batch
//! is a caller loop invoking this once per URL.
//!
//! The pipeline cannot answer its two policy questions itself (store a
//! payload that does not look like an image; store one reported larger than
//! the threshold), so the caller answers them up front through [`Decisions`].
//! A refused question fails the attempt with an error naming it, and an
//! interactive front end can then ask the user and call [`Fetcher::store`]
//! again with the decision granted.

use std::path::{Path, PathBuf};

use crate::content_type;
use crate::error::FetchError;
use crate::fetch::{self, FetchedResource, USER_AGENT};
use crate::filename;
use crate::store::{self, StoreOutcome};

/// Reported content lengths strictly above this require
/// `proceed_on_large_file`. Exactly 50 MB passes without a decision.
pub const LARGE_FILE_THRESHOLD: u64 = 50 * 1024 * 1024;

/// Caller-supplied answers to the pipeline's policy questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decisions {
    /// Proceed although the content type is not a recognized image type.
    pub proceed_on_unsafe_type: bool,
    /// Proceed although the reported length exceeds [`LARGE_FILE_THRESHOLD`].
    pub proceed_on_large_file: bool,
}

/// Downloads images into one target directory.
#[derive(Debug, Clone)]
pub struct Fetcher {
    directory: PathBuf,
    user_agent: String,
}

impl Fetcher {
    /// A fetcher storing into `directory`. The directory is created on the
    /// first store if missing.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Fetcher {
            directory: directory.into(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Replaces the default User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Runs a whole download: fetch, validate, store. Terminal per URL; a
    /// failure here never poisons later calls.
    pub fn fetch_and_store(
        &self,
        url: &str,
        decisions: Decisions,
    ) -> Result<StoreOutcome, FetchError> {
        let resource = self.fetch(url)?;
        self.store(&resource, decisions)
    }

    /// GETs `url` and buffers the payload with its reported metadata.
    pub fn fetch(&self, url: &str) -> Result<FetchedResource, FetchError> {
        fetch::fetch(url, &self.user_agent)
    }

    /// Validates and persists a fetched payload.
    ///
    /// The policy gates run first, in the order the questions arise: content
    /// type, then reported size. The filename comes from the resource's URL
    /// and content type; duplicate and collision handling follow from what is
    /// already in the directory.
    pub fn store(
        &self,
        resource: &FetchedResource,
        decisions: Decisions,
    ) -> Result<StoreOutcome, FetchError> {
        let declared = resource.content_type.as_deref().unwrap_or("");
        if !content_type::is_safe_image_type(declared) {
            if !decisions.proceed_on_unsafe_type {
                return Err(FetchError::UnsafeContentType {
                    content_type: resource.content_type.clone(),
                });
            }
            tracing::warn!(
                url = resource.url.as_str(),
                content_type = declared,
                "storing payload with unrecognized content type"
            );
        }

        if let Some(len) = resource.content_length {
            if len > LARGE_FILE_THRESHOLD {
                if !decisions.proceed_on_large_file {
                    return Err(FetchError::Oversized {
                        content_length: len,
                    });
                }
                tracing::warn!(
                    url = resource.url.as_str(),
                    content_length = len,
                    "storing payload above the large-file threshold"
                );
            }
        }

        let name = filename::resolve_filename(&resource.url, resource.content_type.as_deref());
        let outcome = store::persist(&resource.body, &self.directory, &name)?;
        match &outcome {
            StoreOutcome::Stored(p) => {
                tracing::info!(url = resource.url.as_str(), path = %p.display(), "stored")
            }
            StoreOutcome::Skipped(p) => {
                tracing::info!(url = resource.url.as_str(), path = %p.display(), "skipped duplicate")
            }
        }
        Ok(outcome)
    }
}
