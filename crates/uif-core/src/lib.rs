pub mod config;
pub mod logging;

// Download pipeline: fetch, validate, name, dedupe, store.
pub mod checksum;
pub mod content_type;
pub mod error;
pub mod fetch;
pub mod fetcher;
pub mod filename;
pub mod store;
