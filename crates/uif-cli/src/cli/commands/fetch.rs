//! `uif fetch <URL>...` – download images into the target directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use uif_core::config::UifConfig;
use uif_core::error::FetchError;
use uif_core::fetcher::{Decisions, Fetcher};
use uif_core::store::StoreOutcome;

use crate::cli::prompt;

pub fn run_fetch(
    cfg: &UifConfig,
    urls: &[String],
    dir: Option<&Path>,
    allow_unsafe_type: bool,
    allow_large: bool,
    no_input: bool,
) -> Result<()> {
    let directory = cfg.resolve_download_dir(dir);
    fs::create_dir_all(&directory)
        .with_context(|| format!("could not create {}", directory.display()))?;
    println!("Directory ready: {}", directory.display());

    let fetcher = Fetcher::new(&directory).with_user_agent(cfg.resolve_user_agent());
    let granted = Decisions {
        proceed_on_unsafe_type: allow_unsafe_type,
        proceed_on_large_file: allow_large,
    };

    let total = urls.len();
    let mut successful = 0usize;
    for (i, url) in urls.iter().enumerate() {
        if total > 1 {
            println!("\n[{}/{}]", i + 1, total);
        }
        if fetch_one(&fetcher, url, granted, no_input) {
            successful += 1;
        }
    }

    if total > 1 {
        println!("\nSummary: {successful}/{total} images downloaded successfully");
    }
    if successful == 0 {
        anyhow::bail!("no images downloaded");
    }
    Ok(())
}

/// Downloads one URL, prompting through the policy gates. Returns true when a
/// file was stored or an identical one was already present. Errors are
/// reported on stdout; one bad URL never aborts the batch.
fn fetch_one(fetcher: &Fetcher, url: &str, granted: Decisions, no_input: bool) -> bool {
    println!("Fetching: {url}");

    let resource = match fetcher.fetch(url) {
        Ok(resource) => resource,
        Err(err) => {
            report_failure(&err);
            return false;
        }
    };

    // The payload is already in memory, so an answered question retries
    // the store without refetching.
    let mut decisions = granted;
    loop {
        match fetcher.store(&resource, decisions) {
            Ok(StoreOutcome::Stored(path)) => {
                if let Some(name) = path.file_name() {
                    println!("Successfully fetched: {}", name.to_string_lossy());
                }
                println!("Image saved to {}", path.display());
                return true;
            }
            Ok(StoreOutcome::Skipped(_)) => {
                println!("Identical file already exists, skipping");
                return true;
            }
            Err(FetchError::UnsafeContentType { content_type }) => {
                println!(
                    "Warning: content type '{}' may not be an image",
                    content_type.as_deref().unwrap_or("")
                );
                if no_input || !prompt::confirm("Continue anyway?") {
                    println!("Download cancelled");
                    return false;
                }
                decisions.proceed_on_unsafe_type = true;
            }
            Err(FetchError::Oversized { content_length }) => {
                let size_mb = content_length as f64 / (1024.0 * 1024.0);
                println!("Large file detected: {size_mb:.1}MB");
                if no_input || !prompt::confirm("Continue download?") {
                    println!("Download cancelled");
                    return false;
                }
                decisions.proceed_on_large_file = true;
            }
            Err(err) => {
                report_failure(&err);
                return false;
            }
        }
    }
}

fn report_failure(err: &FetchError) {
    match err {
        FetchError::Timeout(_) => {
            println!("Connection timeout - the server took too long to respond")
        }
        FetchError::Connection(_) => println!("Connection error - unable to reach the server"),
        FetchError::Http(status) => println!("HTTP error: {status}"),
        FetchError::Request(source) => println!("Request error: {source}"),
        err => println!("An unexpected error occurred: {err}"),
    }
}
