//! Disk persistence with duplicate detection and collision-free naming.
//!
//! A payload never silently overwrites a file with different content. When
//! the target name is free it is written directly. When the name is taken,
//! the payload is staged in a `.temp` file alongside it, compared against the
//! existing file (size first, then SHA-256), and then either discarded as a
//! duplicate or renamed to the first free `{base}_{counter}{ext}` name.

mod temp;

pub use temp::TempFile;

use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::error::StoreError;

/// Suffix of the scratch file written during duplicate checks.
pub const TEMP_SUFFIX: &str = ".temp";

/// Terminal disposition of a store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The payload was written to a new file at this path.
    Stored(PathBuf),
    /// A byte-identical file already existed at this path; the payload was
    /// discarded.
    Skipped(PathBuf),
}

impl StoreOutcome {
    /// Path of the file satisfying the request, freshly stored or
    /// pre-existing.
    pub fn path(&self) -> &Path {
        match self {
            StoreOutcome::Stored(p) | StoreOutcome::Skipped(p) => p,
        }
    }
}

/// Scratch path for duplicate checks: the target path with `.temp` appended
/// (`cat.png` stages at `cat.png.temp`).
pub fn temp_path(target: &Path) -> PathBuf {
    let mut p = target.as_os_str().to_owned();
    p.push(TEMP_SUFFIX);
    PathBuf::from(p)
}

/// Writes `payload` into `directory` under `filename` without clobbering
/// different content.
///
/// Creates `directory` (and parents) if missing. A free target name is
/// written directly; a taken name triggers the duplicate check described in
/// the module docs. The scratch file never survives the call, whatever the
/// outcome.
pub fn persist(
    payload: &[u8],
    directory: &Path,
    filename: &str,
) -> Result<StoreOutcome, StoreError> {
    fs::create_dir_all(directory)
        .map_err(|e| StoreError::new("create directory", directory, e))?;

    let target = directory.join(filename);
    if !target.exists() {
        fs::write(&target, payload).map_err(|e| StoreError::new("write", &target, e))?;
        return Ok(StoreOutcome::Stored(target));
    }

    // Name taken: stage the payload next to the existing file and compare.
    let staged = TempFile::create(temp_path(&target), payload)?;
    if is_duplicate(staged.path(), &target)? {
        tracing::debug!(path = %target.display(), "identical content already on disk");
        return Ok(StoreOutcome::Skipped(target));
    }

    let fallback = next_free_path(directory, filename);
    let stored = staged.persist(&fallback)?;
    Ok(StoreOutcome::Stored(stored))
}

/// True when the two files hold identical bytes. Sizes are compared first;
/// only equal sizes are hashed.
fn is_duplicate(a: &Path, b: &Path) -> Result<bool, StoreError> {
    let len_a = fs::metadata(a)
        .map_err(|e| StoreError::new("stat", a, e))?
        .len();
    let len_b = fs::metadata(b)
        .map_err(|e| StoreError::new("stat", b, e))?
        .len();
    if len_a != len_b {
        return Ok(false);
    }
    let hash_a = checksum::sha256_path(a).map_err(|e| StoreError::new("hash", a, e))?;
    let hash_b = checksum::sha256_path(b).map_err(|e| StoreError::new("hash", b, e))?;
    Ok(hash_a == hash_b)
}

/// First free `{base}_{counter}{ext}` path in `directory`, counter starting
/// at 1.
fn next_free_path(directory: &Path, filename: &str) -> PathBuf {
    let (base, ext) = split_extension(filename);
    let mut counter = 1u32;
    loop {
        let candidate = directory.join(format!("{base}_{counter}{ext}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Splits a filename into (stem, extension-with-dot). A name without a dot,
/// or with only a leading dot, has an empty extension.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(i) if i > 0 => (&filename[..i], &filename[i..]),
        _ => (filename, ""),
    }
}
