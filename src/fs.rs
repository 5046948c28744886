//! Atomic file output
//!
//! The rendered document is written via tempfile + rename in the target
//! directory, so a crash mid-write never leaves a truncated file and
//! readers see either the old or the new document.

use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::ArsenalResult;

/// Write content atomically, creating parent directories as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> ArsenalResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => {
            std::fs::create_dir_all(p)?;
            p
        }
        _ => Path::new("."),
    };

    // Temp file must live on the same filesystem for rename to be atomic.
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// SHA-256 of content, `sha256:`-prefixed hex.
pub fn hash_content(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    format!("sha256:{:x}", digest)
}

/// SHA-256 of a file on disk.
pub fn hash_file(path: &Path) -> ArsenalResult<String> {
    let content = std::fs::read(path)?;
    Ok(hash_content(&content))
}

/// True when the file on disk hashes to `expected`.
pub fn verify_hash(path: &Path, expected: &str) -> ArsenalResult<bool> {
    Ok(hash_file(path)? == expected)
}
