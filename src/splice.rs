//! Replace the generated tail of a target header.
//!
//! Everything before the first line starting with [`BANNER`] is kept
//! byte-for-byte; everything from that line onward is replaced.

use crate::render::BANNER;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Result of splicing a file on disk.
#[derive(Debug, PartialEq, Eq)]
pub enum SpliceOutcome {
    Spliced,
    /// No banner line; the file was left untouched.
    MarkerMissing,
}

/// Splice `generated` into `original` at the banner line.
///
/// Returns `None` when no line starts with the banner.
pub fn splice(original: &str, generated: &str) -> Option<String> {
    let mut offset = 0;
    for line in original.split_inclusive('\n') {
        if line.starts_with(BANNER) {
            return Some(format!("{}{}\n#endif\n", &original[..offset], generated));
        }
        offset += line.len();
    }
    None
}

/// Splice `generated` into the file at `path`, rewriting it in place.
pub fn splice_file(path: &Path, generated: &str) -> Result<SpliceOutcome> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let Some(spliced) = splice(&original, generated) else {
        return Ok(SpliceOutcome::MarkerMissing);
    };

    fs::write(path, spliced).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(SpliceOutcome::Spliced)
}
