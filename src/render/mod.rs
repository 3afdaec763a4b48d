//! Renderers — turn a ParsedHeader into generated C text.

pub mod header;
pub mod stubs;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// First line of every composed header. The splicer cuts the target file at
/// the first line starting with this text, so the two must never drift apart.
pub const BANNER: &str = "// The following part was generated using `gen-gl`";

/// A rendered output file, named relative to its destination directory.
#[derive(Debug)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub contents: String,
}

/// Write every file into `out_dir`, replacing existing files of the same name.
pub fn write_files(out_dir: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let out_path = out_dir.join(file.name);
        fs::write(&out_path, &file.contents)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        log::info!("wrote {}", out_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_overwrites() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.h"), "stale").unwrap();

        let files = [
            GeneratedFile { name: "a.h", contents: "fresh\n".to_string() },
            GeneratedFile { name: "a.c", contents: "int a;\n".to_string() },
        ];
        write_files(dir.path(), &files).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("a.h")).unwrap(), "fresh\n");
        assert_eq!(fs::read_to_string(dir.path().join("a.c")).unwrap(), "int a;\n");
    }

    #[test]
    fn missing_directory_fails_with_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let files = [GeneratedFile { name: "a.h", contents: String::new() }];

        let err = write_files(&missing, &files).unwrap_err();
        assert!(err.to_string().contains("failed to write"), "Got: {err}");
    }
}
