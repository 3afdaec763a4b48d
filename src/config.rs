//! Fixed input and output locations, resolved against a repository root.

use std::path::{Path, PathBuf};

const LOADER_HEADER: &str = "glad/include/glad/gl.h";
const PLATFORM_HEADER: &str = "glad/include/KHR/khrplatform.h";
const TARGET_HEADER: &str = "include/cugl/cugl.h";

#[derive(Debug)]
pub struct Paths {
    /// glad's generated `gl.h`
    pub loader_header: PathBuf,
    /// `khrplatform.h`, inlined where `gl.h` includes it
    pub platform_header: PathBuf,
    /// Header rewritten by `mod`
    pub target_header: PathBuf,
    /// Destination of the files written by `gen`
    pub out_dir: PathBuf,
}

impl Paths {
    /// `out_dir` defaults to `root`.
    pub fn new(root: &Path, out_dir: Option<&Path>) -> Self {
        Paths {
            loader_header: root.join(LOADER_HEADER),
            platform_header: root.join(PLATFORM_HEADER),
            target_header: root.join(TARGET_HEADER),
            out_dir: out_dir.map_or_else(|| root.to_path_buf(), Path::to_path_buf),
        }
    }
}
