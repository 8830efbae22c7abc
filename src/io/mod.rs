pub mod exclusion;
pub mod walker;

pub use exclusion::ExclusionFilter;
pub use walker::{count_lines, FileWalker};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write `content` to `path`, replacing any previous file.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
