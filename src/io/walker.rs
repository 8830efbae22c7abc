use crate::errors::{AuditError, Result};
use crate::io::exclusion::ExclusionFilter;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lazy, restartable enumeration of the files below one root.
///
/// Each call to [`FileWalker::iter`] starts a fresh walk. Entries are
/// yielded in file-name order so repeated runs see the same sequence.
/// Excluded directories are pruned rather than filtered after the fact.
pub struct FileWalker {
    root: PathBuf,
    extensions: Option<Vec<String>>,
    exclusion: ExclusionFilter,
}

impl FileWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: None,
            exclusion: ExclusionFilter::default(),
        }
    }

    /// Only yield files whose extension is in `extensions` (no leading dot,
    /// case-insensitive).
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = Some(
            extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        );
        self
    }

    pub fn with_exclusion(mut self, exclusion: ExclusionFilter) -> Self {
        self.exclusion = exclusion;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.prune(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {e}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(DirEntry::into_path)
            .filter(move |path| self.should_process(path))
    }

    fn prune(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self.exclusion.is_excluded_dir(entry.path())
    }

    fn should_process(&self, path: &Path) -> bool {
        if self.exclusion.is_excluded(path) {
            return false;
        }
        match &self.extensions {
            None => true,
            Some(allowed) => has_extension(path, allowed),
        }
    }
}

fn has_extension(path: &Path, allowed: &[String]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_ascii_lowercase();
            allowed.iter().any(|a| *a == ext)
        })
        .unwrap_or(false)
}

/// Count newline-delimited lines; a trailing newline does not start a new line.
pub fn count_lines(path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
    Ok(content.lines().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_walk_filters_extensions_and_exclusions() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "App.tsx", "x");
        touch(root, "util.py", "x");
        touch(root, "node_modules/lib/index.js", "x");
        touch(root, "views/Page.jsx", "x");

        let walker = FileWalker::new(root)
            .with_extensions(["ts", "tsx", ".jsx"])
            .with_exclusion(ExclusionFilter::new(["*/node_modules/*"]));
        let found: Vec<_> = walker
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            found,
            vec![PathBuf::from("App.tsx"), PathBuf::from("views/Page.jsx")]
        );
    }

    #[test]
    fn test_walk_is_restartable() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.ts", "x");
        touch(temp.path(), "b.ts", "x");

        let walker = FileWalker::new(temp.path());
        let first: Vec<_> = walker.iter().collect();
        let second: Vec<_> = walker.iter().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_count_lines_ignores_trailing_newline() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.ts", "one\ntwo\nthree\n");
        touch(temp.path(), "b.ts", "one\ntwo");
        touch(temp.path(), "empty.ts", "");
        assert_eq!(count_lines(&temp.path().join("a.ts")).unwrap(), 3);
        assert_eq!(count_lines(&temp.path().join("b.ts")).unwrap(), 2);
        assert_eq!(count_lines(&temp.path().join("empty.ts")).unwrap(), 0);
    }

    #[test]
    fn test_count_lines_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bin.js");
        fs::write(&path, [0xff, 0xfe, 0x00, b'\n']).unwrap();
        assert!(matches!(count_lines(&path), Err(AuditError::Decode { .. })));
    }
}
