use std::fs;
use std::path::{Path, PathBuf};

use super::core::{AuditConfig, CONFIG_FILE_NAME};
use crate::errors::{AuditError, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a TOML document into a config. Missing keys take their defaults.
pub fn parse_config(contents: &str, path: &Path) -> Result<AuditConfig> {
    toml::from_str::<AuditConfig>(contents).map_err(|e| AuditError::config(path, e.to_string()))
}

/// Load an explicitly requested config file. A missing file is an error.
pub fn load_config_from_path(path: &Path) -> Result<AuditConfig> {
    let contents = fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
    let config = parse_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest config file at or above `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Resolve the configuration for a run.
///
/// An explicit path wins; otherwise the nearest config file above `start`
/// is used; otherwise defaults. A discovered file that fails to parse is an
/// error rather than a silent fallback.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<AuditConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match find_config_file(start) {
        Some(path) => load_config_from_path(&path),
        None => {
            log::debug!(
                "No {} found after checking {} directories. Using default config.",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            Ok(AuditConfig::default())
        }
    }
}

/// Default config file contents written by `init`.
pub fn default_config_toml() -> String {
    let config = AuditConfig::default();
    let body = toml::to_string_pretty(&config).unwrap_or_default();
    format!("# complexity-audit configuration\n\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineKind;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            indoc! {r#"
                roots = ["app"]
                ccn_threshold = 15
                engine = "lizard"
            "#},
            Path::new("cfg.toml"),
        )
        .unwrap();

        assert_eq!(config.roots, vec![PathBuf::from("app")]);
        assert_eq!(config.ccn_threshold, 15);
        assert_eq!(config.engine, EngineKind::Lizard);
        assert_eq!(config.file_size_threshold, 100);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let err = parse_config("ccn_threshold = \"ten\"", Path::new("cfg.toml")).unwrap_err();
        assert!(matches!(err, AuditError::Config { .. }));
    }

    #[test]
    fn test_discovers_config_in_ancestor() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "file_size_threshold = 250\n",
        )
        .unwrap();
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(None, &nested).unwrap();
        assert_eq!(config.file_size_threshold, 250);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(load_config(Some(&missing), temp.path()).is_err());
    }

    #[test]
    fn test_default_config_round_trips() {
        let text = default_config_toml();
        let config = parse_config(&text, Path::new("init.toml")).unwrap();
        assert_eq!(config, AuditConfig::default());
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
