use crate::config::{default_config_toml, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Write a default config file into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, &default_config_toml())?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_from_path, AuditConfig};
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let temp = TempDir::new().unwrap();
        let path = init_config(temp.path(), false).unwrap();
        assert_eq!(load_config_from_path(&path).unwrap(), AuditConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "ccn_threshold = 3\n").unwrap();

        assert!(init_config(temp.path(), false).is_err());
        let path = init_config(temp.path(), true).unwrap();
        assert_eq!(load_config_from_path(&path).unwrap().ccn_threshold, 10);
    }
}
