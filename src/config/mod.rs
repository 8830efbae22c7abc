mod core;
mod loader;

pub use self::core::{
    AuditConfig, ConfigOverrides, EngineKind, CONFIG_FILE_NAME, DEFAULT_REPORT_FILE,
};
pub use self::loader::{
    default_config_toml, directory_ancestors, find_config_file, load_config,
    load_config_from_path, parse_config,
};
