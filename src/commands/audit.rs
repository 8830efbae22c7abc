use crate::audit::run_audit;
use crate::config::{load_config, AuditConfig, ConfigOverrides};
use crate::extraction::create_extractor;
use crate::report::Report;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Resolve configuration for a run started in `cwd`.
pub fn resolve_config(
    explicit: Option<&Path>,
    cwd: &Path,
    overrides: ConfigOverrides,
) -> Result<AuditConfig> {
    let config = load_config(explicit, cwd)?;
    Ok(overrides.apply(config))
}

/// Run the audit with the engine named in `config`.
pub fn handle_audit(config: &AuditConfig, console: &mut dyn Write) -> Result<Report> {
    let extractor = create_extractor(config.engine);
    log::info!("Using the {} engine", extractor.name());
    run_audit(config, extractor.as_ref(), console)
}
