use anyhow::Result;
use clap::Parser;
use complexity_audit::cli::{Cli, Commands};
use complexity_audit::commands;
use complexity_audit::errors::AuditError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Some(Commands::Init { force }) => {
            let path = commands::init::init_config(&cwd, force)?;
            println!("Created {} configuration file", path.display());
        }
        Some(Commands::Inspect { ref path, json }) => {
            commands::inspect::inspect_file(path, json, &mut stdout)?;
        }
        None => {
            let overrides = cli.overrides();
            let config =
                commands::audit::resolve_config(cli.config.as_deref(), &cwd, overrides)?;
            commands::audit::handle_audit(&config, &mut stdout)?;
        }
    }
    Ok(())
}

// Failures go to stdout alongside the progress lines.
fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<AuditError>() {
        Some(audit_err @ AuditError::CapabilityUnavailable { .. }) => {
            println!("Error: {audit_err}.");
            if let Some(hint) = audit_err.hint() {
                println!("{hint}");
            }
        }
        _ => println!("Error: {err:#}"),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
