use crate::config::{ConfigOverrides, EngineKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "complexity-audit")]
#[command(about = "Cyclomatic complexity and file size auditor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Run a subcommand instead of the audit
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (defaults to the nearest .complexity-audit.toml)
    #[arg(short, long, global = true, env = "COMPLEXITY_AUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report functions with CCN above this value
    #[arg(long)]
    pub threshold_complexity: Option<u32>,

    /// Report frontend files with more lines than this value
    #[arg(long)]
    pub threshold_lines: Option<usize>,

    /// Metric extraction engine
    #[arg(long, value_enum)]
    pub engine: Option<EngineKind>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            output: self.output.clone(),
            ccn_threshold: self.threshold_complexity,
            file_size_threshold: self.threshold_lines,
            engine: self.engine,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print every function in one file with its CCN and line span
    Inspect {
        /// Source file to analyze
        path: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
