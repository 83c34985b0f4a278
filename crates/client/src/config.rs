//! Client configuration loaded from the environment and the command line.
use std::env;
use std::path::PathBuf;

use clap::Parser;

use runtime::RuntimeConfig;

const DEFAULT_CATALOG: &str = "data/catalog.ron";

/// Command-line flags. Every flag overrides its environment variable.
#[derive(Debug, Parser)]
#[command(name = "haven")]
#[command(about = "Console tabletop tracker with undo and redo", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Catalog RON file with character and monster definitions
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Session identifier used for the log directory
    #[arg(long)]
    pub session_id: Option<String>,

    /// Root directory for session logs
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Seed for ability-card draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to stderr instead of the session log file
    #[arg(long)]
    pub stderr_logs: bool,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub catalog_path: PathBuf,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub stderr_logs: bool,
    pub runtime: RuntimeConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            session_id: None,
            log_dir: None,
            stderr_logs: false,
            runtime: RuntimeConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HAVEN_CATALOG` - Catalog file (default: `data/catalog.ron`)
    /// - `HAVEN_SESSION_ID` - Session identifier (default: auto-generated)
    /// - `HAVEN_LOG_DIR` - Log root (default: platform cache directory)
    /// - `HAVEN_DRAW_SEED` - Seed for ability-card draws (default: OS entropy)
    /// - `HAVEN_COMMAND_BUFFER` - Command queue size (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("HAVEN_CATALOG") {
            config.catalog_path = PathBuf::from(path);
        }

        config.session_id = env::var("HAVEN_SESSION_ID").ok();
        config.log_dir = env::var("HAVEN_LOG_DIR").ok().map(PathBuf::from);
        config.runtime.draw_seed = read_env::<u64>("HAVEN_DRAW_SEED");

        if let Some(capacity) = read_env::<usize>("HAVEN_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = capacity.max(1);
        }

        config
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(path) = cli.catalog {
            self.catalog_path = path;
        }
        if cli.session_id.is_some() {
            self.session_id = cli.session_id;
        }
        if cli.log_dir.is_some() {
            self.log_dir = cli.log_dir;
        }
        if cli.seed.is_some() {
            self.runtime.draw_seed = cli.seed;
        }
        self.stderr_logs |= cli.stderr_logs;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
