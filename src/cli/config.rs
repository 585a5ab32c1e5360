use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::{persist::store::StoreOptions, state::walker::CaptureOptions};

pub const DEFAULT_CONFIG_FILE: &str = "form-state.yaml";
pub const DEFAULT_STATE_FILE: &str = "form-state.json";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-state",
    version,
    about = "Save and restore UI page control values in a JSON state file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// State file (default: form-state.json)
    #[arg(long, global = true)]
    pub state: Option<String>,

    /// Append a JSON-lines trace of every operation to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Path to config file (default: form-state.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Capture a page's control values into the state file
    Capture {
        /// Element tree file (JSON, or YAML by extension)
        #[arg(long)]
        tree: String,

        /// Page name to store the values under
        #[arg(long)]
        page: String,
    },

    /// Restore stored values onto an element tree
    Restore {
        /// Element tree file (JSON, or YAML by extension)
        #[arg(long)]
        tree: String,

        /// Page name to restore
        #[arg(long)]
        page: String,

        /// Where to write the restored tree (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the stored pages, or one page's controls
    Show {
        #[arg(long)]
        page: Option<String>,
    },

    /// Remove a page from the state file
    Forget {
        #[arg(long)]
        page: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-state.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub state_file: Option<String>,

    #[serde(default)]
    pub trace_file: Option<String>,

    #[serde(default)]
    pub capture: CaptureOptions,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// State file path: CLI > config > default.
pub fn resolve_state_file(cli_state: Option<&str>, config: &AppConfig) -> String {
    cli_state
        .or(config.state_file.as_deref())
        .unwrap_or(DEFAULT_STATE_FILE)
        .to_string()
}

/// Trace file path: CLI > config. No default, tracing is opt-in.
pub fn resolve_trace_file(cli_trace: Option<&str>, config: &AppConfig) -> Option<String> {
    cli_trace
        .or(config.trace_file.as_deref())
        .map(str::to_string)
}

pub fn build_store_options(config: &AppConfig) -> StoreOptions {
    StoreOptions {
        capture: config.capture,
        pretty: config.output.pretty,
    }
}
