use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "locator-model",
    version,
    about = "Catalogue interactive page elements with ranked locators"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: locator-model.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// YAML file with extra profile definitions
    #[arg(long, global = true)]
    pub profiles_file: Option<String>,

    /// Append build events as JSON lines to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a model from an element snapshot
    Scan {
        /// Path to the JSON element snapshot
        #[arg(long)]
        snapshot: String,

        /// Active locator profile (default from config, else "selenium")
        #[arg(long)]
        profile: Option<String>,

        /// Scan beneath the element with this id instead of the document root
        #[arg(long)]
        root_id: Option<String>,

        /// Append the element with this id to the model (repeatable)
        #[arg(long = "append-id")]
        append_ids: Vec<String>,
    },

    /// List the available locator profiles
    Profiles,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `locator-model.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_profile")]
    pub profile: String,

    pub profiles_file: Option<String>,

    pub trace: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            profiles_file: None,
            trace: None,
        }
    }
}

fn default_profile() -> String { "selenium".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("locator-model.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Settings after layering CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub profile: String,
    pub profiles_file: Option<String>,
    pub trace: Option<String>,
}

/// CLI > config > defaults
pub fn resolve_settings(
    config: &AppConfig,
    profile: Option<&str>,
    profiles_file: Option<&str>,
    trace: Option<&str>,
) -> ResolvedSettings {
    ResolvedSettings {
        profile: profile.unwrap_or(&config.profile).to_string(),
        profiles_file: profiles_file
            .map(str::to_string)
            .or_else(|| config.profiles_file.clone()),
        trace: trace.map(str::to_string).or_else(|| config.trace.clone()),
    }
}
