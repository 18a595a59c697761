use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "droid-inspect",
    version,
    about = "Android UI element-tree inspection and reporting tool"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Automation server base URL
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Device name (selendroid selects the selendroid dialect)
    #[arg(long, global = true)]
    pub device: Option<String>,

    /// Path to config file (default: droid-inspect.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the current screen and print its interesting elements
    Page {
        /// Read the source tree from a JSON dump instead of the server
        #[arg(long)]
        input: Option<String>,

        /// Path to the app strings JSON file
        #[arg(long)]
        strings: Option<String>,

        /// Also print a fingerprint of the report, for diffing runs
        #[arg(long)]
        fingerprint: bool,
    },

    /// Count widget classes on the current screen
    Classes {
        /// Read the source tree from a JSON dump instead of the server
        #[arg(long)]
        input: Option<String>,
    },

    /// Build the element-search request for a tag alias
    Find {
        /// Tag alias, e.g. button, textfield, list
        tag: String,

        /// Secondary attribute to read from each match
        #[arg(long)]
        attribute: Option<String>,
    },

    /// Resolve an identifier against the app's string resources
    Id {
        /// Identifier to resolve
        id: String,

        /// Path to the app strings JSON file
        #[arg(long)]
        strings: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `droid-inspect.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub strings: StringsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    #[serde(default = "default_device")]
    pub name: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: default_device(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StringsConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_device() -> String {
    "android".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("droid-inspect.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
