use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// nuclei-scribe configuration (loaded from .nuclei-scribe.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScribeConfig {
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub refine: RefineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Directory for generated reports when no output path is given
    /// (default: current directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefineConfig {
    /// Master switch for LLM refinement
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Chat-completions model
    #[serde(default = "default_model")]
    pub model: String,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Upper bound on the refined report length
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for RefineConfig {
    fn default() -> Self {
        RefineConfig {
            enabled: default_enabled(),
            model: default_model(),
            api_base: default_api_base(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_max_tokens() -> u32 {
    1500
}

impl ScribeConfig {
    /// Try to load .nuclei-scribe.toml from the given directory or its parents
    pub fn load(start: &Path) -> Option<Self> {
        let config_path = find_config_file(start)?;
        debug!("Found config: {}", config_path.display());

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<ScribeConfig>(&content) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                    None
                }
            },
            Err(e) => {
                debug!("Could not read {}: {}", config_path.display(), e);
                None
            }
        }
    }
}

/// Walk up from the start path to find .nuclei-scribe.toml
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(".nuclei-scribe.toml");
        if config.exists() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Create a default .nuclei-scribe.toml in the current directory
pub fn init_config() -> Result<()> {
    let config_path = std::env::current_dir()?.join(".nuclei-scribe.toml");

    if config_path.exists() {
        println!("⚠️  .nuclei-scribe.toml already exists in this directory");
        return Ok(());
    }

    let default_config = r#"# nuclei-scribe configuration

[report]
# Directory for generated reports when no --output path is given.
# Created on demand. Default: current directory
# output_dir = "reports"

[refine]
# Set to false to always skip LLM refinement (same as --no-refine)
enabled = true

# Chat-completions model used for refinement
model = "gpt-3.5-turbo"

# Any OpenAI-compatible endpoint works, e.g. a local one:
# api_base = "http://localhost:11434/v1"
api_base = "https://api.openai.com/v1"

# Upper bound on the refined report length
max_tokens = 1500

# The API key is never read from this file. Set OPENAI_API_KEY instead.
"#;

    std::fs::write(&config_path, default_config)?;
    println!("✅ Created .nuclei-scribe.toml");
    println!("   Edit it to customize report and refinement settings.");

    Ok(())
}
