use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GtConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Hash prefix width in commit lists
    #[serde(default = "default_hash_length")]
    pub hash_length: usize,
    /// ANSI color in non-interactive output
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Share of terminal width given to the commit list pane
    #[serde(default = "default_list_percent")]
    pub list_percent: u16,
    /// Lines kept visible from the previous page on PgUp/PgDn
    #[serde(default = "default_page_overlap")]
    pub page_overlap: usize,
}

fn default_true() -> bool {
    true
}

fn default_hash_length() -> usize {
    8
}

fn default_list_percent() -> u16 {
    50
}

fn default_page_overlap() -> usize {
    3
}

impl Default for GtConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hash_length: default_hash_length(),
            color: default_true(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            list_percent: default_list_percent(),
            page_overlap: default_page_overlap(),
        }
    }
}

impl UiConfig {
    /// List pane share clamped to something both panes can live with
    pub fn list_percent_clamped(&self) -> u16 {
        self.list_percent.clamp(20, 80)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("git-tools").join("config.toml"))
}

/// Load the user config, falling back to defaults when the file is
/// missing. A malformed file is an error; silently ignoring it would
/// make typos look like defaults.
pub fn load() -> Result<GtConfig> {
    let Some(path) = config_path() else {
        return Ok(GtConfig::default());
    };
    if !path.exists() {
        return Ok(GtConfig::default());
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse(&text).with_context(|| format!("Failed to parse config: {}", path.display()))
}

fn parse(text: &str) -> Result<GtConfig> {
    Ok(toml::from_str(text)?)
}
