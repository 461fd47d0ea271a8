use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::tui::colors::ColorName;
use crate::tui::printer::TEMPLATE_LIMIT;

/// Persistent configuration for termtint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TintConfig {
    /// Templates at least this long skip the reset-before-newline rule.
    #[serde(default = "default_template_limit")]
    pub template_limit: usize,

    /// Color for `termtint safe` when `--color` is not given.
    #[serde(default)]
    pub default_color: Option<ColorName>,

    /// Text between a tag like `[SUCCESS]` and the message.
    #[serde(default)]
    pub tag_separator: String,
}

fn default_template_limit() -> usize {
    TEMPLATE_LIMIT
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            template_limit: TEMPLATE_LIMIT,
            default_color: None,
            tag_separator: String::new(),
        }
    }
}

impl TintConfig {
    /// Load config from the default location (~/.config/termtint/config.json).
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, falling back to defaults if it is missing or unreadable.
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save config to the default location.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("termtint")
            .join("config.json")
    }
}
