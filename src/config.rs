use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_WINDOW_TITLE: &str = "Movies";
pub const DEFAULT_WINDOW_WIDTH: f32 = 600.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 400.0;
const MIN_WINDOW_WIDTH: f32 = 320.0;
const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Which chrome the movie page is built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListLayout {
    /// Search bar above a grid with fixed column widths.
    Searchable,
    /// Grid only, columns resizable.
    Bare,
}

impl ListLayout {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Searchable => "searchable",
            Self::Bare => "bare",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "searchable" | "search" => Some(Self::Searchable),
            "bare" | "grid" | "plain" => Some(Self::Bare),
            _ => None,
        }
    }

    pub const fn has_search_bar(self) -> bool {
        matches!(self, Self::Searchable)
    }
}

impl Default for ListLayout {
    fn default() -> Self {
        Self::Searchable
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub layout: ListLayout,
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: ListLayout::default(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    layout: Option<String>,
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

impl AppConfig {
    fn merge(&mut self, parsed: RawConfig) {
        if let Some(mode) = parsed.layout {
            match ListLayout::from_str(&mode) {
                Some(layout) => self.layout = layout,
                None => warn!(
                    "Unknown layout `{mode}` in {CONFIG_FILE}; falling back to {}.",
                    self.layout.as_str()
                ),
            }
        }
        if let Some(title) = parsed.window_title {
            if title.trim().is_empty() {
                warn!("Empty window_title in {CONFIG_FILE}; keeping `{}`.", self.window_title);
            } else {
                self.window_title = title;
            }
        }
        if let Some(w) = parsed.window_width {
            self.window_width = w.max(MIN_WINDOW_WIDTH);
        }
        if let Some(h) = parsed.window_height {
            self.window_height = h.max(MIN_WINDOW_HEIGHT);
        }
    }
}

/// Reads `config.json` from the working directory.
pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(cfg_path: &Path) -> AppConfig {
    let mut cfg = AppConfig::default();

    match fs::read_to_string(cfg_path) {
        Ok(raw) => match serde_json::from_str::<RawConfig>(&raw) {
            Ok(parsed) => {
                cfg.merge(parsed);
                info!("Loaded config from {}", cfg_path.display());
            }
            Err(err) => {
                warn!(
                    "Failed to parse {} ({}). Using defaults.",
                    cfg_path.display(),
                    err
                );
            }
        },
        Err(_) => {
            info!("No {} found; using defaults", cfg_path.display());
        }
    }

    cfg
}

pub fn config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}
