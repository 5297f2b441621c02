use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use thiserror::Error;

use crate::model::{ColorConfig, ThemeConfig};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("read theme config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse theme config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid color for colors.{key}: {value:?}")]
    InvalidColor { key: &'static str, value: String },
}

/// Resolved colors, passed by value into the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub title: Color,
    pub normal_text: Color,
    pub cursor: Color,
    pub selected: Color,
    pub border: Color,
    pub instruction: Color,
    pub active_column_bg: Color,
}

fn parse_color(key: &'static str, value: &str) -> Result<Color, ThemeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ThemeError::InvalidColor {
            key,
            value: value.to_string(),
        });
    }
    Color::from_str(trimmed).map_err(|_| ThemeError::InvalidColor {
        key,
        value: value.to_string(),
    })
}

impl Theme {
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let raw = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: ThemeConfig = toml::from_str(&raw).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_config(&cfg)?;
        tracing::debug!(path = %path.display(), "theme loaded");
        Ok(theme)
    }

    pub fn from_config(cfg: &ThemeConfig) -> Result<Self, ThemeError> {
        let ColorConfig {
            title,
            normal_text,
            cursor,
            selected,
            border,
            instruction,
            active_column_bg,
        } = &cfg.colors;

        Ok(Theme {
            title: parse_color("title", title)?,
            normal_text: parse_color("normal_text", normal_text)?,
            cursor: parse_color("cursor", cursor)?,
            selected: parse_color("selected", selected)?,
            border: parse_color("border", border)?,
            instruction: parse_color("instruction", instruction)?,
            active_column_bg: parse_color("active_column_bg", active_column_bg)?,
        })
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
