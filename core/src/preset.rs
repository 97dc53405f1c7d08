//! Preset loading for the article style defaults
//!
//! A preset is a small TOML file naming one value token per field:
//!
//! ```toml
//! font_family = "Open Sans"
//! font_size = "18px"
//! font_color = "#000000"
//! background_color = "#FFFFFF"
//! content_width = "1394px"
//! ```
//!
//! Missing keys fall back to the first entry of that field's table. Tokens that
//! are not in the table are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use article_types::options::find_by_value;
use article_types::{ArticleField, ArticleState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw preset as written on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArticlePreset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_width: Option<String>,
}

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in preset: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialize error for preset: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Unknown value {value:?} for {field}")]
    UnknownValue { field: &'static str, value: String },
}

impl ArticlePreset {
    pub fn from_toml_str(contents: &str) -> Result<Self, PresetError> {
        Ok(toml::from_str(contents)?)
    }

    /// Preset naming every field of `state`
    pub fn from_state(state: &ArticleState) -> Self {
        let token = |field| Some(state.get(field).value.to_string());
        Self {
            font_family: token(ArticleField::FontFamily),
            font_size: token(ArticleField::FontSize),
            font_color: token(ArticleField::FontColor),
            background_color: token(ArticleField::BackgroundColor),
            content_width: token(ArticleField::ContentWidth),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, PresetError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn token(&self, field: ArticleField) -> Option<&str> {
        match field {
            ArticleField::FontFamily => self.font_family.as_deref(),
            ArticleField::FontSize => self.font_size.as_deref(),
            ArticleField::FontColor => self.font_color.as_deref(),
            ArticleField::BackgroundColor => self.background_color.as_deref(),
            ArticleField::ContentWidth => self.content_width.as_deref(),
        }
    }

    /// Resolve every token against its option table.
    pub fn resolve(&self) -> Result<ArticleState, PresetError> {
        let mut state = ArticleState::default();
        for field in ArticleField::all() {
            let Some(value) = self.token(*field) else {
                continue;
            };
            let option = find_by_value(field.options(), value).ok_or_else(|| {
                PresetError::UnknownValue {
                    field: field.key(),
                    value: value.to_string(),
                }
            })?;
            state = state.with(*field, option);
        }
        Ok(state)
    }
}

/// Parse and resolve a preset in one step
pub fn parse_preset(contents: &str) -> Result<ArticleState, PresetError> {
    ArticlePreset::from_toml_str(contents)?.resolve()
}

/// Load and resolve a preset file
pub fn load_file(path: &Path) -> Result<ArticleState, PresetError> {
    let contents = fs::read_to_string(path).map_err(|e| PresetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_preset(&contents)
}

/// Save `state` as a preset file
pub fn save_file(path: &Path, state: &ArticleState) -> Result<(), PresetError> {
    let contents = ArticlePreset::from_state(state).to_toml_string()?;
    fs::write(path, contents).map_err(|e| PresetError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve a preset, falling back to the built-in defaults on any error.
pub fn defaults_or_builtin(contents: &str) -> ArticleState {
    match parse_preset(contents) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid article preset, using built-in defaults");
            ArticleState::default()
        }
    }
}
