use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::canvas::{CanvasOptions, DEFAULT_SHAPE_COLOR};
use crate::palette::{parse_hex_color, Palette, PaletteError};

const APP_DIR: &str = "shapetap";
const APP_CONFIG_FILE: &str = "config.json";

pub const DEFAULT_RESTART_MESSAGE: &str = "Board full, starting over";
pub const DEFAULT_COUNT_LABEL: &str = "Shapes: ";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse config")]
    ParseConfig(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidColor(#[from] PaletteError),
    #[error("invalid shape size bounds: min {min} exceeds max {max}")]
    InvalidSizeBounds { min: f32, max: f32 },
}

/// Raw `config.json` payload; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct AppConfig {
    #[serde(default)]
    default_color: Option<String>,
    #[serde(default)]
    palette: Option<Vec<String>>,
    #[serde(default)]
    min_shape_size: Option<f32>,
    #[serde(default)]
    max_shape_size: Option<f32>,
    #[serde(default)]
    max_shape_count: Option<usize>,
    #[serde(default)]
    restart_message: Option<String>,
    #[serde(default)]
    count_label: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSettings {
    pub options: CanvasOptions,
    pub palette: Palette,
    pub restart_message: String,
    pub count_label: String,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            options: CanvasOptions::default(),
            palette: Palette::empty(),
            restart_message: DEFAULT_RESTART_MESSAGE.to_string(),
            count_label: DEFAULT_COUNT_LABEL.to_string(),
        }
    }
}

/// Load settings from `$XDG_CONFIG_HOME/shapetap/config.json` (falling back
/// to `~/.config`). A missing file or unresolvable home yields the defaults;
/// a malformed payload is an error so a bad palette never silently degrades.
pub fn load_settings() -> ConfigResult<BoardSettings> {
    let (xdg_config_home, home) = config_env_dirs();
    load_settings_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_settings_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<BoardSettings> {
    let Some(path) = app_config_path(xdg_config_home, home) else {
        return Ok(BoardSettings::default());
    };
    if !path.exists() {
        return Ok(BoardSettings::default());
    }

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&contents)?;
    let settings = resolve_settings(config)?;
    tracing::info!(
        ?path,
        palette_len = settings.palette.len(),
        max_shapes = settings.options.max_shapes,
        "loaded board config"
    );
    Ok(settings)
}

fn resolve_settings(config: AppConfig) -> ConfigResult<BoardSettings> {
    let defaults = CanvasOptions::default();

    let default_color = match config.default_color.as_deref() {
        Some(value) => parse_hex_color(value)?,
        None => DEFAULT_SHAPE_COLOR,
    };
    let palette = match config.palette.as_deref() {
        Some(values) => Palette::from_hex_strings(values)?,
        None => Palette::empty(),
    };

    let min_size = config.min_shape_size.unwrap_or(defaults.min_size);
    let max_size = config.max_shape_size.unwrap_or(defaults.max_size);
    if !(min_size > 0.0 && max_size >= min_size) {
        return Err(ConfigError::InvalidSizeBounds {
            min: min_size,
            max: max_size,
        });
    }

    Ok(BoardSettings {
        options: CanvasOptions {
            default_color,
            min_size,
            max_size,
            max_shapes: config.max_shape_count.unwrap_or(defaults.max_shapes),
        },
        palette,
        restart_message: config
            .restart_message
            .unwrap_or_else(|| DEFAULT_RESTART_MESSAGE.to_string()),
        count_label: config
            .count_label
            .unwrap_or_else(|| DEFAULT_COUNT_LABEL.to_string()),
    })
}

fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn app_config_path(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(APP_DIR);
    path.push(APP_CONFIG_FILE);
    Some(path)
}

fn config_root(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Some(xdg.to_path_buf());
    }
    home.map(|home| home.join(".config"))
}
