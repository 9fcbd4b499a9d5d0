use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{self, WrapErr};
use cube_core::ColorScheme;
use log::debug;
use serde::{Deserialize, Serialize};

/// Settings read from `config.toml`. Every key is optional.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How many steps a phase may take before the solve gives up
    pub max_steps_per_phase: usize,
    /// Render stickers with terminal colors
    pub color: bool,
    /// Check scanned cubes for impossible colorings before solving them
    pub strict: bool,
    /// Which color belongs on which face, as the cube is scanned
    pub scheme: ColorScheme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_steps_per_phase: 64,
            color: true,
            strict: true,
            scheme: ColorScheme::default(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cubecoach").join("config.toml"))
    }

    /// Load the config at `path`, or at the default location if there is none. A missing file
    /// at the default location just means the defaults.
    pub fn load(path: Option<&Path>) -> eyre::Result<Config> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => match Config::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        debug!("Reading config from {}", path.display());
        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Could not read {}", path.display()))?;

        toml::from_str(&text).wrap_err_with(|| format!("Invalid config in {}", path.display()))
    }
}
