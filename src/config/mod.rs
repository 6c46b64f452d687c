mod init;
mod schema;

pub use init::run_init;
pub use schema::{ChartConfig, Config};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/roomscore/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("roomscore")
}

/// Get the default config file path (~/.config/roomscore/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Ensure the config directory exists
pub fn ensure_config_dir() -> Result<()> {
    let config_dir = get_config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "Failed to create config directory at {}",
                config_dir.display()
            )
        })?;
    }
    Ok(())
}

/// Load configuration from a YAML file.
///
/// With an explicit `path` the file must exist. With `None`, the default
/// path is used and a missing file yields `Config::default()` — every
/// knob has a built-in default and the readings come from the command
/// line, so a config file is optional.
///
/// # Errors
///
/// Returns an error if an explicitly given file does not exist, if the
/// file cannot be read, or if the YAML does not parse.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => {
            let p = get_config_path();
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}
