use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::schema::{ChartConfig, Config};
use super::{ensure_config_dir, get_config_path};
use crate::scoring::{ScoringConfig, Thresholds, Weights};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// The config written by `init`: every section present with its default
/// values, so the file doubles as documentation of the tunable knobs.
fn default_config() -> Config {
    Config {
        scoring: Some(ScoringConfig {
            weights: Some(Weights::default()),
            thresholds: Some(Thresholds::default()),
        }),
        chart: Some(ChartConfig::default()),
    }
}

/// Write a default config file.
///
/// Refuses to overwrite an existing file unless `force` is set or the
/// user confirms interactively. The write is atomic so an interrupted
/// run cannot leave a truncated config behind.
pub fn run_init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => {
            ensure_config_dir()?;
            get_config_path()
        }
    };

    if path.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", path.display()),
            false,
        )?;
        if !overwrite {
            println!("Left {} untouched.", path.display());
            return Ok(());
        }
    }

    let yaml = serde_saphyr::to_string(&default_config())
        .context("Failed to serialize default config")?;

    let mut file = AtomicWriteFile::open(&path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to commit {}", path.display()))?;

    println!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::validate_scoring;

    #[test]
    fn test_default_config_is_fully_populated() {
        let config = default_config();
        assert!(config.scoring.is_some());
        assert!(config.chart.is_some());
    }

    #[test]
    fn test_default_config_passes_validation() {
        let config = default_config();
        assert!(validate_scoring(&config.effective_scoring()).is_ok());
    }

    #[test]
    fn test_default_config_serializes_and_reloads() {
        let yaml = serde_saphyr::to_string(&default_config()).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(parsed, default_config());
    }
}
