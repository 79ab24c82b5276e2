mod schema;
pub mod store;

pub use schema::{Config, DateStyle, TagSorting};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/refview/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("refview"))
}

/// Get the default config file path (~/.config/refview/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/refview/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
///
/// A missing file at the default location yields `Config::default()`.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let Some(config_path) = path.or_else(get_config_path) else {
        return Ok(Config::default());
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = std::env::temp_dir().join("refview-missing-config-does-not-exist.yaml");
        let result = load_config(Some(path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_path() {
        let path = std::env::temp_dir().join(format!("refview-config-{}.yaml", std::process::id()));
        fs::write(&path, "default-date-style: absolute\nsort-tags-by: \"name:asc\"\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.default_date_style, DateStyle::Absolute);
        assert_eq!(config.sort_tags_by, TagSorting::NameAsc);
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let path = std::env::temp_dir().join(format!("refview-bad-config-{}.yaml", std::process::id()));
        fs::write(&path, "default-date-style: [not, a, style]\n").unwrap();

        let result = load_config(Some(path.clone()));
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_ends_with_yaml() {
        if let Some(path) = get_config_path() {
            assert!(path.ends_with(".config/refview/config.yaml"));
        }
    }
}
