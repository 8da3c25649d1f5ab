use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

fn default_data_dir() -> String {
    "~/.local/share/stickypad".to_string()
}

fn default_export_dir() -> String {
    "~/Documents/stickypad".to_string()
}

fn default_theme_name() -> String {
    "stickypad-dusk".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            export_dir: default_export_dir(),
            theme: default_theme_name(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            match fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Failed to parse config: {}", e),
                },
                Err(e) => eprintln!("Failed to read config: {}", e),
            }
        }
        Self::default()
    }

    /// Load config, creating the config directory and a default file if
    /// they don't exist. Does NOT override an existing config.
    pub fn load_or_create() -> Self {
        let config_dir = Self::config_dir();
        let config_path = Self::config_path();

        if !config_dir.exists() {
            let _ = fs::create_dir_all(&config_dir);
        }
        if !config_path.exists() {
            let default_config = Self::default();
            if let Ok(toml_string) = toml::to_string_pretty(&default_config) {
                let _ = fs::write(&config_path, toml_string);
            }
        }

        Self::load()
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("stickypad")
    }

    pub fn themes_dir() -> PathBuf {
        Self::config_dir().join("themes")
    }

    pub fn data_path(&self) -> PathBuf {
        let path = shellexpand::tilde(&self.data_dir).to_string();
        PathBuf::from(path)
    }

    /// Where the board document lives.
    pub fn board_path(&self) -> PathBuf {
        self.data_path().join("board.json")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_path().join("logs")
    }

    pub fn export_path(&self) -> PathBuf {
        let path = shellexpand::tilde(&self.export_dir).to_string();
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: Config = toml::from_str("export_dir = \"/tmp/out\"").unwrap();
        assert_eq!(config.export_dir, "/tmp/out");
        assert_eq!(config.data_dir, default_data_dir());
        assert_eq!(config.theme, default_theme_name());
    }

    #[test]
    fn test_board_path_is_under_data_dir() {
        let config = Config {
            data_dir: "/tmp/stickypad-test".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.board_path(),
            PathBuf::from("/tmp/stickypad-test/board.json")
        );
    }

    #[test]
    fn test_tilde_expansion() {
        let config = Config::default();
        assert!(!config.data_path().to_string_lossy().contains('~'));
    }
}
