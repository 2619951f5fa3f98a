//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the greeting name, theme, animation preference, start page and
//! hotkeys.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::Hotkeys;

use crate::error::AppError;
use crate::pages::PageId;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/mindful-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub user_name: String,
    pub theme_name: String,
    pub animations: bool,
    pub start_page: String,
    pub hotkeys: Hotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_animations")]
    pub animations: bool,
    #[serde(default = "default_start_page")]
    pub start_page: String,
    #[serde(default)]
    pub hotkeys: Hotkeys,
}

fn default_user_name() -> String {
    "Sarah".to_string()
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_animations() -> bool {
    true
}

fn default_start_page() -> String {
    PageId::Home.as_str().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            user_name: default_user_name(),
            theme_name: default_theme_name(),
            animations: default_animations(),
            start_page: default_start_page(),
            hotkeys: Hotkeys::default(),
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If there is no file yet, keep the defaults and
    /// write them out so the user has something to edit.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.clone().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply(&contents)?;
            debug!("Loaded configuration from {}", file_path.display());
        } else {
            info!("Writing default configuration to {}", file_path.display());
            self.save()?;
        }

        Ok(())
    }

    /// Overwrite the current values with the ones in the YAML document.
    ///
    fn apply(&mut self, contents: &str) -> Result<(), AppError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.user_name = data.user_name;
        self.theme_name = data.theme_name;
        self.animations = data.animations;
        self.start_page = data.start_page;
        self.hotkeys = data.hotkeys;
        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            user_name: self.user_name.clone(),
            theme_name: self.theme_name.clone(),
            animations: self.animations,
            start_page: self.start_page.clone(),
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Override file values with the command line: a start page and the
    /// request to switch pages without transitions.
    ///
    pub fn apply_overrides(&mut self, page: Option<&str>, no_animations: bool) -> Result<(), AppError> {
        if let Some(page) = page {
            let page: PageId = page.parse()?;
            self.start_page = page.to_string();
        }
        if no_animations {
            self.animations = false;
        }
        Ok(())
    }

    /// Resolve the configured start page. Unknown names fall back to home.
    ///
    pub fn resolve_start_page(&self) -> PageId {
        match self.start_page.parse::<PageId>() {
            Ok(page) => page,
            Err(e) => {
                warn!("{}, starting on the home page", e);
                PageId::Home
            }
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
