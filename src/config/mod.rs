// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Settings and read-only access to the window manager config source.
//!
//! - **`HelperConfig`**: marker token and special-key handling, fixed at
//!   build time through the constants below
//! - **`ConfigFile`**: locates the config source and loads its keybinding
//!   table in one go
//!
//! # Example
//!
//! ```no_run
//! use wm_keybind_helper::config::{expand_path, ConfigFile, HelperConfig, DEFAULT_CONFIG_PATH};
//! use std::path::Path;
//!
//! let path = expand_path(Path::new(DEFAULT_CONFIG_PATH))?;
//! let file = ConfigFile::new(path)?;
//! let table = file.load_table(&HelperConfig::default())?;
//! println!("Found {} keybindings", table.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::{parse_keybindings, KeybindingTable};

pub mod error;

pub use error::ConfigError;

/// Token opening a keybinding comment
pub const DEFAULT_MARKER: &str = "/*d*";

/// Whether keys with the special prefix show up in the listing
pub const SHOW_SPECIAL_KEYS: bool = false;

/// Prefix of vendor-specific key names (media keys and the like)
pub const SPECIAL_PREFIX: &str = "XF86XK_";

/// Where the dwm config source lives unless told otherwise
pub const DEFAULT_CONFIG_PATH: &str = "~/git/dwm/config.h";

/// Settings shared by parsing and listing
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HelperConfig {
    /// Token opening a keybinding comment
    pub marker: String,
    /// Show keys carrying `special_prefix` in the listing
    pub show_special_keys: bool,
    /// Prefix identifying special keys
    pub special_prefix: String,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            show_special_keys: SHOW_SPECIAL_KEYS,
            special_prefix: SPECIAL_PREFIX.to_string(),
        }
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// # Errors
///
/// Returns `ConfigError::InvalidPathEncoding` if the path is not UTF-8.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPathEncoding(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Read-only handle on the config source holding keybinding comments.
#[derive(Debug)]
pub struct ConfigFile {
    /// Path to the config source (e.g. dwm's `config.h`).
    config_path: PathBuf,
}

impl ConfigFile {
    /// Creates a handle for the given config file.
    ///
    /// If the config is a symlink, a warning is logged but the operation
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the config file doesn't exist.
    pub fn new(config_path: PathBuf) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::NotFound(config_path));
        }

        if config_path.read_link().is_ok() {
            warn!("Config file is a symlink: {}", config_path.display());
        }

        Ok(Self { config_path })
    }

    /// Path this handle reads from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// File name shown in the validation banner (e.g. `config.h`).
    pub fn file_name(&self) -> String {
        self.config_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.config_path.display().to_string())
    }

    /// Reads the whole config source as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read.
    pub fn read_config(&self) -> Result<String, ConfigError> {
        Ok(fs::read_to_string(&self.config_path)?)
    }

    /// Reads the config source and builds its keybinding table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` on read failure and `ConfigError::Parse`
    /// for the first invalid keybinding comment.
    pub fn load_table(&self, config: &HelperConfig) -> Result<KeybindingTable, ConfigError> {
        let content = self.read_config()?;
        debug!(path = %self.config_path.display(), bytes = content.len(), "Read config");

        Ok(parse_keybindings(&content, config)?)
    }
}

#[cfg(test)]
mod tests;
