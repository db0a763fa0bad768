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

//! Window Manager Keybinding Helper
//!
//! Validates and lists the keybindings documented in specially marked
//! comments of a window manager config source, such as dwm's `config.h`:
//!
//! ```text
//! /*d* M+S F1 scratchpad keybindings table - toggle */
//! ```
//!
//! # Features
//!
//! - **Validation:** Rejects unknown or repeated modifiers, duplicate
//!   keybindings, and Control+Alt+F<n> (reserved for switching ttys)
//! - **Listing:** Prints `F1+Super+Shift description` lines, key first,
//!   for fuzzy-finding in a menu
//! - **Fail-fast:** The first invalid comment aborts the run
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, parser, validation, translation)
//! - **`config`:** Settings and reading the config source
//! - **`report`:** Output for validation and listing modes
//! - **`logging`:** Diagnostic logging on stderr
//!
//! # Examples
//!
//! ## Parsing a config source
//!
//! ```no_run
//! use wm_keybind_helper::config::HelperConfig;
//! use wm_keybind_helper::core::parse_keybindings;
//!
//! let content = std::fs::read_to_string("/tmp/config.h")?;
//! let table = parse_keybindings(&content, &HelperConfig::default())?;
//! println!("Found {} keybindings", table.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Listing for a menu
//!
//! ```
//! use wm_keybind_helper::config::HelperConfig;
//! use wm_keybind_helper::core::parse_keybindings;
//! use wm_keybind_helper::report::listing_lines;
//!
//! let config = HelperConfig::default();
//! let table = parse_keybindings("/*d* M+S Return spawn terminal */", &config)?;
//! let lines = listing_lines(&table, &config);
//! assert_eq!(lines, vec!["Return+Super+Shift spawn terminal"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod report;

// Re-export commonly used types for convenience
pub use crate::core::{KeyCombo, KeybindingEntry, KeybindingTable, Modifier};
pub use report::Mode;
