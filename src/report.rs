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

//! Output for the two run modes
//!
//! - **validation**: one banner line with the number of keybindings found
//! - **key**: one `<key+Modifiers> <description>` line per keybinding, ready
//!   to be piped into a menu such as rofi or dmenu
//!
//! Both work on a table that has already passed validation.

use std::fmt;

use clap::ValueEnum;

use crate::config::HelperConfig;
use crate::core::KeybindingTable;

/// What to produce from the keybinding table
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    /// Check the keybindings and report how many were found
    #[default]
    Validation,
    /// List keybindings as "<key+Modifiers> <description>"
    Key,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Validation => write!(f, "validation"),
            Mode::Key => write!(f, "key"),
        }
    }
}

/// Success banner for validation mode
pub fn validation_banner(count: usize, file_name: &str) -> String {
    format!("✅ Validation of {} keybindings in {} succeeded!!!", count, file_name)
}

/// Listing lines in encounter order
///
/// Keys carrying the special prefix are left out unless
/// `show_special_keys` is set.
pub fn listing_lines(table: &KeybindingTable, config: &HelperConfig) -> Vec<String> {
    table
        .iter()
        .filter(|entry| {
            config.show_special_keys || !entry.key_combo.is_special(&config.special_prefix)
        })
        .map(|entry| entry.to_string())
        .collect()
}

/// Process exit status after a fatal error
pub const FAILURE_EXIT_CODE: i32 = 1;

/// The single diagnostic line printed on stderr when a run fails
///
/// The whole error chain is joined with `: ` and any line break inside it
/// is folded into a space, so the output is always exactly one line.
pub fn failure_line(error: &anyhow::Error) -> String {
    format!("{:#}", error)
        .lines()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lines to print for the selected mode
pub fn render(
    mode: Mode,
    table: &KeybindingTable,
    config: &HelperConfig,
    file_name: &str,
) -> Vec<String> {
    match mode {
        Mode::Validation => vec![validation_banner(table.len(), file_name)],
        Mode::Key => listing_lines(table, config),
    }
}
