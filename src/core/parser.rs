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

//! src/core/parser.rs
//!
//! Keybinding comment parser
//!
//! This module scans a window manager config source (e.g. dwm's `config.h`)
//! for comments of the form:
//!
//! ```text
//! /*d* M+S F1 scratchpad keybindings table - toggle */
//! ```
//!
//! - `/*d*` is the marker telling us the comment documents a keybinding
//! - `M+S` are the modifiers (`0` for none)
//! - `F1` is the key
//! - the rest, up to `*/`, is the description
//!
//! Every other line of the file is ignored.
//!
//! # Architecture
//! Two patterns run over each line, in a fixed order:
//! 1. A loose pattern that only picks up the modifier field, so a bad
//!    modifier is reported even when the rest of the line is malformed
//! 2. A strict pattern that matches the whole line and extracts the
//!    modifiers, key and description
//!
//! Validation happens while scanning: the table built so far is threaded
//! through a `try_fold` and the first violation stops the scan.

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::HelperConfig;
use crate::core::table::KeybindingTable;
use crate::core::types::KeybindingEntry;
use crate::core::validator::{
    canonicalize_modifiers, check_duplicate_modifiers, check_modifier_alphabet,
    is_reserved_combination, ValidationError, FUNCTION_KEY_PATTERN,
};

/// Parse errors
#[derive(Debug, Error)]
pub enum ParseError {
    /// A keybinding comment failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The marker could not be turned into a pattern
    #[error("Invalid keybinding pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Fields extracted from a well-formed keybinding comment
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawKeybinding<'a> {
    /// Modifier field as written, e.g. `A+S` or `0`
    pub modifiers: &'a str,
    /// Key name, e.g. `F1`
    pub key: &'a str,
    /// Free-text description
    pub description: &'a str,
}

/// Line classifier for one marker
///
/// Holds the compiled loose, strict and function-key patterns. Build it once
/// and reuse it for every line of a file.
#[derive(Clone, Debug)]
pub struct LineParser {
    marker: String,
    strict: Regex,
    loose: Regex,
    function_key: Regex,
}

impl LineParser {
    /// Compiles the patterns for the given marker (e.g. `/*d*`)
    ///
    /// The marker is matched literally.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Pattern` if a pattern fails to compile.
    pub fn new(marker: &str) -> Result<Self, ParseError> {
        let escaped = regex::escape(marker);

        let strict = Regex::new(&format!(
            r"^\s*{}\s+((?:[MCAS](?:\+[MCAS])*)|0)\s+([\w\-+<>,.]+)\s+(.*?)\s+\*/\s*$",
            escaped
        ))?;
        let loose = Regex::new(&format!(r"^\s*{}\s+(\S+)\s+", escaped))?;
        let function_key = Regex::new(FUNCTION_KEY_PATTERN)?;

        Ok(Self {
            marker: marker.to_string(),
            strict,
            loose,
            function_key,
        })
    }

    /// Loose pre-check: the raw modifier field of any marked line
    ///
    /// Matches lines that the strict pattern would reject, e.g.
    /// `/*d* D F1 ...`, so invalid modifiers are always caught.
    pub fn raw_modifiers<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.loose
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Strict extraction of modifiers, key and description
    ///
    /// Returns `None` for lines that are not well-formed keybinding comments.
    pub fn extract<'a>(&self, line: &'a str) -> Option<RawKeybinding<'a>> {
        let caps = self.strict.captures(line)?;

        Some(RawKeybinding {
            modifiers: caps.get(1)?.as_str(),
            key: caps.get(2)?.as_str(),
            description: caps.get(3)?.as_str(),
        })
    }

    /// Whether the line starts with the marker at all
    pub fn is_marked(&self, line: &str) -> bool {
        line.trim_start().starts_with(&self.marker)
    }

    /// Validates one line and adds it to the table
    ///
    /// Lines without a well-formed keybinding comment are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` the line triggers.
    pub fn parse_line(
        &self,
        line_number: usize,
        line: &str,
        table: &mut KeybindingTable,
    ) -> Result<(), ValidationError> {
        if let Some(raw) = self.raw_modifiers(line) {
            if !check_modifier_alphabet(raw) {
                return Err(ValidationError::InvalidModifier {
                    line: line_number,
                    text: line.to_string(),
                });
            }
        }

        let Some(raw) = self.extract(line) else {
            if self.is_marked(line) {
                warn!(line = line_number, "Skipping malformed keybinding comment: {}", line.trim());
            }
            return Ok(());
        };

        if !check_duplicate_modifiers(raw.modifiers) {
            return Err(ValidationError::DuplicateModifier {
                line: line_number,
                text: line.to_string(),
            });
        }

        let key_combo = canonicalize_modifiers(raw.modifiers, raw.key);

        if is_reserved_combination(&key_combo, &self.function_key) {
            return Err(ValidationError::ReservedKeybinding {
                line: line_number,
                text: line.to_string(),
            });
        }

        debug!(
            line = line_number,
            modifiers = %key_combo.canonical_modifiers(),
            key = %key_combo.key,
            "Found keybinding"
        );

        table.try_insert(
            KeybindingEntry {
                key_combo,
                description: raw.description.to_string(),
                line_number,
            },
            line,
        )
    }
}

/// Parse all keybinding comments in a config source
///
/// # Arguments
/// * `content` - The full config file content
/// * `config` - Settings; only the marker (e.g. `/*d*`) matters here
///
/// # Returns
/// The complete table, or the error raised by the first invalid line.
/// No partial table is ever returned.
///
/// # Example
/// ```
/// use wm_keybind_helper::config::HelperConfig;
/// use wm_keybind_helper::core::parser::parse_keybindings;
///
/// let content = "/*d* M+S F1 scratchpad - toggle */\n{ MODKEY|ShiftMask, XK_F1, togglescratch, {0} },";
/// let table = parse_keybindings(content, &HelperConfig::default())?;
/// assert_eq!(table.len(), 1);
/// # Ok::<(), wm_keybind_helper::core::parser::ParseError>(())
/// ```
pub fn parse_keybindings(
    content: &str,
    config: &HelperConfig,
) -> Result<KeybindingTable, ParseError> {
    let parser = LineParser::new(&config.marker)?;

    content.lines().enumerate().try_fold(
        KeybindingTable::new(),
        |mut table, (index, line)| -> Result<KeybindingTable, ParseError> {
            // Human-readable numbers start at 1
            parser.parse_line(index + 1, line, &mut table)?;
            Ok(table)
        },
    )
}
