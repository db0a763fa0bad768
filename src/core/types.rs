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

//! src/core/types.rs
//!
//! Core type definitions for keybinding comments
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Modifier`: One of the four single-letter modifier codes (M, C, A, S)
//! - `KeyCombo`: A canonical modifier set plus a key name
//! - `KeybindingEntry`: A validated keybinding with its description
//!
//! `KeyCombo` is the identity used by the keybinding table, so two
//! comments that spell the same modifiers in a different order
//! (`A+S` and `S+A`) produce equal combos.

use std::fmt;

use crate::core::translator::translate_modifiers;

/// Code used in a modifier field to mean "no modifier"
pub const NO_MODIFIER: &str = "0";

/// `NO_MODIFIER` as it appears inside a modifier field
pub const NO_MODIFIER_CODE: char = '0';

/// Separator between modifier codes in a modifier field
pub const MODIFIER_SEPARATOR: char = '+';

/// Keyboard modifier keys
///
/// Each modifier is written as a single uppercase letter in the
/// keybinding comment:
/// - `M` → Super (the Mod/Windows key)
/// - `C` → Control
/// - `A` → Alt
/// - `S` → Shift
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Modifier {
    /// Super/Windows key (MODKEY)
    Super,
    /// Control key
    Control,
    /// Alt key
    Alt,
    /// Shift key
    Shift,
}

impl Modifier {
    /// Maps a single-letter modifier code to its modifier
    ///
    /// Returns `None` for anything outside the alphabet, including the
    /// sentinel `0` which is not a modifier itself.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(Modifier::Super),
            'C' => Some(Modifier::Control),
            'A' => Some(Modifier::Alt),
            'S' => Some(Modifier::Shift),
            _ => None,
        }
    }

    /// The single-letter code used in keybinding comments
    pub fn code(self) -> char {
        match self {
            Modifier::Super => 'M',
            Modifier::Control => 'C',
            Modifier::Alt => 'A',
            Modifier::Shift => 'S',
        }
    }

    /// Descriptive name shown in the listing
    pub fn name(self) -> &'static str {
        match self {
            Modifier::Super => "Super",
            Modifier::Control => "Control",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A combination of modifier keys and a key name
///
/// Implements Hash and Eq for use as the keybinding table key.
///
/// # Normalisation
/// Modifiers are deduplicated and sorted by their code letter, which
/// gives the lexicographic order A < C < M < S. An empty modifier list
/// stands for the sentinel `0`.
///
/// Unlike the modifiers, the key name is kept verbatim: `F1` and `f1`
/// are different keys as far as the table is concerned.
///
/// # Example
/// ```
/// use wm_keybind_helper::core::{KeyCombo, Modifier};
///
/// let combo = KeyCombo::new(vec![Modifier::Shift, Modifier::Alt], "F1");
/// assert_eq!(combo.canonical_modifiers(), "AS");
/// assert_eq!(combo.to_string(), "F1+Alt+Shift");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct KeyCombo {
    /// Modifier keys, sorted by code with duplicates removed
    pub modifiers: Vec<Modifier>,

    /// Key name (e.g., "F1", "k", "XF86XK_AudioMute")
    pub key: String,
}

impl KeyCombo {
    /// Create a new KeyCombo with normalised modifiers
    pub fn new(mut modifiers: Vec<Modifier>, key: &str) -> Self {
        modifiers.sort_by_key(|m| m.code());
        modifiers.dedup();

        Self {
            modifiers,
            key: key.to_string(),
        }
    }

    /// Canonical modifier string: sorted codes without separators,
    /// or `0` when there are no modifiers
    pub fn canonical_modifiers(&self) -> String {
        if self.modifiers.is_empty() {
            NO_MODIFIER.to_string()
        } else {
            self.modifiers.iter().map(|m| m.code()).collect()
        }
    }

    /// Whether this combo uses exactly the given modifiers (in any order)
    pub fn has_exact_modifiers(&self, modifiers: &[Modifier]) -> bool {
        let mut expected = modifiers.to_vec();
        expected.sort_by_key(|m| m.code());
        expected.dedup();
        self.modifiers == expected
    }

    /// Whether the key name carries the given special-key prefix
    pub fn is_special(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.key.starts_with(prefix)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", translate_modifiers(&self.key, &self.canonical_modifiers()))
    }
}

/// A validated keybinding taken from a marked comment
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeybindingEntry {
    /// The key combination that triggers this binding
    pub key_combo: KeyCombo,

    /// Free-text description from the comment
    pub description: String,

    /// 1-based line number of the comment in the source file
    pub line_number: usize,
}

impl fmt::Display for KeybindingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key_combo, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_display() {
        assert_eq!(format!("{}", Modifier::Super), "Super");
        assert_eq!(format!("{}", Modifier::Control), "Control");
    }

    #[test]
    fn test_modifier_codes() {
        for code in ['M', 'C', 'A', 'S'] {
            let modifier = Modifier::from_code(code).unwrap();
            assert_eq!(modifier.code(), code);
        }
        assert_eq!(Modifier::from_code('0'), None);
        assert_eq!(Modifier::from_code('m'), None);
    }

    #[test]
    fn test_no_modifier_renders_sentinel() {
        let combo = KeyCombo::new(Vec::new(), "XF86XK_AudioMute");
        assert_eq!(combo.canonical_modifiers(), "0");
        assert_eq!(format!("{}", combo), "XF86XK_AudioMute");
    }

    #[test]
    fn test_entry_display() {
        let entry = KeybindingEntry {
            key_combo: KeyCombo::new(vec![Modifier::Super, Modifier::Shift], "F1"),
            description: "scratchpad - toggle".to_string(),
            line_number: 3,
        };

        assert_eq!(format!("{}", entry), "F1+Super+Shift scratchpad - toggle");
    }
}
