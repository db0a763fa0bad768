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

//! Keybinding comment validation
//!
//! Each marked comment goes through these checks, in order:
//! 1. Modifier alphabet (`M`, `C`, `A`, `S`, or `0` on its own)
//! 2. No modifier repeated within one field
//! 3. Canonicalisation (dedup + sort)
//! 4. Control+Alt+F<n> is reserved for switching virtual terminals
//! 5. No two comments may describe the same canonical combo
//!
//! Check 5 needs the table built so far and lives in `core/table.rs`.
//! Every check returns a typed error carrying the offending line; the
//! first failure aborts the whole scan.

use std::collections::HashSet;

use regex::Regex;
use thiserror::Error;

use crate::core::types::{KeyCombo, Modifier, MODIFIER_SEPARATOR, NO_MODIFIER, NO_MODIFIER_CODE};

/// Validation errors
///
/// Every variant carries the 1-based line number and the original text of
/// the offending line so the diagnostic points straight at the source.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// Modifier field contains a character outside the alphabet,
    /// or combines `0` with another modifier
    #[error("Found the following line containing invalid modifier/s (line {line}): {text}")]
    InvalidModifier { line: usize, text: String },

    /// Same modifier listed more than once in one field
    #[error("Found the following line with duplicate modifiers included (line {line}): {text}")]
    DuplicateModifier { line: usize, text: String },

    /// Control+Alt with a function key
    #[error("Found the following line using a reserved keybinding (line {line}): {text}")]
    ReservedKeybinding { line: usize, text: String },

    /// Canonical combo already registered by an earlier line
    #[error("Found the following line with a duplicate keybinding (line {line}): {text}")]
    DuplicateKeybinding { line: usize, text: String },
}

impl ValidationError {
    /// 1-based line number of the offending comment
    pub fn line(&self) -> usize {
        match self {
            ValidationError::InvalidModifier { line, .. }
            | ValidationError::DuplicateModifier { line, .. }
            | ValidationError::ReservedKeybinding { line, .. }
            | ValidationError::DuplicateKeybinding { line, .. } => *line,
        }
    }

    /// Original text of the offending comment
    pub fn text(&self) -> &str {
        match self {
            ValidationError::InvalidModifier { text, .. }
            | ValidationError::DuplicateModifier { text, .. }
            | ValidationError::ReservedKeybinding { text, .. }
            | ValidationError::DuplicateKeybinding { text, .. } => text,
        }
    }
}

/// Modifier set claimed by the virtual terminal switch (Ctrl+Alt+F<n>)
pub const RESERVED_MODIFIERS: &[Modifier] = &[Modifier::Control, Modifier::Alt];

/// Function key names: `F` or `f` followed by one or two digits
pub const FUNCTION_KEY_PATTERN: &str = r"^[fF]\d{1,2}$";

/// Checks a raw modifier field against the modifier alphabet
///
/// Separators are ignored for the alphabet test: every remaining character
/// must be one of `M`, `C`, `A`, `S` or `0`. The sentinel `0` must make up the
/// whole field, so `0+0`, `0+` and `+0` are rejected as well as `0+A`.
///
/// Returns `false` when the field is invalid.
pub fn check_modifier_alphabet(raw: &str) -> bool {
    let codes: HashSet<char> = raw.chars().filter(|c| *c != MODIFIER_SEPARATOR).collect();

    let all_known = codes
        .iter()
        .all(|c| Modifier::from_code(*c).is_some() || *c == NO_MODIFIER_CODE);

    // `0` only ever stands alone, separators included
    let lone_sentinel = !raw.contains(NO_MODIFIER_CODE) || raw == NO_MODIFIER;

    all_known && lone_sentinel
}

/// Checks that no modifier appears twice in a raw field like `A+S+A`
///
/// Returns `false` when a duplicate is present.
pub fn check_duplicate_modifiers(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split(MODIFIER_SEPARATOR).collect();
    let unique: HashSet<&str> = parts.iter().copied().collect();

    parts.len() == unique.len()
}

/// Turns a raw modifier field into a normalised `KeyCombo`
///
/// `0` maps to an empty modifier list. The field is assumed to have passed
/// `check_modifier_alphabet`; unknown codes are dropped.
pub fn canonicalize_modifiers(raw: &str, key: &str) -> KeyCombo {
    let modifiers = raw
        .split(MODIFIER_SEPARATOR)
        .filter_map(|part| {
            let mut chars = part.chars();
            match (chars.next(), chars.next()) {
                (Some(code), None) => Modifier::from_code(code),
                _ => None,
            }
        })
        .collect();

    KeyCombo::new(modifiers, key)
}

/// Whether a combo uses the reserved Control+Alt+F<n> combination
pub fn is_reserved_combination(combo: &KeyCombo, function_key: &Regex) -> bool {
    combo.has_exact_modifiers(RESERVED_MODIFIERS) && function_key.is_match(&combo.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_modifier_fields() {
        assert!(check_modifier_alphabet("0"));
        assert!(check_modifier_alphabet("M"));
        assert!(check_modifier_alphabet("M+S"));
        assert!(check_modifier_alphabet("M+C+A+S"));
    }

    #[test]
    fn test_invalid_modifier_fields() {
        assert!(!check_modifier_alphabet("D"));
        assert!(!check_modifier_alphabet("0+1"));
        assert!(!check_modifier_alphabet("C+0"));
        assert!(!check_modifier_alphabet("m"));
        assert!(!check_modifier_alphabet("0+A"));
    }

    #[test]
    fn test_sentinel_with_separators_is_invalid() {
        assert!(!check_modifier_alphabet("0+0"));
        assert!(!check_modifier_alphabet("0+"));
        assert!(!check_modifier_alphabet("+0"));
    }

    #[test]
    fn test_duplicate_modifiers() {
        assert!(!check_duplicate_modifiers("A+S+A"));
        assert!(!check_duplicate_modifiers("M+S+C+M"));
        assert!(check_duplicate_modifiers("A+S"));
        assert!(check_duplicate_modifiers("0"));
    }

    #[test]
    fn test_error_accessors() {
        let error = ValidationError::ReservedKeybinding {
            line: 7,
            text: "/*d* C+A F5 tty */".to_string(),
        };

        assert_eq!(error.line(), 7);
        assert_eq!(error.text(), "/*d* C+A F5 tty */");
        assert!(error.to_string().contains("reserved keybinding"));
    }
}
