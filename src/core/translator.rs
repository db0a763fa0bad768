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

//! Modifier code translation for display
//!
//! Turns a key name and a canonical modifier string such as `AS` into
//! `F1+Alt+Shift`. The key comes first so that fuzzy-finding in a menu
//! matches on the key before the modifiers.

use crate::core::types::{Modifier, MODIFIER_SEPARATOR, NO_MODIFIER};

/// Builds the display string for a key and its canonical modifiers
///
/// - `"0"` yields the key name unchanged
/// - otherwise each code is replaced by its descriptive name, in the
///   order given, and appended after the key
///
/// Codes outside the modifier alphabet are kept as written.
///
/// # Example
/// ```
/// use wm_keybind_helper::core::translator::translate_modifiers;
///
/// assert_eq!(translate_modifiers("U", "CA"), "U+Control+Alt");
/// assert_eq!(translate_modifiers("U", "0"), "U");
/// ```
pub fn translate_modifiers(key: &str, modifiers: &str) -> String {
    if modifiers == NO_MODIFIER {
        return key.to_string();
    }

    let names = modifiers
        .chars()
        .map(|code| match Modifier::from_code(code) {
            Some(modifier) => modifier.name().to_string(),
            None => code.to_string(),
        })
        .collect::<Vec<_>>()
        .join(&MODIFIER_SEPARATOR.to_string());

    format!("{}{}{}", key, MODIFIER_SEPARATOR, names)
}
