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

//! Keybinding table with duplicate detection
//!
//! Entries are indexed by their canonical `KeyCombo` in an `IndexMap`, so
//! lookups stay O(1) while iteration follows the order the comments appear
//! in the source file. The table refuses a second entry for a combo that
//! is already present instead of collecting both.

use indexmap::map::Values;
use indexmap::IndexMap;

use crate::core::types::{KeyCombo, KeybindingEntry};
use crate::core::validator::ValidationError;

/// Validated keybindings in encounter order
#[derive(Clone, Debug, Default)]
pub struct KeybindingTable {
    /// Maps each canonical KeyCombo to the single entry using it.
    entries: IndexMap<KeyCombo, KeybindingEntry>,
}

impl KeybindingTable {
    /// Creates a new empty table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds an entry unless its combo is already taken.
    ///
    /// `source_line` is the text echoed in the error when the combo is a
    /// duplicate. Time complexity: O(1) average case.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateKeybinding` when an earlier line
    /// registered the same canonical combo.
    pub fn try_insert(
        &mut self,
        entry: KeybindingEntry,
        source_line: &str,
    ) -> Result<(), ValidationError> {
        if self.entries.contains_key(&entry.key_combo) {
            return Err(ValidationError::DuplicateKeybinding {
                line: entry.line_number,
                text: source_line.to_string(),
            });
        }

        self.entries.insert(entry.key_combo.clone(), entry);
        Ok(())
    }

    /// Checks if a combo is already registered.
    pub fn contains(&self, key_combo: &KeyCombo) -> bool {
        self.entries.contains_key(key_combo)
    }

    /// Looks up the entry registered for a combo.
    pub fn get(&self, key_combo: &KeyCombo) -> Option<&KeybindingEntry> {
        self.entries.get(key_combo)
    }

    /// Iterates entries in the order they were inserted.
    pub fn iter(&self) -> Values<'_, KeyCombo, KeybindingEntry> {
        self.entries.values()
    }

    /// Returns the number of keybindings in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a KeybindingTable {
    type Item = &'a KeybindingEntry;
    type IntoIter = Values<'a, KeyCombo, KeybindingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
