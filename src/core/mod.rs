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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the data structures and algorithms for keybinding
//! comments, including:
//! - Type definitions for modifiers and key combinations
//! - Comment extraction with loose and strict patterns
//! - Modifier, reserved-combination and duplicate validation
//! - Modifier translation for display
//!
//! All business logic is isolated from file and terminal I/O so it can be
//! tested on plain strings.

pub mod parser;
pub mod table;
pub mod translator;
pub mod types;
pub mod validator;

pub use parser::{parse_keybindings, LineParser, ParseError};
pub use table::KeybindingTable;
pub use types::*;
pub use validator::ValidationError;

#[cfg(test)]
mod tests;
