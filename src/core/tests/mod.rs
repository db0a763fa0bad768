//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Comment extraction and full-file parsing tests
//! - Validation rule tests
//! - Keybinding table tests
//! - Type tests (Modifier, KeyCombo, etc.)

#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod validator_tests;
