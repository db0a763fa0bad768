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

use regex::Regex;

use crate::config::HelperConfig;
use crate::core::{
    parser::{parse_keybindings, ParseError},
    types::Modifier,
    validator::{canonicalize_modifiers, is_reserved_combination, FUNCTION_KEY_PATTERN},
    ValidationError,
};

/// Parses the content and returns the validation error it must produce
fn expect_error(content: &str) -> ValidationError {
    match parse_keybindings(content, &HelperConfig::default()) {
        Err(ParseError::Validation(error)) => error,
        other => panic!("Expected a validation error, got {:?}", other),
    }
}

#[test]
fn test_invalid_modifiers() {
    for modifiers in ["D", "0+1", "C+0", "0+A", "0+0", "0+", "+0"] {
        let line = format!("/*d* {} F1 This is the a keybinding */", modifiers);
        let error = expect_error(&line);

        assert!(
            matches!(error, ValidationError::InvalidModifier { .. }),
            "Modifiers '{}' should be invalid, got {:?}",
            modifiers,
            error
        );
        assert_eq!(error.text(), line);
        assert!(error
            .to_string()
            .starts_with("Found the following line containing invalid modifier/s"));
    }
}

#[test]
fn test_invalid_modifier_wins_over_malformed_line() {
    // The strict pattern would never match this line
    let error = expect_error("/*d* X+Y this line is not even closed");
    assert!(matches!(error, ValidationError::InvalidModifier { line: 1, .. }));
}

#[test]
fn test_lowercase_modifier_is_invalid() {
    let error = expect_error("/*d* m k lowercase */");
    assert!(matches!(error, ValidationError::InvalidModifier { .. }));
}

#[test]
fn test_duplicate_modifiers() {
    let error = expect_error("/*d* M+S+C+M XF86XK_AudioMute This is the a keybinding */");
    assert!(matches!(error, ValidationError::DuplicateModifier { .. }));

    let error = expect_error("/*d* A+S+A k repeated alt */");
    assert!(matches!(error, ValidationError::DuplicateModifier { .. }));
}

#[test]
fn test_reserved_keybinding() {
    for modifiers in ["C+A", "A+C"] {
        let error = expect_error(&format!("/*d* {} F5 This is the a keybinding */", modifiers));
        assert!(
            matches!(error, ValidationError::ReservedKeybinding { .. }),
            "{} F5 should be reserved",
            modifiers
        );
    }
}

#[test]
fn test_reserved_keybinding_function_key_shapes() {
    for key in ["F1", "f1", "F9", "F12", "f12"] {
        let error = expect_error(&format!("/*d* C+A {} switch tty */", key));
        assert!(matches!(error, ValidationError::ReservedKeybinding { .. }));
    }
}

#[test]
fn test_control_alt_with_other_keys_is_allowed() {
    let config = "/*d* C+A k kill */\n/*d* C+A F123 not a function key */\n/*d* C+A+S F1 extra shift */";
    let table = parse_keybindings(config, &HelperConfig::default()).unwrap();
    assert_eq!(table.len(), 3);
}

#[test]
fn test_is_reserved_combination() {
    let function_key = Regex::new(FUNCTION_KEY_PATTERN).unwrap();

    assert!(is_reserved_combination(&canonicalize_modifiers("A+C", "F2"), &function_key));
    assert!(!is_reserved_combination(&canonicalize_modifiers("C", "F2"), &function_key));
    assert!(!is_reserved_combination(&canonicalize_modifiers("A+C", "Fn"), &function_key));
}

#[test]
fn test_duplicate_keybinding() {
    let config = "/*d* A+S F1 This is the first keybinding */\n\n\
                  /*d* C+A k This is the second keybinding */\n\n\
                  /*d* A+C g This is the third keybinding */\n\n\
                  /*d* A+S F1 This is the fourth keybinding */";

    let error = expect_error(config);
    assert_eq!(
        error,
        ValidationError::DuplicateKeybinding {
            line: 7,
            text: "/*d* A+S F1 This is the fourth keybinding */".to_string(),
        }
    );
}

#[test]
fn test_duplicate_keybinding_across_modifier_order() {
    let error = expect_error("/*d* S+A q first */\n/*d* A+S q second */");
    assert!(matches!(error, ValidationError::DuplicateKeybinding { line: 2, .. }));
}

#[test]
fn test_first_violation_wins() {
    // Line 2 is reserved, line 3 is invalid: only line 2 is reported
    let config = "/*d* M k fine */\n/*d* C+A F3 tty */\n/*d* Z k bad */";
    let error = expect_error(config);
    assert!(matches!(error, ValidationError::ReservedKeybinding { line: 2, .. }));
}

#[test]
fn test_canonicalize_modifiers() {
    let combo = canonicalize_modifiers("S+A", "F1");
    assert_eq!(combo.modifiers, vec![Modifier::Alt, Modifier::Shift]);
    assert_eq!(combo.canonical_modifiers(), canonicalize_modifiers("A+S", "F1").canonical_modifiers());

    let combo = canonicalize_modifiers("0", "XF86XK_AudioMute");
    assert!(combo.modifiers.is_empty());
    assert_eq!(combo.canonical_modifiers(), "0");
}
