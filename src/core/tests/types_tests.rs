use crate::core::types::{KeyCombo, Modifier};

#[test]
fn test_key_combo_normalization() {
    // Test that order doesn't matter
    let combo1 = KeyCombo::new(vec![Modifier::Alt, Modifier::Shift], "F1");
    let combo2 = KeyCombo::new(vec![Modifier::Shift, Modifier::Alt], "F1");

    assert_eq!(combo1, combo2);
    assert_eq!(combo1.canonical_modifiers(), "AS");
}

#[test]
fn test_key_combo_dedup() {
    let combo = KeyCombo::new(vec![Modifier::Alt, Modifier::Alt, Modifier::Control], "k");
    assert_eq!(combo.modifiers, vec![Modifier::Alt, Modifier::Control]);
}

#[test]
fn test_key_name_is_case_sensitive() {
    let lower = KeyCombo::new(vec![Modifier::Super], "k");
    let upper = KeyCombo::new(vec![Modifier::Super], "K");

    assert_ne!(lower, upper);
}

#[test]
fn test_canonical_order_is_lexicographic() {
    let combo = KeyCombo::new(
        vec![Modifier::Shift, Modifier::Super, Modifier::Control, Modifier::Alt],
        "Return",
    );
    assert_eq!(combo.canonical_modifiers(), "ACMS");
}

#[test]
fn test_key_combo_display() {
    let combo = KeyCombo::new(vec![Modifier::Control, Modifier::Alt], "k");
    assert_eq!(format!("{}", combo), "k+Alt+Control");
}

#[test]
fn test_exact_modifiers() {
    let combo = KeyCombo::new(vec![Modifier::Alt, Modifier::Control], "F5");

    assert!(combo.has_exact_modifiers(&[Modifier::Control, Modifier::Alt]));
    assert!(!combo.has_exact_modifiers(&[Modifier::Control]));
    assert!(!combo.has_exact_modifiers(&[Modifier::Control, Modifier::Alt, Modifier::Shift]));
}

#[test]
fn test_special_prefix() {
    let special = KeyCombo::new(Vec::new(), "XF86XK_AudioMute");
    let ordinary = KeyCombo::new(Vec::new(), "Print");

    assert!(special.is_special("XF86XK_"));
    assert!(!ordinary.is_special("XF86XK_"));
    // An empty prefix never marks anything as special
    assert!(!special.is_special(""));
}
