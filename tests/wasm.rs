#![cfg(feature = "wasm")]

use note_merge::wasm::*;
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_merge_text() {
    let result = merge_text("Hello world", "Hello there world", "Hello brave world");

    assert_eq!(result.text(), "Hello there brave world");
    assert!(result.discarded().is_empty());
    assert!(!result.has_conflicts());
}

#[wasm_bindgen_test(unsupported = test)]
fn test_merge_text_with_conflict() {
    let result = merge_text("The fox.", "The quick fox.", "The quiet fox.");

    assert_eq!(result.text(), "The quick fox.");
    assert_eq!(result.discarded(), vec!["The quiet fox.".to_owned()]);
    assert!(result.has_conflicts());
}

#[wasm_bindgen_test(unsupported = test)]
fn test_merge_text_with_threshold() {
    let result = merge_text_with_threshold("The fox.", "The quick fox.", "The quiet fox.", 1.0)
        .unwrap_or_default();

    assert_eq!(result.text(), "The quick fox.\nThe quiet fox.");
    assert!(!result.has_conflicts());
}
