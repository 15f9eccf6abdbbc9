//! Expose the merge to WebAssembly so the browser client runs the same engine
//! as the server.
use wasm_bindgen::prelude::*;

use crate::{MergeConfig, MergedText};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::merge_text`.
#[wasm_bindgen(js_name = mergeText)]
#[must_use]
pub fn merge_text(original: &str, current: &str, proposed: &str) -> JsMergedText {
    set_panic_hook();

    crate::merge_text(original, current, proposed).into()
}

/// WASM wrapper around `crate::merge_text_with_config` for tuning when
/// conflicting changes are merged at a finer granularity.
///
/// # Errors
///
/// If `similarity_threshold` is not within `[0, 1]`.
#[wasm_bindgen(js_name = mergeTextWithThreshold)]
pub fn merge_text_with_threshold(
    original: &str,
    current: &str,
    proposed: &str,
    similarity_threshold: f64,
) -> Result<JsMergedText, JsError> {
    set_panic_hook();

    let config = MergeConfig::default().with_similarity_threshold(similarity_threshold)?;

    Ok(crate::merge_text_with_config(original, current, proposed, &config).into())
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Wrapper type to expose `MergedText` to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsMergedText {
    text: String,
    discarded: Vec<String>,
}

#[wasm_bindgen]
impl JsMergedText {
    #[must_use]
    pub fn text(&self) -> String { self.text.clone() }

    #[must_use]
    pub fn discarded(&self) -> Vec<String> { self.discarded.clone() }

    #[wasm_bindgen(js_name = hasConflicts)]
    #[must_use]
    pub fn has_conflicts(&self) -> bool { !self.discarded.is_empty() }
}

impl From<MergedText> for JsMergedText {
    fn from(merged: MergedText) -> Self {
        let (text, discarded) = merged.into_parts();

        JsMergedText { text, discarded }
    }
}
