#![no_main]

use libfuzzer_sys::fuzz_target;
use note_merge::merge_text;

fuzz_target!(|texts: (String, String, String)| {
    let (original, current, proposed) = texts;

    let _ = merge_text(&original, &current, &proposed);

    assert_eq!(merge_text(&original, &original, &original).text(), original);
    assert_eq!(merge_text(&original, &original, &proposed).text(), proposed);
    assert_eq!(merge_text(&original, &current, &original).text(), current);
});
