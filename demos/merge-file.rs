use std::{env, fs, process};

use note_merge::merge_text;

/// Merges three versions of a note: current, original, and proposed.
/// Similar to git merge-file (https://git-scm.com/docs/git-merge-file) except
/// that it never writes conflict markers: fragments that could not be merged
/// are printed to stderr instead.
///
/// Run it with:
/// `cargo run --example merge-file current.md original.md proposed.md [output.md]`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 || args.len() > 5 {
        eprintln!("Usage: merge-file <current> <original> <proposed> [output]");
        process::exit(2);
    }

    let current_file = &args[1];
    let original_file = &args[2];
    let proposed_file = &args[3];
    let output_file = args.get(4);

    let current_content = read(current_file);
    let original_content = read(original_file);
    let proposed_content = read(proposed_file);

    let merged = merge_text(&original_content, &current_content, &proposed_content);

    if let Some(output_path) = output_file {
        if let Err(e) = fs::write(output_path, merged.text()) {
            eprintln!("Error writing to {output_path}: {e}");
            process::exit(2);
        }
    } else {
        print!("{}", merged.text());
    }

    for fragment in merged.discarded() {
        eprintln!("Discarded: {fragment}");
    }

    if merged.has_conflicts() {
        process::exit(1);
    }
}

fn read(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        process::exit(2);
    })
}
