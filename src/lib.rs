mod config;
mod diff;
mod errors;
mod granularity;
mod merge;
mod similarity;
mod utils;

pub use config::{DEFAULT_SIMILARITY_THRESHOLD, LeafPolicy, MergeConfig};
pub use diff::{DiffKind, DiffOperation, DiffUnit, diff};
pub use errors::ConfigError;
pub use granularity::Granularity;
pub use merge::{
    MergedText, merge_text, merge_text_with_config, resolve_conflict, three_way_merge,
};
pub use similarity::{levenshtein, similarity};

#[cfg(feature = "wasm")]
pub mod wasm;
