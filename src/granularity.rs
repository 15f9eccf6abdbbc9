mod line_splitter;
mod sentence_splitter;
mod word_splitter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::{
    line_splitter::line_splitter, sentence_splitter::sentence_splitter,
    word_splitter::word_splitter,
};

/// The levels at which a note is split into units for merging, from the
/// coarsest to the finest.
///
/// Conflicts found at one level are resolved by merging the conflicting units
/// again at the next finer level. `Sentence` is the only terminal level.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Granularity {
    /// A whole note, split into lines.
    File,
    /// A single line, split into sentences.
    Paragraph,
    /// A single sentence, split into words.
    Sentence,
}

struct SplitStrategy {
    split: fn(&str) -> Vec<&str>,
    separator: &'static str,
}

const FILE_STRATEGY: SplitStrategy = SplitStrategy {
    split: line_splitter,
    separator: "\n",
};

const PARAGRAPH_STRATEGY: SplitStrategy = SplitStrategy {
    split: sentence_splitter,
    separator: "",
};

const SENTENCE_STRATEGY: SplitStrategy = SplitStrategy {
    split: word_splitter,
    separator: "",
};

impl Granularity {
    /// All levels, from the coarsest to the finest.
    pub const ALL: [Granularity; 3] = [
        Granularity::File,
        Granularity::Paragraph,
        Granularity::Sentence,
    ];

    /// Returns the next finer level, or `None` for the terminal level.
    #[must_use]
    pub fn finer(self) -> Option<Self> {
        match self {
            Granularity::File => Some(Granularity::Paragraph),
            Granularity::Paragraph => Some(Granularity::Sentence),
            Granularity::Sentence => None,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool { self.finer().is_none() }

    /// Whether `join` puts a separator between units. Units of levels without
    /// one carry their own delimiters.
    #[must_use]
    pub fn has_separator(self) -> bool { !self.strategy().separator.is_empty() }

    /// Splits `text` into the units of this level.
    /// `self.join(&self.split(text)) == text` holds for any text.
    #[must_use]
    pub fn split(self, text: &str) -> Vec<&str> { (self.strategy().split)(text) }

    /// Joins units of this level back into a single text.
    #[must_use]
    pub fn join<S>(self, units: &[S]) -> String
    where
        S: AsRef<str>,
    {
        let separator = self.strategy().separator;
        let mut result = String::with_capacity(
            units.iter().map(|unit| unit.as_ref().len() + separator.len()).sum(),
        );

        for (i, unit) in units.iter().enumerate() {
            if i > 0 {
                result.push_str(separator);
            }
            result.push_str(unit.as_ref());
        }

        result
    }

    fn strategy(self) -> &'static SplitStrategy {
        match self {
            Granularity::File => &FILE_STRATEGY,
            Granularity::Paragraph => &PARAGRAPH_STRATEGY,
            Granularity::Sentence => &SENTENCE_STRATEGY,
        }
    }
}
