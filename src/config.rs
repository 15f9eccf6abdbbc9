#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Two conflicting fragments at least this similar are merged at a finer
/// granularity, less similar ones are both kept.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.25;

/// Decides which side survives a conflict that cannot be split any further.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeafPolicy {
    /// Keep the stored text and discard the proposed one.
    #[default]
    KeepCurrent,
    /// Keep the proposed text and discard the stored one.
    KeepProposed,
}

impl LeafPolicy {
    /// Returns the surviving text and the discarded fragments.
    #[must_use]
    pub fn resolve(self, current: &str, proposed: &str) -> (String, Vec<String>) {
        if current == proposed {
            return (current.to_owned(), Vec::new());
        }

        match self {
            LeafPolicy::KeepCurrent => (current.to_owned(), vec![proposed.to_owned()]),
            LeafPolicy::KeepProposed => (proposed.to_owned(), vec![current.to_owned()]),
        }
    }
}

/// Tunable parameters of the merge.
///
/// ```
/// use note_merge::{LeafPolicy, MergeConfig};
///
/// let config = MergeConfig::default()
///     .with_similarity_threshold(0.5)
///     .unwrap()
///     .with_leaf_policy(LeafPolicy::KeepProposed);
///
/// assert_eq!(config.similarity_threshold(), 0.5);
/// assert!(MergeConfig::default().with_similarity_threshold(1.5).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMergeConfig"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeConfig {
    similarity_threshold: f64,
    leaf_policy: LeafPolicy,
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            leaf_policy: LeafPolicy::default(),
        }
    }
}

/// Unvalidated `MergeConfig` as read by serde, missing fields fall back to
/// the defaults.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default)]
struct RawMergeConfig {
    similarity_threshold: f64,
    leaf_policy: LeafPolicy,
}

#[cfg(feature = "serde")]
impl Default for RawMergeConfig {
    fn default() -> Self {
        let config = MergeConfig::default();

        RawMergeConfig {
            similarity_threshold: config.similarity_threshold,
            leaf_policy: config.leaf_policy,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawMergeConfig> for MergeConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMergeConfig) -> Result<Self, Self::Error> {
        Ok(MergeConfig::default()
            .with_similarity_threshold(raw.similarity_threshold)?
            .with_leaf_policy(raw.leaf_policy))
    }
}

impl MergeConfig {
    /// Sets the similarity ratio from which two conflicting fragments are
    /// merged at a finer granularity instead of keeping both.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSimilarityThreshold` if `threshold` is
    /// NaN or outside of `[0, 1]`.
    pub fn with_similarity_threshold(self, threshold: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidSimilarityThreshold { threshold });
        }

        Ok(MergeConfig {
            similarity_threshold: threshold,
            ..self
        })
    }

    #[must_use]
    pub fn with_leaf_policy(self, leaf_policy: LeafPolicy) -> Self {
        MergeConfig {
            leaf_policy,
            ..self
        }
    }

    #[must_use]
    pub fn similarity_threshold(&self) -> f64 { self.similarity_threshold }

    #[must_use]
    pub fn leaf_policy(&self) -> LeafPolicy { self.leaf_policy }
}
