//! Tuning for the rewriting algorithms.

/// How [`Diagram::normal_form_with_config`](crate::diagram::Diagram::normal_form_with_config)
/// decides that rewriting will not terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CycleDetection {
    /// Remember every diagram visited and fail when one reappears.
    #[default]
    Memo,
    /// Fail once more than this many rewrite steps have been taken.
    StepLimit(usize),
}

/// Options for normalization.
///
/// ```rust
/// use string_diagrams::prelude::*;
///
/// let config = RewriteConfig::default();
/// assert!(!config.prefer_left_moves);
/// assert_eq!(config.cycle_detection, CycleDetection::Memo);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewriteConfig {
    /// Swap boxes whose lower member lies left of the upper one, rather than the right-of case.
    pub prefer_left_moves: bool,
    pub cycle_detection: CycleDetection,
}

impl RewriteConfig {
    pub fn with_prefer_left_moves(self, prefer_left_moves: bool) -> Self {
        RewriteConfig {
            prefer_left_moves,
            ..self
        }
    }

    pub fn with_step_limit(self, limit: usize) -> Self {
        RewriteConfig {
            cycle_detection: CycleDetection::StepLimit(limit),
            ..self
        }
    }
}
