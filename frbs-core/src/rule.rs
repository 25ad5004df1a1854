//! A single learned fuzzy rule.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One learned rule: the class it votes for and a non-negative strength.
///
/// During the Wang-Mendel scan the weight holds the compatibility degree of
/// the best example seen so far for the rule's antecedent; finalization
/// resets it to 1 before the rule enters the rule base.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuzzyRule {
    /// Class label in `[0, num_classes)`.
    pub consequent: usize,
    /// Rule strength, multiplied into the rule's vote at inference time.
    pub weight: f64,
}

impl FuzzyRule {
    pub fn new(consequent: usize, weight: f64) -> Self {
        Self { consequent, weight }
    }
}
