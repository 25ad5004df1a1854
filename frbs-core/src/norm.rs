//! T-norm / t-conorm operators for compatibility and aggregation.
//!
//! The t-norm folds per-variable membership degrees into one antecedent
//! compatibility value; the t-conorm folds per-rule contributions into one
//! per-class score. Defaults are `Product` / `Sum` — the pair the classic
//! Wang-Mendel classifier runs with. `Minimum` / `Maximum` are the usual
//! alternative pair.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conjunction operator over membership degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TNorm {
    /// Multiply all degrees. Any zero degree zeroes the compatibility.
    #[default]
    Product,
    /// Keep the smallest degree.
    Minimum,
}

impl TNorm {
    /// Neutral element of the fold.
    #[inline]
    pub fn identity(self) -> f64 {
        1.0
    }

    /// Fold one more degree into the accumulator.
    #[inline]
    pub fn combine(self, acc: f64, degree: f64) -> f64 {
        match self {
            TNorm::Product => acc * degree,
            TNorm::Minimum => acc.min(degree),
        }
    }
}

/// Disjunction operator over rule contributions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TConorm {
    /// Plain sum. No normalization; scores may exceed 1.
    #[default]
    Sum,
    /// Keep the largest contribution.
    Maximum,
}

impl TConorm {
    /// Neutral element of the fold.
    #[inline]
    pub fn identity(self) -> f64 {
        0.0
    }

    /// Fold one more contribution into the accumulator.
    #[inline]
    pub fn combine(self, acc: f64, value: f64) -> f64 {
        match self {
            TConorm::Sum => acc + value,
            TConorm::Maximum => acc.max(value),
        }
    }
}
