//! Fuzzy partitions of a single variable's domain.
//!
//! A partition divides one variable into `k` fuzzy sets. Continuous input
//! variables get `k` triangular sets with peaks evenly spaced across
//! `[min, max]`; each triangle's support reaches exactly to the neighboring
//! peaks, so a value activates at most two adjacent sets. The extreme sets
//! are clamped: membership stays 1 beyond the first/last peak, which keeps
//! evaluation total for values outside the training bounds.
//!
//! The categorical output variable gets `k` crisp indicator sets: a label
//! belongs with degree 1 to its own set and 0 to every other.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FrbsError, Result};

/// A fuzzy partition of one variable.
///
/// Every variant exposes the same capability set — `memberships`,
/// `winning_set`, `len`, `set_label` — so the rule base never branches on
/// the partition kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuzzyPartition {
    /// Triangular sets over a continuous domain.
    Triangular {
        min: f64,
        max: f64,
        /// Peak of each set, ascending, evenly spaced over `[min, max]`.
        centers: Vec<f64>,
    },
    /// Crisp indicator sets over class labels `0..classes`.
    Crisp { classes: usize },
}

impl FuzzyPartition {
    /// Triangular partition of `[min, max]` into `sets` fuzzy sets.
    ///
    /// `sets == 1` degenerates to a single set with membership 1 across the
    /// whole domain.
    pub fn triangular(min: f64, max: f64, sets: usize) -> Result<Self> {
        if sets == 0 {
            return Err(FrbsError::InvalidParameter(
                "partition needs at least one fuzzy set".into(),
            ));
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(FrbsError::InvalidParameter(format!(
                "invalid domain bounds [{min}, {max}]"
            )));
        }
        let centers = if sets == 1 {
            vec![(min + max) / 2.0]
        } else {
            let step = (max - min) / (sets - 1) as f64;
            (0..sets).map(|i| min + step * i as f64).collect()
        };
        Ok(FuzzyPartition::Triangular { min, max, centers })
    }

    /// Crisp partition over `classes` class labels.
    pub fn crisp(classes: usize) -> Result<Self> {
        if classes == 0 {
            return Err(FrbsError::InvalidParameter(
                "crisp partition needs at least one class".into(),
            ));
        }
        Ok(FuzzyPartition::Crisp { classes })
    }

    /// Number of fuzzy sets (or classes) in the partition.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            FuzzyPartition::Triangular { centers, .. } => centers.len(),
            FuzzyPartition::Crisp { classes } => *classes,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // constructors reject k == 0
    }

    /// Membership degree of `value` in set `set`, in `[0, 1]`.
    ///
    /// For triangular partitions this is the triangle with peak at
    /// `centers[set]` and feet at the neighboring peaks; the first and last
    /// sets clamp to 1 beyond their peak. For crisp partitions it is the
    /// indicator of `value.round() == set`.
    pub fn membership(&self, set: usize, value: f64) -> f64 {
        match self {
            FuzzyPartition::Triangular { centers, .. } => {
                let k = centers.len();
                if k == 1 {
                    return 1.0;
                }
                let peak = centers[set];
                if value <= peak {
                    if set == 0 {
                        1.0
                    } else {
                        let foot = centers[set - 1];
                        if value <= foot {
                            0.0
                        } else {
                            (value - foot) / (peak - foot)
                        }
                    }
                } else if set == k - 1 {
                    1.0
                } else {
                    let foot = centers[set + 1];
                    if value >= foot {
                        0.0
                    } else {
                        (foot - value) / (foot - peak)
                    }
                }
            }
            FuzzyPartition::Crisp { classes } => {
                let label = value.round();
                if label >= 0.0 && label < *classes as f64 && label as usize == set {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Membership degree of `value` in every set.
    pub fn memberships(&self, value: f64) -> Vec<f64> {
        (0..self.len()).map(|s| self.membership(s, value)).collect()
    }

    /// Index and degree of the maximal-membership set.
    ///
    /// Ties go to the lowest index.
    pub fn winning_set(&self, value: f64) -> (usize, f64) {
        let mut winner = 0;
        let mut best = self.membership(0, value);
        for set in 1..self.len() {
            let degree = self.membership(set, value);
            if degree > best {
                winner = set;
                best = degree;
            }
        }
        (winner, best)
    }

    /// Stable label of one set, used in antecedent descriptions and dumps:
    /// `L<i>` for triangular sets, `S<i>` for crisp classes.
    pub fn set_label(&self, set: usize) -> String {
        match self {
            FuzzyPartition::Triangular { .. } => format!("L{set}"),
            FuzzyPartition::Crisp { .. } => format!("S{set}"),
        }
    }

    /// Defining points `(left foot, peak, right foot)` of a triangular set.
    /// The extreme sets reuse their peak as the missing foot.
    fn set_points(centers: &[f64], set: usize) -> (f64, f64, f64) {
        let left = if set == 0 { centers[set] } else { centers[set - 1] };
        let right = if set == centers.len() - 1 {
            centers[set]
        } else {
            centers[set + 1]
        };
        (left, centers[set], right)
    }
}

impl fmt::Display for FuzzyPartition {
    /// Enumerates each set's defining points. The format is stable; report
    /// dumps are compared against it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuzzyPartition::Triangular { centers, .. } => {
                write!(f, "{{")?;
                for set in 0..centers.len() {
                    let (l, c, r) = Self::set_points(centers, set);
                    write!(f, " L{set}:({l:.4},{c:.4},{r:.4})")?;
                }
                write!(f, " }}")
            }
            FuzzyPartition::Crisp { classes } => {
                write!(f, "{{")?;
                for set in 0..*classes {
                    write!(f, " S{set}")?;
                }
                write!(f, " }}")
            }
        }
    }
}
