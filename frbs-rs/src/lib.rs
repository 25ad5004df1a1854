//! # frbs-rs
//!
//! Wang-Mendel fuzzy rule-based classifier.
//!
//! The Wang-Mendel method learns a classifier in one pass over labeled
//! numeric data: each input variable is partitioned into overlapping
//! triangular fuzzy sets, the per-variable winning sets of an example are
//! packed into a single antecedent code, and the example most compatible
//! with each code decides that rule's class. Inference aggregates the
//! surviving rules' votes per class and picks the argmax.
//!
//! # Example
//!
//! ```
//! use frbs_rs::{build_rule_base, evaluate, Dataset, TConorm, TNorm, WangMendelLearner};
//!
//! let train = Dataset::new(
//!     vec![vec![0.1, 0.2], vec![0.9, 0.8], vec![0.2, 0.1], vec![0.8, 0.9]],
//!     vec![0, 1, 0, 1],
//!     2,
//! )?;
//!
//! let mut base = build_rule_base(&train, 3, TNorm::Product, TConorm::Sum)?;
//! let summary = WangMendelLearner::new().fit(&mut base, &train)?;
//! assert_eq!(summary.train_error, 0.0);
//!
//! let scores = base.predict(&[0.15, 0.15])?;
//! assert!(scores[0] > scores[1]);
//! # Ok::<(), frbs_rs::FrbsError>(())
//! ```
//!
//! The heavy machinery — partitions, antecedent encoding, the rule base —
//! lives in `frbs-core` and is re-exported here.

pub mod dataset;
pub mod learner;
pub mod report;

pub use dataset::Dataset;
pub use learner::{build_rule_base, evaluate, Evaluation, FitSummary, WangMendelLearner};
pub use report::{data_base_dump, rule_base_dump};

pub use frbs_core::{FrbsError, FuzzyPartition, FuzzyRule, Result, RuleBase, TConorm, TNorm};
