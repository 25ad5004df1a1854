//! # frbs-core
//!
//! Leaf machinery for the frbs Wang-Mendel classifier:
//!
//! - **FuzzyPartition**: triangular partitions for continuous inputs, crisp
//!   indicator partitions for the class output.
//! - **TNorm / TConorm**: the operator pair combining per-variable degrees
//!   into antecedent compatibility and per-rule votes into class scores.
//! - **FuzzyRule**: consequent class + strength.
//! - **RuleBase**: mixed-radix antecedent encoding, compatibility
//!   evaluation and t-conorm inference over the learned rule table.
//!
//! This crate is pure computation — no I/O, no logging. The learning pass
//! and the dataset/report surfaces live in `frbs-rs`.

pub mod error;
pub mod norm;
pub mod partition;
pub mod rule;
pub mod rulebase;

pub use error::{FrbsError, Result};
pub use norm::{TConorm, TNorm};
pub use partition::FuzzyPartition;
pub use rule::FuzzyRule;
pub use rulebase::RuleBase;
