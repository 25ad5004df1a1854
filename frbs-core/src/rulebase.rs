//! Rule base: partitions + operators + the learned code -> rule table.
//!
//! The antecedent of a rule is one fuzzy set per input variable. That
//! combination is packed into a single `u64` with mixed-radix encoding,
//! each variable contributing one digit with its own partition size as the
//! radix:
//!
//! ```text
//! code = idx_0 + idx_1 * k_0 + idx_2 * k_0 * k_1 + ...
//! ```
//!
//! The encoding is a bijection between winning-set combinations and
//! `[0, k_0 * k_1 * ... * k_n)`, so two examples share a code exactly when
//! they select the same fuzzy set in every input dimension. Rules are
//! stored in a hash map keyed by the code; an insertion-order side vector
//! keeps rule enumeration (and therefore report dumps and score
//! accumulation order) deterministic.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FrbsError, Result};
use crate::norm::{TConorm, TNorm};
use crate::partition::FuzzyPartition;
use crate::rule::FuzzyRule;

/// Fuzzy rule base over a fixed set of input partitions and one output
/// partition.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleBase {
    inputs: Vec<FuzzyPartition>,
    output: FuzzyPartition,
    tnorm: TNorm,
    tconorm: TConorm,
    rules: HashMap<u64, FuzzyRule>,
    /// Codes in first-insertion order; `Rule_<n>` numbering follows it.
    order: Vec<u64>,
    /// Product of all input partition sizes; codes live in `[0, space)`.
    space: u64,
}

impl RuleBase {
    /// Compose a rule base from per-variable input partitions, the output
    /// partition and the operator pair.
    ///
    /// Fails if there are no input variables or the antecedent space
    /// `k_0 * ... * k_n` overflows `u64`.
    pub fn new(
        inputs: Vec<FuzzyPartition>,
        output: FuzzyPartition,
        tnorm: TNorm,
        tconorm: TConorm,
    ) -> Result<Self> {
        if inputs.is_empty() {
            return Err(FrbsError::InvalidParameter(
                "rule base needs at least one input variable".into(),
            ));
        }
        let mut space: u64 = 1;
        for p in &inputs {
            space = space.checked_mul(p.len() as u64).ok_or_else(|| {
                FrbsError::InvalidParameter(
                    "antecedent space exceeds the 64-bit code range".into(),
                )
            })?;
        }
        Ok(Self {
            inputs,
            output,
            tnorm,
            tconorm,
            rules: HashMap::new(),
            order: Vec::new(),
            space,
        })
    }

    /// Number of input variables.
    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Number of output classes.
    #[inline]
    pub fn num_classes(&self) -> usize {
        self.output.len()
    }

    /// Number of stored rules.
    #[inline]
    pub fn num_rules(&self) -> usize {
        self.order.len()
    }

    /// Size of the antecedent code space, `k_0 * ... * k_n`.
    #[inline]
    pub fn code_space(&self) -> u64 {
        self.space
    }

    #[inline]
    pub fn input_partition(&self, var: usize) -> &FuzzyPartition {
        &self.inputs[var]
    }

    #[inline]
    pub fn output_partition(&self) -> &FuzzyPartition {
        &self.output
    }

    /// Stored rules in first-insertion order.
    pub fn rules(&self) -> impl Iterator<Item = (u64, &FuzzyRule)> {
        self.order.iter().map(move |code| (*code, &self.rules[code]))
    }

    fn check_arity(&self, x: &[f64]) -> Result<()> {
        if x.len() != self.inputs.len() {
            return Err(FrbsError::ShapeMismatch {
                expected: self.inputs.len(),
                actual: x.len(),
            });
        }
        Ok(())
    }

    fn check_code(&self, code: u64) -> Result<()> {
        if code >= self.space {
            return Err(FrbsError::CodeOutOfRange {
                code,
                space: self.space,
            });
        }
        Ok(())
    }

    /// Antecedent code of `x`: the mixed-radix packing of each variable's
    /// winning fuzzy set. Pure; does not touch the rule table.
    pub fn encode_antecedent(&self, x: &[f64]) -> Result<u64> {
        self.check_arity(x)?;
        let mut code: u64 = 0;
        let mut radix: u64 = 1;
        for (partition, &value) in self.inputs.iter().zip(x) {
            let (winner, _) = partition.winning_set(value);
            code += winner as u64 * radix;
            radix *= partition.len() as u64;
        }
        Ok(code)
    }

    /// Inverse of [`encode_antecedent`](Self::encode_antecedent): the
    /// per-variable fuzzy-set indices packed into `code`.
    pub fn decode_antecedent(&self, code: u64) -> Result<Vec<usize>> {
        self.check_code(code)?;
        let mut rest = code;
        let mut indices = Vec::with_capacity(self.inputs.len());
        for partition in &self.inputs {
            let k = partition.len() as u64;
            indices.push((rest % k) as usize);
            rest /= k;
        }
        Ok(indices)
    }

    /// Compatibility of example `x` with the antecedent `code`, under the
    /// configured t-norm.
    ///
    /// The degree evaluated per variable is that of the *decoded* set, not
    /// of `x`'s own winning set — `code` may belong to a stored rule whose
    /// antecedent differs from the combination `x` itself would select.
    pub fn compatibility(&self, code: u64, x: &[f64]) -> Result<f64> {
        self.check_arity(x)?;
        let indices = self.decode_antecedent(code)?;
        let mut acc = self.tnorm.identity();
        for ((partition, &value), set) in self.inputs.iter().zip(x).zip(indices) {
            acc = self.tnorm.combine(acc, partition.membership(set, value));
        }
        Ok(acc)
    }

    /// Bulk insert/overwrite of `(code, rule)` pairs.
    ///
    /// The two slices must be the same length; the learner always supplies
    /// matched sequences, so a mismatch is a contract violation and the
    /// call is a no-op. Re-inserting an existing code replaces the rule's
    /// content but keeps its original position in the enumeration order.
    pub fn add_rules(&mut self, codes: &[u64], rules: &[FuzzyRule]) {
        debug_assert_eq!(codes.len(), rules.len(), "mismatched code/rule slices");
        if codes.len() != rules.len() {
            return;
        }
        for (&code, &rule) in codes.iter().zip(rules) {
            if self.rules.insert(code, rule).is_none() {
                self.order.push(code);
            }
        }
    }

    /// Per-class aggregate scores for `x`.
    ///
    /// Every stored rule contributes `compatibility(code, x) * weight` to
    /// its consequent's score; contributions are folded with the t-conorm.
    /// Scores are not normalized. Classification downstream is argmax with
    /// first-index tie-break.
    pub fn predict(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.check_arity(x)?;
        let mut scores = vec![self.tconorm.identity(); self.output.len()];
        for &code in &self.order {
            let rule = &self.rules[&code];
            let vote = self.compatibility(code, x)? * rule.weight;
            scores[rule.consequent] = self.tconorm.combine(scores[rule.consequent], vote);
        }
        Ok(scores)
    }

    /// Human-readable antecedent of `code`, e.g. `X0 IS L2 AND X1 IS L0`.
    pub fn describe_antecedent(&self, code: u64) -> Result<String> {
        let indices = self.decode_antecedent(code)?;
        let parts: Vec<String> = self
            .inputs
            .iter()
            .zip(indices)
            .enumerate()
            .map(|(var, (partition, set))| format!("X{var} IS {}", partition.set_label(set)))
            .collect();
        Ok(parts.join(" AND "))
    }
}
