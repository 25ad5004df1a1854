//! Wang-Mendel learning pass and classifier evaluation.
//!
//! One streaming pass over the training set: each example selects its
//! winning fuzzy set per input variable, the combination is packed into an
//! antecedent code, and the example with the highest compatibility for each
//! code decides that rule's class. Finalization collapses every learned
//! weight to 1 and inserts the rules into the rule base.
//!
//! The scan is sequential on purpose: conflict resolution for a code
//! depends on the rules resolved before it, so accumulation must follow
//! dataset order.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use frbs_core::{FrbsError, FuzzyPartition, FuzzyRule, Result, RuleBase, TConorm, TNorm};
use log::debug;

use crate::dataset::Dataset;

/// Builds a rule base for a dataset: one triangular partition per input
/// variable over that variable's observed bounds, `sets_per_input` fuzzy
/// sets each, and a crisp output partition over the class labels.
pub fn build_rule_base(
    data: &Dataset,
    sets_per_input: usize,
    tnorm: TNorm,
    tconorm: TConorm,
) -> Result<RuleBase> {
    let mut inputs = Vec::with_capacity(data.num_inputs());
    for var in 0..data.num_inputs() {
        let (min, max) = data.bounds(var);
        inputs.push(FuzzyPartition::triangular(min, max, sets_per_input)?);
    }
    RuleBase::new(
        inputs,
        FuzzyPartition::crisp(data.num_classes())?,
        tnorm,
        tconorm,
    )
}

/// Outcome of a completed learning pass.
#[derive(Clone, Debug)]
pub struct FitSummary {
    /// Distinct antecedent codes learned in this pass.
    pub num_rules: usize,
    /// Classification error rate on the training set, in `[0, 1]`.
    pub train_error: f64,
    /// Predicted label per training example, in dataset order.
    pub train_predictions: Vec<usize>,
}

/// Outcome of scoring a dataset against a finished rule base.
#[derive(Clone, Debug)]
pub struct Evaluation {
    /// Misclassified fraction, in `[0, 1]`.
    pub error_rate: f64,
    /// Predicted label per example, in dataset order.
    pub predictions: Vec<usize>,
}

/// One Wang-Mendel learning run.
///
/// The learner owns its working code -> rule set, distinct from whatever
/// the rule base already stores. [`fit`](Self::fit) consumes the learner:
/// a finalized run is immutable and a new run needs a fresh instance.
#[derive(Debug, Default)]
pub struct WangMendelLearner {
    index: HashMap<u64, usize>,
    codes: Vec<u64>,
    rules: Vec<FuzzyRule>,
}

impl WangMendelLearner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the learning pass over `train` and installs the finalized rules
    /// into `base`. Returns the rule count and training-set score.
    ///
    /// Conflict resolution: among all examples sharing an antecedent code,
    /// the one with the strictly highest compatibility degree decides the
    /// rule's consequent; an equal degree keeps the earlier winner.
    pub fn fit(mut self, base: &mut RuleBase, train: &Dataset) -> Result<FitSummary> {
        if train.num_inputs() != base.num_inputs() {
            return Err(FrbsError::ShapeMismatch {
                expected: base.num_inputs(),
                actual: train.num_inputs(),
            });
        }
        if train.num_classes() > base.num_classes() {
            return Err(FrbsError::InvalidParameter(format!(
                "dataset has {} classes, rule base supports {}",
                train.num_classes(),
                base.num_classes()
            )));
        }

        for (x, label) in train.iter() {
            let code = base.encode_antecedent(x)?;
            // Compatibility of the example with its own winning combination:
            // the t-norm over the winning degrees found while encoding.
            let degree = base.compatibility(code, x)?;
            match self.index.entry(code) {
                Entry::Vacant(slot) => {
                    slot.insert(self.codes.len());
                    self.codes.push(code);
                    self.rules.push(FuzzyRule::new(label, degree));
                }
                Entry::Occupied(slot) => {
                    let rule = &mut self.rules[*slot.get()];
                    if degree > rule.weight {
                        rule.consequent = label;
                        rule.weight = degree;
                    }
                }
            }
        }

        // Finalization: every selected rule enters the base with weight 1;
        // the compatibility degree only arbitrates the scan above.
        for rule in &mut self.rules {
            rule.weight = 1.0;
        }
        base.add_rules(&self.codes, &self.rules);
        debug!(
            "wang-mendel pass: {} rules from {} examples",
            self.codes.len(),
            train.num_examples()
        );

        let train_eval = evaluate(base, train)?;
        Ok(FitSummary {
            num_rules: self.codes.len(),
            train_error: train_eval.error_rate,
            train_predictions: train_eval.predictions,
        })
    }
}

/// Scores `data` against a finished rule base.
///
/// Fails with [`FrbsError::ShapeMismatch`] before computing any prediction
/// if the dataset's input arity disagrees with the rule base's.
pub fn evaluate(base: &RuleBase, data: &Dataset) -> Result<Evaluation> {
    if data.num_inputs() != base.num_inputs() {
        return Err(FrbsError::ShapeMismatch {
            expected: base.num_inputs(),
            actual: data.num_inputs(),
        });
    }

    let mut predictions = Vec::with_capacity(data.num_examples());
    let mut missed = 0usize;
    for (x, label) in data.iter() {
        let scores = base.predict(x)?;
        let mut winner = 0;
        for class in 1..scores.len() {
            if scores[class] > scores[winner] {
                winner = class;
            }
        }
        if winner != label {
            missed += 1;
        }
        predictions.push(winner);
    }
    let error_rate = missed as f64 / data.num_examples() as f64;
    debug!(
        "evaluated {} examples, error rate {:.4}",
        data.num_examples(),
        error_rate
    );
    Ok(Evaluation {
        error_rate,
        predictions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_2x2() -> RuleBase {
        RuleBase::new(
            vec![
                FuzzyPartition::triangular(0.0, 1.0, 2).unwrap(),
                FuzzyPartition::triangular(0.0, 1.0, 2).unwrap(),
            ],
            FuzzyPartition::crisp(2).unwrap(),
            TNorm::Product,
            TConorm::Sum,
        )
        .unwrap()
    }

    #[test]
    fn test_conflict_resolution_keeps_most_compatible() {
        let mut base = base_2x2();
        // ex1 and ex2 share antecedent (0, 0); ex2 is more compatible
        // (0.95 > 0.9) so its class wins. ex3 maps to (0, 1).
        let train = Dataset::new(
            vec![vec![0.1, 0.0], vec![0.05, 0.0], vec![0.1, 0.9]],
            vec![0, 1, 0],
            2,
        )
        .unwrap();
        let summary = WangMendelLearner::new().fit(&mut base, &train).unwrap();
        assert_eq!(summary.num_rules, 2);

        let rules: Vec<(u64, FuzzyRule)> = base.rules().map(|(c, r)| (c, *r)).collect();
        assert_eq!(base.decode_antecedent(rules[0].0).unwrap(), vec![0, 0]);
        assert_eq!(rules[0].1.consequent, 1);
        assert_eq!(base.decode_antecedent(rules[1].0).unwrap(), vec![0, 1]);
        assert_eq!(rules[1].1.consequent, 0);
    }

    #[test]
    fn test_equal_degree_keeps_earlier_winner() {
        let mut base = base_2x2();
        // Same compatibility (0.9 * 1.0) for both examples; strict
        // inequality keeps the first one's class.
        let train = Dataset::new(vec![vec![0.1, 0.0], vec![0.1, 0.0]], vec![0, 1], 2).unwrap();
        WangMendelLearner::new().fit(&mut base, &train).unwrap();
        let (_, rule) = base.rules().next().unwrap();
        assert_eq!(rule.consequent, 0);
    }

    #[test]
    fn test_all_weights_are_one_after_fit() {
        let mut base = base_2x2();
        let train = Dataset::new(
            vec![vec![0.1, 0.2], vec![0.9, 0.8], vec![0.4, 0.6]],
            vec![0, 1, 0],
            2,
        )
        .unwrap();
        WangMendelLearner::new().fit(&mut base, &train).unwrap();
        for (_, rule) in base.rules() {
            assert_eq!(rule.weight, 1.0);
        }
    }

    #[test]
    fn test_learning_is_deterministic() {
        let train = Dataset::new(
            vec![
                vec![0.1, 0.2],
                vec![0.9, 0.8],
                vec![0.4, 0.6],
                vec![0.15, 0.25],
                vec![0.85, 0.75],
            ],
            vec![0, 1, 0, 1, 0],
            2,
        )
        .unwrap();
        let run = || {
            let mut base = base_2x2();
            WangMendelLearner::new().fit(&mut base, &train).unwrap();
            base.rules().map(|(c, r)| (c, *r)).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_train_predictions_match_labels_on_separable_data() {
        let mut base = base_2x2();
        let train = Dataset::new(
            vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![0.1, 0.1], vec![0.9, 0.9]],
            vec![0, 1, 0, 1],
            2,
        )
        .unwrap();
        let summary = WangMendelLearner::new().fit(&mut base, &train).unwrap();
        assert_eq!(summary.train_error, 0.0);
        assert_eq!(summary.train_predictions, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_evaluate_rejects_arity_mismatch_before_predicting() {
        let mut base = base_2x2();
        let train = Dataset::new(vec![vec![0.1, 0.2]], vec![0], 2).unwrap();
        WangMendelLearner::new().fit(&mut base, &train).unwrap();

        let test = Dataset::new(vec![vec![0.1, 0.2, 0.3]], vec![0], 2).unwrap();
        let err = evaluate(&base, &test).unwrap_err();
        match err {
            FrbsError::ShapeMismatch { expected, actual } => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            e => panic!("Expected ShapeMismatch, got {:?}", e),
        }
    }

    #[test]
    fn test_fit_rejects_arity_mismatch() {
        let mut base = base_2x2();
        let train = Dataset::new(vec![vec![0.1]], vec![0], 2).unwrap();
        assert!(WangMendelLearner::new().fit(&mut base, &train).is_err());
    }

    #[test]
    fn test_fit_rejects_excess_classes() {
        let mut base = base_2x2();
        let train = Dataset::new(vec![vec![0.1, 0.2]], vec![2], 3).unwrap();
        let err = WangMendelLearner::new().fit(&mut base, &train).unwrap_err();
        match err {
            FrbsError::InvalidParameter(_) => {}
            e => panic!("Expected InvalidParameter, got {:?}", e),
        }
    }

    #[test]
    fn test_build_rule_base_uses_dataset_bounds() {
        let data = Dataset::new(
            vec![vec![-1.0, 10.0], vec![3.0, 20.0]],
            vec![0, 1],
            2,
        )
        .unwrap();
        let base = build_rule_base(&data, 3, TNorm::Product, TConorm::Sum).unwrap();
        assert_eq!(base.num_inputs(), 2);
        assert_eq!(base.num_classes(), 2);
        assert_eq!(base.code_space(), 9);
        // Peak of the first variable's middle set sits at the bound midpoint.
        assert_eq!(base.input_partition(0).membership(1, 1.0), 1.0);
    }

    #[test]
    fn test_predict_is_idempotent() {
        let mut base = base_2x2();
        let train = Dataset::new(
            vec![vec![0.1, 0.2], vec![0.9, 0.8], vec![0.3, 0.7]],
            vec![0, 1, 1],
            2,
        )
        .unwrap();
        WangMendelLearner::new().fit(&mut base, &train).unwrap();
        let x = [0.42, 0.58];
        assert_eq!(base.predict(&x).unwrap(), base.predict(&x).unwrap());
    }
}
