//! In-memory labeled dataset record.
//!
//! File parsing belongs to the surrounding driver; this type is the record
//! it hands to the core — input matrix, labels, class count — with the
//! derived quantities (example/variable counts, per-input bounds) the
//! learner needs.

use frbs_core::{FrbsError, Result};

/// A labeled numeric dataset.
///
/// Rows of `inputs` are examples; `labels[i]` is the class of row `i`.
/// Per-variable minimum/maximum bounds are derived at construction and
/// drive partition placement.
#[derive(Clone, Debug)]
pub struct Dataset {
    inputs: Vec<Vec<f64>>,
    labels: Vec<usize>,
    num_classes: usize,
    min: Vec<f64>,
    max: Vec<f64>,
}

impl Dataset {
    /// Validates and wraps a dataset.
    ///
    /// Fails on an empty matrix, ragged rows, a label/row count mismatch,
    /// zero classes, or a label outside `[0, num_classes)`.
    pub fn new(inputs: Vec<Vec<f64>>, labels: Vec<usize>, num_classes: usize) -> Result<Self> {
        if inputs.is_empty() {
            return Err(FrbsError::InvalidParameter("empty dataset".into()));
        }
        if num_classes == 0 {
            return Err(FrbsError::InvalidParameter(
                "dataset needs at least one class".into(),
            ));
        }
        if labels.len() != inputs.len() {
            return Err(FrbsError::InvalidParameter(format!(
                "{} examples but {} labels",
                inputs.len(),
                labels.len()
            )));
        }
        let width = inputs[0].len();
        if width == 0 {
            return Err(FrbsError::InvalidParameter(
                "examples have no input variables".into(),
            ));
        }
        for (row, x) in inputs.iter().enumerate() {
            if x.len() != width {
                return Err(FrbsError::InvalidParameter(format!(
                    "ragged dataset: example {row} has {} inputs, expected {width}",
                    x.len()
                )));
            }
        }
        for &label in &labels {
            if label >= num_classes {
                return Err(FrbsError::LabelOutOfRange { label, num_classes });
            }
        }

        let mut min = vec![f64::INFINITY; width];
        let mut max = vec![f64::NEG_INFINITY; width];
        for x in &inputs {
            for (var, &v) in x.iter().enumerate() {
                if v < min[var] {
                    min[var] = v;
                }
                if v > max[var] {
                    max[var] = v;
                }
            }
        }

        Ok(Self {
            inputs,
            labels,
            num_classes,
            min,
            max,
        })
    }

    /// Number of examples.
    #[inline]
    pub fn num_examples(&self) -> usize {
        self.inputs.len()
    }

    /// Number of input variables per example.
    #[inline]
    pub fn num_inputs(&self) -> usize {
        self.inputs[0].len()
    }

    /// Number of output classes.
    #[inline]
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// `(min, max)` observed for one input variable.
    #[inline]
    pub fn bounds(&self, var: usize) -> (f64, f64) {
        (self.min[var], self.max[var])
    }

    /// One example's inputs.
    #[inline]
    pub fn example(&self, row: usize) -> &[f64] {
        &self.inputs[row]
    }

    /// One example's class label.
    #[inline]
    pub fn label(&self, row: usize) -> usize {
        self.labels[row]
    }

    /// All labels, in dataset order.
    #[inline]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Examples in dataset order, paired with their labels.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], usize)> {
        self.inputs
            .iter()
            .map(|x| x.as_slice())
            .zip(self.labels.iter().copied())
    }
}
