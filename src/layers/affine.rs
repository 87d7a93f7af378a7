use rand::Rng;

use crate::error::{ApproxError, Result};
use crate::math::matrix::Matrix;

/// Affine transform `y = x · W + b` applied row-wise to a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Affine {
    weights: Matrix, // (in_features, out_features)
    biases: Matrix,  // (1, out_features)
}

impl Affine {
    /// Creates a layer with the usual default initialization for affine
    /// layers: weights and biases drawn from `U(-k, k)` with
    /// `k = 1 / sqrt(in_features)`. A layer with no inputs is rejected.
    pub fn new<R: Rng>(in_features: usize, out_features: usize, rng: &mut R) -> Result<Affine> {
        if in_features == 0 {
            return Err(ApproxError::ZeroFanIn);
        }
        Ok(Affine::init(in_features, out_features, rng))
    }

    /// `new` for callers that already hold `in_features >= 1`.
    pub(crate) fn init<R: Rng>(in_features: usize, out_features: usize, rng: &mut R) -> Affine {
        let bound = 1.0 / (in_features as f64).sqrt();
        Affine {
            weights: Matrix::uniform(in_features, out_features, bound, rng),
            biases: Matrix::uniform(1, out_features, bound, rng),
        }
    }

    /// Builds a layer from explicit parameters.
    ///
    /// `biases` must be a single row with one entry per column of `weights`.
    pub fn from_parts(weights: Matrix, biases: Matrix) -> Result<Affine> {
        if biases.rows != 1 {
            return Err(ApproxError::BiasNotRow { rows: biases.rows });
        }
        if biases.cols != weights.cols {
            return Err(ApproxError::ShapeMismatch {
                expected: weights.cols,
                found: biases.cols,
            });
        }
        Ok(Affine { weights, biases })
    }

    pub fn in_features(&self) -> usize {
        self.weights.rows
    }

    pub fn out_features(&self) -> usize {
        self.weights.cols
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn biases(&self) -> &Matrix {
        &self.biases
    }

    pub fn parameter_count(&self) -> usize {
        self.weights.rows * self.weights.cols + self.biases.cols
    }

    /// Maps an `(n, in_features)` batch to `(n, out_features)`.
    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        if input.cols != self.in_features() {
            return Err(ApproxError::ShapeMismatch {
                expected: self.in_features(),
                found: input.cols,
            });
        }
        Ok(self.apply(input))
    }

    /// `forward` without the width check; callers guarantee `input.cols == in_features`.
    pub(crate) fn apply(&self, input: &Matrix) -> Matrix {
        (input * &self.weights).add_row_broadcast(&self.biases)
    }
}
