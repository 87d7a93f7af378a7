use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::{ApproxConfig, DEFAULT_HIDDEN_DIM};
use crate::error::{ApproxError, Result};
use crate::layers::affine::Affine;
use crate::math::matrix::Matrix;

/// Four affine layers, each followed by `tanh`, mapping one scalar to one
/// scalar: `1 -> h -> h -> h -> 1`.
///
/// Evaluation borrows the network immutably and keeps no per-call state, so
/// the same input always gives the same output until the parameters are
/// replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct HatApproxNet {
    d1: Affine,
    d2: Affine,
    d3: Affine,
    d4: Affine,
}

impl HatApproxNet {
    /// Builds a network with parameters drawn from the thread RNG.
    pub fn new(hidden_dim: usize) -> Result<HatApproxNet> {
        HatApproxNet::with_rng(hidden_dim, &mut rand::thread_rng())
    }

    /// Builds a network with parameters drawn from `rng`.
    pub fn with_rng<R: Rng>(hidden_dim: usize, rng: &mut R) -> Result<HatApproxNet> {
        if hidden_dim == 0 {
            return Err(ApproxError::InvalidHiddenDim(hidden_dim));
        }
        Ok(HatApproxNet::init(hidden_dim, rng))
    }

    /// Draws fresh layers; `hidden_dim` must be at least 1.
    fn init<R: Rng>(hidden_dim: usize, rng: &mut R) -> HatApproxNet {
        let net = HatApproxNet {
            d1: Affine::init(1, hidden_dim, rng),
            d2: Affine::init(hidden_dim, hidden_dim, rng),
            d3: Affine::init(hidden_dim, hidden_dim, rng),
            d4: Affine::init(hidden_dim, 1, rng),
        };
        log::debug!(
            "built HatApproxNet: hidden_dim={hidden_dim}, parameters={}",
            net.parameter_count()
        );
        net
    }

    /// Builds a network from a config, seeding the RNG when `config.seed` is set.
    pub fn from_config(config: &ApproxConfig) -> Result<HatApproxNet> {
        config.validate()?;
        match config.seed {
            Some(seed) => HatApproxNet::with_rng(config.hidden_dim, &mut StdRng::seed_from_u64(seed)),
            None => HatApproxNet::new(config.hidden_dim),
        }
    }

    /// Assembles a network from explicit layers, checking they chain as
    /// `1 -> h -> h -> h -> 1` for some `h >= 1`.
    pub fn from_layers(layers: [Affine; 4]) -> Result<HatApproxNet> {
        let [d1, d2, d3, d4] = layers;
        let hidden_dim = d1.out_features();
        if hidden_dim == 0 {
            return Err(ApproxError::InvalidHiddenDim(0));
        }

        let expected = [(1, hidden_dim), (hidden_dim, hidden_dim), (hidden_dim, hidden_dim), (hidden_dim, 1)];
        for (layer, (inputs, outputs)) in [&d1, &d2, &d3, &d4].into_iter().zip(expected) {
            if layer.in_features() != inputs {
                return Err(ApproxError::ShapeMismatch { expected: inputs, found: layer.in_features() });
            }
            if layer.out_features() != outputs {
                return Err(ApproxError::ShapeMismatch { expected: outputs, found: layer.out_features() });
            }
        }

        Ok(HatApproxNet { d1, d2, d3, d4 })
    }

    pub fn hidden_dim(&self) -> usize {
        self.d1.out_features()
    }

    pub fn layers(&self) -> [&Affine; 4] {
        [&self.d1, &self.d2, &self.d3, &self.d4]
    }

    pub fn parameter_count(&self) -> usize {
        self.layers().iter().map(|layer| layer.parameter_count()).sum()
    }

    /// Forward pass over an `(n, 1)` batch, giving `(n, 1)` with every entry in `(-1, 1)`.
    pub fn forward(&self, input: &Matrix) -> Result<Matrix> {
        if input.cols != 1 {
            return Err(ApproxError::ShapeMismatch { expected: 1, found: input.cols });
        }
        Ok(self.run(input))
    }

    /// Evaluates the network at a single point.
    pub fn predict(&self, x: f64) -> f64 {
        self.run(&Matrix::column(&[x])).data[0][0]
    }

    /// Evaluates the network at every point of `xs`, preserving order.
    pub fn predict_batch(&self, xs: &[f64]) -> Vec<f64> {
        self.run(&Matrix::column(xs)).first_column()
    }

    fn run(&self, input: &Matrix) -> Matrix {
        let x = self.d1.apply(input).map(f64::tanh);
        let x = self.d2.apply(&x).map(f64::tanh);
        let x = self.d3.apply(&x).map(f64::tanh);
        self.d4.apply(&x).map(f64::tanh)
    }
}

impl Default for HatApproxNet {
    fn default() -> Self {
        HatApproxNet::init(DEFAULT_HIDDEN_DIM, &mut rand::thread_rng())
    }
}
