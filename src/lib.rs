pub mod math;
pub mod functions;
pub mod layers;
pub mod network;
pub mod config;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use functions::hat::hat;
pub use layers::affine::Affine;
pub use network::hat_approx::HatApproxNet;
pub use config::{ApproxConfig, DEFAULT_HIDDEN_DIM};
pub use error::{ApproxError, Result};
