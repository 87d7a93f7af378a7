pub mod hat_approx;

pub use hat_approx::HatApproxNet;
