pub mod hat;

pub use hat::hat;
