pub mod allowance;

pub use allowance::*;
