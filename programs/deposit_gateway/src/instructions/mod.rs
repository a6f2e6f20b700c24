pub mod admin;
pub mod deposit;
pub mod initialize;

pub use admin::*;
pub use deposit::*;
pub use initialize::*;
