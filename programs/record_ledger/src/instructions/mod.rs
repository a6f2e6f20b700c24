pub mod admin;
pub mod initialize;
pub mod query;
pub mod write;

pub use admin::*;
pub use initialize::*;
pub use query::*;
pub use write::*;
