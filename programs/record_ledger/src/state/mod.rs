pub mod ledger;
pub mod record;

pub use ledger::*;
pub use record::*;
