use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Only admin")]
    Unauthorized,

    #[msg("invalid writer")]
    InvalidWriter,

    #[msg("Record index out of range")]
    OutOfRange,

    #[msg("Address must not be the unset sentinel")]
    InvalidAddress,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Record counter overflow")]
    CounterOverflow,
}
