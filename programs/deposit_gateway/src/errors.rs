use anchor_lang::prelude::*;

#[error_code]
pub enum GatewayError {
    #[msg("Only admin")]
    Unauthorized,

    #[msg("Address must not be the unset sentinel")]
    InvalidAddress,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Gateway has no ledger configured")]
    LedgerNotSet,

    #[msg("Ledger account is not the configured ledger")]
    LedgerMismatch,

    #[msg("Token transfer failed: missing allowance or balance")]
    TransferFailed,

    #[msg("Vault received less than the deposited amount")]
    ShortTransfer,
}
