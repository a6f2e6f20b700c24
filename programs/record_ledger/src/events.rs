use anchor_lang::prelude::*;

/// Event emitted when a ledger is created
#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub ledger_id: u64,
    pub admin: Pubkey,
}

/// Event emitted when the ledger admin is rotated
#[event]
pub struct LedgerAdminChanged {
    pub ledger: Pubkey,
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

/// Event emitted when the trusted gateway is re-pointed
#[event]
pub struct GatewayChanged {
    pub ledger: Pubkey,
    pub previous_gateway: Pubkey,
    pub new_gateway: Pubkey,
}

/// Event emitted for every appended record, whichever path wrote it
#[event]
pub struct RecordWritten {
    pub ledger: Pubkey,
    pub index: u64,
    pub user: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
    pub writer: Pubkey,
}
