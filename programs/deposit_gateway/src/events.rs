use anchor_lang::prelude::*;

/// Event emitted when a gateway is created
#[event]
pub struct GatewayInitialized {
    pub gateway: Pubkey,
    pub gateway_id: u64,
    pub admin: Pubkey,
}

/// Event emitted when the gateway admin is rotated
#[event]
pub struct GatewayAdminChanged {
    pub gateway: Pubkey,
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

/// Event emitted when the gateway is pointed at another ledger
#[event]
pub struct LedgerChanged {
    pub gateway: Pubkey,
    pub previous_ledger: Pubkey,
    pub new_ledger: Pubkey,
}

/// Event emitted when a deposit has been pulled and recorded
#[event]
pub struct Deposited {
    pub gateway: Pubkey,
    pub ledger: Pubkey,
    pub user: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
    pub record_index: u64,
}
