use anchor_lang::prelude::*;

/// Constants for the Deposit Gateway
pub const GATEWAY_SEED: &[u8] = b"gateway";

/// Sentinel for an admin or ledger slot that has not been set
pub const UNSET_ADDRESS: Pubkey = Pubkey::new_from_array([0u8; 32]);
