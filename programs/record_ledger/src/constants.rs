use anchor_lang::prelude::*;

/// Constants for the Record Ledger
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const RECORD_SEED: &[u8] = b"record";

/// Sentinel for an admin or gateway slot that has not been set
pub const UNSET_ADDRESS: Pubkey = Pubkey::new_from_array([0u8; 32]);
