use anchor_lang::prelude::*;

use crate::constants::RECORD_SEED;

/// One appended ledger entry. Created once at its index and never mutated.
#[account]
#[derive(Debug)]
pub struct Record {
    /// Ledger this record belongs to
    pub ledger: Pubkey,

    /// Position in the ledger, matching the PDA seed
    pub index: u64,

    /// Original depositor, not the gateway
    pub user: Pubkey,

    /// Mint of the transferred asset
    pub asset: Pubkey,

    pub amount: u64,

    /// Key that authorised the append (registered gateway or admin)
    pub writer: Pubkey,

    /// PDA bump seed
    pub bump: u8,
}

impl Record {
    pub const SIZE: usize = 32  // ledger
        + 8                     // index
        + 32                    // user
        + 32                    // asset
        + 8                     // amount
        + 32                    // writer
        + 1;                    // bump

    /// Record PDA at `index` of `ledger`, for clients building instructions
    pub fn address(ledger: &Pubkey, index: u64) -> Pubkey {
        Pubkey::find_program_address(
            &[RECORD_SEED, ledger.as_ref(), &index.to_le_bytes()],
            &crate::ID,
        )
        .0
    }

    pub fn entry(&self) -> RecordEntry {
        RecordEntry {
            user: self.user,
            asset: self.asset,
            amount: self.amount,
        }
    }
}

/// Public view of a record returned by `record_at`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordEntry {
    pub user: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
}
