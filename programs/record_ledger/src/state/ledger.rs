use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, UNSET_ADDRESS};
use crate::errors::LedgerError;
use crate::state::Record;

/// Ledger account holding the writer configuration and the record counter.
/// Records themselves live in their own PDAs, addressed by position.
#[account]
pub struct Ledger {
    /// Admin allowed to rotate configuration and write records directly
    pub admin: Pubkey,

    /// The single gateway address allowed on the gateway write path
    pub gateway: Pubkey,

    /// Identifier used in the ledger PDA seeds
    pub ledger_id: u64,

    /// Number of records appended so far; also the index of the next record
    pub record_count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Ledger {
    pub const SIZE: usize = 32  // admin
        + 32                    // gateway
        + 8                     // ledger_id
        + 8                     // record_count
        + 1;                    // bump

    /// Ledger PDA for a given identifier, for clients building instructions
    pub fn address(ledger_id: u64) -> Pubkey {
        Pubkey::find_program_address(&[LEDGER_SEED, &ledger_id.to_le_bytes()], &crate::ID).0
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, LedgerError::Unauthorized);
        Ok(())
    }

    /// The unset sentinel never matches, whoever the caller is.
    pub fn ensure_writer(&self, caller: &Pubkey) -> Result<()> {
        require_keys_neq!(self.gateway, UNSET_ADDRESS, LedgerError::InvalidWriter);
        require_keys_eq!(*caller, self.gateway, LedgerError::InvalidWriter);
        Ok(())
    }

    /// Hand the admin role to `new_admin`, returning the previous admin.
    /// Rotating to the sentinel is refused: nobody could ever configure the ledger again.
    pub fn change_admin(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<Pubkey> {
        self.ensure_admin(caller)?;
        require_keys_neq!(new_admin, UNSET_ADDRESS, LedgerError::InvalidAddress);

        let previous = self.admin;
        self.admin = new_admin;
        Ok(previous)
    }

    /// Point the gateway write path at `new_gateway`, returning the previous one.
    /// The sentinel is accepted and disconnects every gateway.
    pub fn set_gateway(&mut self, caller: &Pubkey, new_gateway: Pubkey) -> Result<Pubkey> {
        self.ensure_admin(caller)?;

        let previous = self.gateway;
        self.gateway = new_gateway;
        Ok(previous)
    }

    /// Reserve the next record position and advance the counter
    pub fn claim_index(&mut self) -> Result<u64> {
        let index = self.record_count;
        self.record_count = index
            .checked_add(1)
            .ok_or(LedgerError::CounterOverflow)?;
        Ok(index)
    }

    pub fn ensure_index(&self, index: u64) -> Result<()> {
        require!(index < self.record_count, LedgerError::OutOfRange);
        Ok(())
    }

    /// Claim the next slot and build the record that goes there.
    /// `ledger_key` is this ledger's own address.
    pub fn next_record(
        &mut self,
        ledger_key: Pubkey,
        writer: Pubkey,
        user: Pubkey,
        asset: Pubkey,
        amount: u64,
        bump: u8,
    ) -> Result<Record> {
        require!(amount > 0, LedgerError::InvalidAmount);

        let index = self.claim_index()?;
        Ok(Record {
            ledger: ledger_key,
            index,
            user,
            asset,
            amount,
            writer,
            bump,
        })
    }
}
