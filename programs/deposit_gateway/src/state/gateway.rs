use anchor_lang::prelude::*;

use crate::constants::{GATEWAY_SEED, UNSET_ADDRESS};
use crate::errors::GatewayError;

/// Gateway account. Its PDA address is the identity a ledger registers as
/// its writer; the program signs ledger writes with the PDA seeds.
#[account]
pub struct Gateway {
    /// Admin authority that can modify gateway settings
    pub admin: Pubkey,

    /// Ledger this gateway forwards records to
    pub ledger: Pubkey,

    /// Identifier used in the gateway PDA seeds
    pub gateway_id: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Gateway {
    pub const SIZE: usize = 32  // admin
        + 32                    // ledger
        + 8                     // gateway_id
        + 1;                    // bump

    /// Gateway PDA for a given identifier, for clients building instructions
    pub fn address(gateway_id: u64) -> Pubkey {
        Pubkey::find_program_address(&[GATEWAY_SEED, &gateway_id.to_le_bytes()], &crate::ID).0
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, GatewayError::Unauthorized);
        Ok(())
    }

    /// Hand the admin role to `new_admin`, returning the previous admin
    pub fn change_admin(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<Pubkey> {
        self.ensure_admin(caller)?;
        require_keys_neq!(new_admin, UNSET_ADDRESS, GatewayError::InvalidAddress);

        let previous = self.admin;
        self.admin = new_admin;
        Ok(previous)
    }

    /// Point the gateway at `new_ledger`, returning the previous one.
    /// The sentinel detaches the gateway from any ledger.
    pub fn set_ledger(&mut self, caller: &Pubkey, new_ledger: Pubkey) -> Result<Pubkey> {
        self.ensure_admin(caller)?;

        let previous = self.ledger;
        self.ledger = new_ledger;
        Ok(previous)
    }

    pub fn ensure_ledger(&self, ledger: &Pubkey) -> Result<()> {
        require_keys_neq!(self.ledger, UNSET_ADDRESS, GatewayError::LedgerNotSet);
        require_keys_eq!(*ledger, self.ledger, GatewayError::LedgerMismatch);
        Ok(())
    }
}
