#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("5cPioyYcm8nQwTX7rMLMeZvH3h62UiPYTn82j6cgVQFr");

/// Deposit Gateway Program
///
/// Pulls approved tokens from any depositor and records the deposit on the
/// configured record ledger, signing the ledger write with the gateway PDA
#[program]
pub mod deposit_gateway {
    use super::*;

    /// Create a gateway instance; the caller becomes its admin
    pub fn initialize_gateway(ctx: Context<InitializeGateway>, gateway_id: u64) -> Result<()> {
        instructions::initialize::handler(ctx, gateway_id)
    }

    /// Rotate the gateway admin (admin only)
    pub fn change_admin(ctx: Context<ChangeAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::change_admin(ctx, new_admin)
    }

    /// Point the gateway at a new ledger (admin only)
    pub fn set_peer(ctx: Context<SetPeer>, new_ledger: Pubkey) -> Result<()> {
        instructions::admin::set_peer(ctx, new_ledger)
    }

    /// Pull `amount` of the mint from the caller and record it on the ledger
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }
}
