#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::RecordEntry;

declare_id!("5zkUHyZnsA8pxzpB1PmsVDSiopxV9EvuJoav1mVuJm9a");

/// Record Ledger Program
///
/// Append-only list of deposit records. Writable by exactly one registered
/// gateway address and, on a separate path, by the ledger admin.
#[program]
pub mod record_ledger {
    use super::*;

    /// Create a ledger; the caller becomes its admin
    pub fn initialize_ledger(ctx: Context<InitializeLedger>, ledger_id: u64) -> Result<()> {
        instructions::initialize::handler(ctx, ledger_id)
    }

    /// Rotate the ledger admin (admin only)
    pub fn change_admin(ctx: Context<ChangeAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::change_admin(ctx, new_admin)
    }

    /// Point the ledger at a new trusted gateway (admin only)
    pub fn set_peer(ctx: Context<SetPeer>, new_gateway: Pubkey) -> Result<()> {
        instructions::admin::set_peer(ctx, new_gateway)
    }

    /// Append a record on behalf of `user` (registered gateway only)
    pub fn write(
        ctx: Context<WriteRecord>,
        user: Pubkey,
        asset: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::write::write(ctx, user, asset, amount)
    }

    /// Append a record directly (admin only)
    pub fn admin_write(
        ctx: Context<AdminWriteRecord>,
        user: Pubkey,
        asset: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::write::admin_write(ctx, user, asset, amount)
    }

    pub fn record_count(ctx: Context<RecordCount>) -> Result<u64> {
        instructions::query::record_count(ctx)
    }

    pub fn record_at(ctx: Context<RecordAt>, index: u64) -> Result<RecordEntry> {
        instructions::query::record_at(ctx, index)
    }
}
