use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{GatewayChanged, LedgerAdminChanged};
use crate::state::Ledger;

pub fn change_admin(ctx: Context<ChangeAdmin>, new_admin: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let previous_admin = ledger.change_admin(&ctx.accounts.admin.key(), new_admin)?;

    emit!(LedgerAdminChanged {
        ledger: ledger.key(),
        previous_admin,
        new_admin,
    });

    msg!("Ledger admin changed: {} -> {}", previous_admin, new_admin);
    Ok(())
}

pub fn set_peer(ctx: Context<SetPeer>, new_gateway: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let previous_gateway = ledger.set_gateway(&ctx.accounts.admin.key(), new_gateway)?;

    emit!(GatewayChanged {
        ledger: ledger.key(),
        previous_gateway,
        new_gateway,
    });

    msg!("Ledger gateway changed: {} -> {}", previous_gateway, new_gateway);
    Ok(())
}

#[derive(Accounts)]
pub struct ChangeAdmin<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.ledger_id.to_le_bytes().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Checked against `ledger.admin` by the handler
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetPeer<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.ledger_id.to_le_bytes().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Checked against `ledger.admin` by the handler
    pub admin: Signer<'info>,
}
