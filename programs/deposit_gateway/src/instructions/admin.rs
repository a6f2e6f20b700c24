use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{GatewayAdminChanged, LedgerChanged};
use crate::state::Gateway;

pub fn change_admin(ctx: Context<ChangeAdmin>, new_admin: Pubkey) -> Result<()> {
    let gateway = &mut ctx.accounts.gateway;
    let previous_admin = gateway.change_admin(&ctx.accounts.admin.key(), new_admin)?;

    emit!(GatewayAdminChanged {
        gateway: gateway.key(),
        previous_admin,
        new_admin,
    });

    msg!("Gateway admin changed: {} -> {}", previous_admin, new_admin);
    Ok(())
}

pub fn set_peer(ctx: Context<SetPeer>, new_ledger: Pubkey) -> Result<()> {
    let gateway = &mut ctx.accounts.gateway;
    let previous_ledger = gateway.set_ledger(&ctx.accounts.admin.key(), new_ledger)?;

    emit!(LedgerChanged {
        gateway: gateway.key(),
        previous_ledger,
        new_ledger,
    });

    msg!("Gateway ledger changed: {} -> {}", previous_ledger, new_ledger);
    Ok(())
}

#[derive(Accounts)]
pub struct ChangeAdmin<'info> {
    #[account(
        mut,
        seeds = [GATEWAY_SEED, gateway.gateway_id.to_le_bytes().as_ref()],
        bump = gateway.bump
    )]
    pub gateway: Account<'info, Gateway>,

    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct SetPeer<'info> {
    #[account(
        mut,
        seeds = [GATEWAY_SEED, gateway.gateway_id.to_le_bytes().as_ref()],
        bump = gateway.bump
    )]
    pub gateway: Account<'info, Gateway>,

    pub admin: Signer<'info>,
}
