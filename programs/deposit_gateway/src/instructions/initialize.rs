use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::GatewayInitialized;
use crate::state::Gateway;

pub fn handler(ctx: Context<InitializeGateway>, gateway_id: u64) -> Result<()> {
    let gateway = &mut ctx.accounts.gateway;

    gateway.admin = ctx.accounts.admin.key();
    gateway.ledger = UNSET_ADDRESS;
    gateway.gateway_id = gateway_id;
    gateway.bump = ctx.bumps.gateway;

    emit!(GatewayInitialized {
        gateway: gateway.key(),
        gateway_id,
        admin: gateway.admin,
    });

    msg!("Gateway {} initialized at {}", gateway_id, gateway.key());
    Ok(())
}

#[derive(Accounts)]
#[instruction(gateway_id: u64)]
pub struct InitializeGateway<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Gateway::SIZE,
        seeds = [GATEWAY_SEED, gateway_id.to_le_bytes().as_ref()],
        bump
    )]
    pub gateway: Account<'info, Gateway>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
