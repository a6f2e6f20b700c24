use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::LedgerInitialized;
use crate::state::Ledger;

pub fn handler(ctx: Context<InitializeLedger>, ledger_id: u64) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    // The deployer administers the ledger; no gateway is trusted yet
    ledger.admin = ctx.accounts.admin.key();
    ledger.gateway = UNSET_ADDRESS;
    ledger.ledger_id = ledger_id;
    ledger.record_count = 0;
    ledger.bump = ctx.bumps.ledger;

    emit!(LedgerInitialized {
        ledger: ledger.key(),
        ledger_id,
        admin: ledger.admin,
    });

    msg!("Ledger {} initialized, admin={}", ledger_id, ledger.admin);
    Ok(())
}

#[derive(Accounts)]
#[instruction(ledger_id: u64)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Ledger::SIZE,
        seeds = [LEDGER_SEED, ledger_id.to_le_bytes().as_ref()],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
