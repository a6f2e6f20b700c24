use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use record_ledger::program::RecordLedger;
use record_ledger::state::Ledger;

use crate::constants::*;
use crate::errors::GatewayError;
use crate::events::Deposited;
use crate::state::Gateway;
use crate::utils::{ensure_pullable, ensure_received, PullSource};

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let gateway = &ctx.accounts.gateway;
    let ledger_key = ctx.accounts.ledger.key();
    let write = plan_deposit(
        gateway,
        &gateway.key(),
        &ledger_key,
        ctx.accounts.depositor.key(),
        ctx.accounts.mint.key(),
        &PullSource::from_account(&ctx.accounts.source),
        amount,
    )?;

    let gateway_id = gateway.gateway_id.to_le_bytes();
    let bump = [gateway.bump];
    let seeds: &[&[u8]] = &[GATEWAY_SEED, gateway_id.as_ref(), &bump];
    let signer_seeds = &[seeds];

    // Pull then record inside one instruction: a ledger refusal reverts the pull too
    let vault_before = ctx.accounts.vault.amount;
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.source.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.gateway.to_account_info(),
            },
            signer_seeds,
        ),
        write.amount,
        ctx.accounts.mint.decimals,
    )?;
    ctx.accounts.vault.reload()?;
    ensure_received(vault_before, ctx.accounts.vault.amount, write.amount)?;

    let record_index = ctx.accounts.ledger.record_count;
    record_ledger::cpi::write(
        CpiContext::new_with_signer(
            ctx.accounts.ledger_program.to_account_info(),
            record_ledger::cpi::accounts::WriteRecord {
                ledger: ctx.accounts.ledger.to_account_info(),
                record: ctx.accounts.record.to_account_info(),
                writer: ctx.accounts.gateway.to_account_info(),
                payer: ctx.accounts.depositor.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
            signer_seeds,
        ),
        write.user,
        write.asset,
        write.amount,
    )?;

    emit!(Deposited {
        gateway: write.writer,
        ledger: ledger_key,
        user: write.user,
        asset: write.asset,
        amount: write.amount,
        record_index,
    });

    msg!(
        "Deposit: user={}, asset={}, amount={}, record_index={}",
        write.user,
        write.asset,
        write.amount,
        record_index
    );
    Ok(())
}

/// The ledger write a deposit issues: signed by the gateway, on behalf of the depositor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerWrite {
    pub writer: Pubkey,
    pub user: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
}

/// Gateway-side checks run before any token moves. Who may deposit is not
/// restricted here; the ledger decides whether this gateway may record.
pub fn plan_deposit(
    gateway: &Gateway,
    gateway_key: &Pubkey,
    ledger_key: &Pubkey,
    depositor: Pubkey,
    mint: Pubkey,
    source: &PullSource,
    amount: u64,
) -> Result<LedgerWrite> {
    require!(amount > 0, GatewayError::InvalidAmount);
    gateway.ensure_ledger(ledger_key)?;
    ensure_pullable(gateway_key, source, amount)?;

    Ok(LedgerWrite {
        writer: *gateway_key,
        user: depositor,
        asset: mint,
        amount,
    })
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Signs the token pull as delegate and the ledger write as writer
    #[account(
        seeds = [GATEWAY_SEED, gateway.gateway_id.to_le_bytes().as_ref()],
        bump = gateway.bump
    )]
    pub gateway: Account<'info, Gateway>,

    #[account(mut)]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: initialized by the ledger program, which derives and checks the address
    #[account(mut)]
    pub record: UncheckedAccount<'info>,

    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Depositor's token account; must delegate at least `amount` to the gateway
    #[account(
        mut,
        token::mint = mint,
        token::authority = depositor,
        token::token_program = token_program
    )]
    pub source: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = mint,
        associated_token::authority = gateway,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub ledger_program: Program<'info, RecordLedger>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}
