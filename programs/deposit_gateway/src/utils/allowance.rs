use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_interface::TokenAccount;

use crate::errors::GatewayError;

/// Delegation and balance of the token account a deposit pulls from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PullSource {
    pub delegate: Option<Pubkey>,
    pub delegated_amount: u64,
    pub balance: u64,
}

impl PullSource {
    pub fn from_account(account: &TokenAccount) -> Self {
        let delegate = match account.delegate {
            COption::Some(key) => Some(key),
            COption::None => None,
        };
        Self {
            delegate,
            delegated_amount: account.delegated_amount,
            balance: account.amount,
        }
    }
}

/// Check that `spender` may pull `amount` out of `source`: the account must
/// delegate at least `amount` to `spender`, and hold it.
pub fn ensure_pullable(spender: &Pubkey, source: &PullSource, amount: u64) -> Result<()> {
    require!(source.delegate == Some(*spender), GatewayError::TransferFailed);
    require!(source.delegated_amount >= amount, GatewayError::TransferFailed);
    require!(source.balance >= amount, GatewayError::TransferFailed);
    Ok(())
}

/// The vault must have grown by exactly `amount`; fee-charging mints fail here.
pub fn ensure_received(vault_before: u64, vault_after: u64, amount: u64) -> Result<()> {
    let received = vault_after
        .checked_sub(vault_before)
        .ok_or(GatewayError::ShortTransfer)?;
    require!(received == amount, GatewayError::ShortTransfer);
    Ok(())
}
