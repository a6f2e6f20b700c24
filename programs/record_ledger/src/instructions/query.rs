use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{Ledger, Record, RecordEntry};

pub fn record_count(ctx: Context<RecordCount>) -> Result<u64> {
    Ok(ctx.accounts.ledger.record_count)
}

pub fn record_at(ctx: Context<RecordAt>, index: u64) -> Result<RecordEntry> {
    let info = ctx.accounts.record.to_account_info();
    let data = info.try_borrow_data()?;
    read_entry(&ctx.accounts.ledger, index, info.owner, &data)
}

/// Resolve position `index` of `ledger` from the raw record account.
/// The range check comes first, so an out-of-range index never touches the data.
pub fn read_entry(
    ledger: &Ledger,
    index: u64,
    owner: &Pubkey,
    mut data: &[u8],
) -> Result<RecordEntry> {
    ledger.ensure_index(index)?;
    require_keys_eq!(
        *owner,
        crate::ID,
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );

    let record = Record::try_deserialize(&mut data)?;
    Ok(record.entry())
}

#[derive(Accounts)]
pub struct RecordCount<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.ledger_id.to_le_bytes().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct RecordAt<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.ledger_id.to_le_bytes().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: address pinned by the seeds; only read after the index is known to be in range
    #[account(
        seeds = [RECORD_SEED, ledger.key().as_ref(), index.to_le_bytes().as_ref()],
        bump
    )]
    pub record: UncheckedAccount<'info>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use anchor_lang::error::ErrorCode;

    fn serialize(record: &Record) -> Vec<u8> {
        let mut data = Vec::new();
        record.try_serialize(&mut data).unwrap();
        data
    }

    fn ledger() -> Ledger {
        Ledger {
            admin: Pubkey::new_unique(),
            gateway: Pubkey::new_unique(),
            ledger_id: 1,
            record_count: 0,
            bump: 255,
        }
    }

    #[test]
    fn written_records_read_back_by_position() {
        let mut ledger = ledger();
        let ledger_key = Ledger::address(1);
        let token = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let alice = Pubkey::new_unique();

        let stored: Vec<Vec<u8>> = [(bob, 1_000), (alice, 1_100), (bob, 5)]
            .into_iter()
            .map(|(user, amount)| {
                let record = ledger
                    .next_record(ledger_key, ledger.gateway, user, token, amount, 250)
                    .unwrap();
                serialize(&record)
            })
            .collect();

        let expected = [(bob, 1_000), (alice, 1_100), (bob, 5)];
        for (index, (user, amount)) in expected.into_iter().enumerate() {
            let entry = read_entry(&ledger, index as u64, &crate::ID, &stored[index]).unwrap();
            assert_eq!(
                entry,
                RecordEntry {
                    user,
                    asset: token,
                    amount,
                }
            );
        }
    }

    #[test]
    fn out_of_range_index_is_rejected_before_reading() {
        let mut ledger = ledger();
        let record = ledger
            .next_record(
                Pubkey::new_unique(),
                ledger.gateway,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                1,
                250,
            )
            .unwrap();
        let data = serialize(&record);

        // valid bytes do not make index 1 exist
        assert_eq!(
            read_entry(&ledger, 1, &crate::ID, &data).unwrap_err(),
            LedgerError::OutOfRange.into()
        );
        // neither a foreign owner nor empty data is looked at first
        assert_eq!(
            read_entry(&ledger, 1, &Pubkey::new_unique(), &[]).unwrap_err(),
            LedgerError::OutOfRange.into()
        );
    }

    #[test]
    fn foreign_or_malformed_accounts_are_refused() {
        let mut ledger = ledger();
        let record = ledger
            .next_record(
                Pubkey::new_unique(),
                ledger.gateway,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                1,
                250,
            )
            .unwrap();
        let data = serialize(&record);

        assert_eq!(
            read_entry(&ledger, 0, &Pubkey::new_unique(), &data).unwrap_err(),
            ErrorCode::AccountOwnedByWrongProgram.into()
        );

        let mut wrong_discriminator = data.clone();
        wrong_discriminator[0] ^= 0xff;
        assert_eq!(
            read_entry(&ledger, 0, &crate::ID, &wrong_discriminator).unwrap_err(),
            ErrorCode::AccountDiscriminatorMismatch.into()
        );

        assert!(read_entry(&ledger, 0, &crate::ID, &[]).is_err());
    }
}
