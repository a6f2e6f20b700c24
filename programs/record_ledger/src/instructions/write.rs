use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::RecordWritten;
use crate::state::{Ledger, Record};

/// Gateway write path: only the registered gateway may append.
pub fn write(
    ctx: Context<WriteRecord>,
    user: Pubkey,
    asset: Pubkey,
    amount: u64,
) -> Result<()> {
    let writer = ctx.accounts.writer.key();
    ctx.accounts.ledger.ensure_writer(&writer)?;

    let bump = ctx.bumps.record;
    append(
        &mut ctx.accounts.ledger,
        &mut ctx.accounts.record,
        bump,
        writer,
        user,
        asset,
        amount,
    )
}

/// Admin write path, independent of the registered gateway.
pub fn admin_write(
    ctx: Context<AdminWriteRecord>,
    user: Pubkey,
    asset: Pubkey,
    amount: u64,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.ledger.ensure_admin(&admin)?;

    let bump = ctx.bumps.record;
    append(
        &mut ctx.accounts.ledger,
        &mut ctx.accounts.record,
        bump,
        admin,
        user,
        asset,
        amount,
    )
}

fn append<'info>(
    ledger: &mut Account<'info, Ledger>,
    record: &mut Account<'info, Record>,
    bump: u8,
    writer: Pubkey,
    user: Pubkey,
    asset: Pubkey,
    amount: u64,
) -> Result<()> {
    let ledger_key = ledger.key();
    let entry = ledger.next_record(ledger_key, writer, user, asset, amount, bump)?;
    let index = entry.index;
    record.set_inner(entry);

    emit!(RecordWritten {
        ledger: ledger_key,
        index,
        user,
        asset,
        amount,
        writer,
    });

    msg!(
        "Record written: index={}, user={}, asset={}, amount={}, writer={}",
        index,
        user,
        asset,
        amount,
        writer
    );
    Ok(())
}

#[derive(Accounts)]
pub struct WriteRecord<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.ledger_id.to_le_bytes().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = payer,
        space = 8 + Record::SIZE,
        seeds = [
            RECORD_SEED,
            ledger.key().as_ref(),
            ledger.record_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub record: Account<'info, Record>,

    /// Must be the registered gateway; a gateway signs with its PDA over CPI
    pub writer: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AdminWriteRecord<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.ledger_id.to_le_bytes().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = admin,
        space = 8 + Record::SIZE,
        seeds = [
            RECORD_SEED,
            ledger.key().as_ref(),
            ledger.record_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub record: Account<'info, Record>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;

    fn ledger_with_gateway(admin: Pubkey, gateway: Pubkey) -> Ledger {
        Ledger {
            admin,
            gateway,
            ledger_id: 7,
            record_count: 0,
            bump: 255,
        }
    }

    #[test]
    fn records_keep_insertion_order() {
        let admin = Pubkey::new_unique();
        let gateway = Pubkey::new_unique();
        let ledger_key = Pubkey::new_unique();
        let asset = Pubkey::new_unique();
        let mut ledger = ledger_with_gateway(admin, gateway);

        let users: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();
        let mut records = Vec::new();
        for (i, user) in users.iter().enumerate() {
            let writer = if i % 2 == 0 { gateway } else { admin };
            let amount = 100 * (i as u64 + 1);
            let record = ledger
                .next_record(ledger_key, writer, *user, asset, amount, 250)
                .unwrap();
            records.push(record);
        }

        assert_eq!(ledger.record_count, users.len() as u64);
        for (i, user) in users.iter().enumerate() {
            ledger.ensure_index(i as u64).unwrap();
            let record = &records[i];
            assert_eq!(record.index, i as u64);
            assert_eq!(record.ledger, ledger_key);
            assert_eq!(record.user, *user);
            assert_eq!(record.amount, 100 * (i as u64 + 1));
        }
        assert_eq!(records[0].writer, gateway);
        assert_eq!(records[1].writer, admin);
    }

    #[test]
    fn zero_amount_does_not_consume_a_slot() {
        let mut ledger = ledger_with_gateway(Pubkey::new_unique(), Pubkey::new_unique());

        let result = ledger.next_record(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            0,
            250,
        );

        assert_eq!(result.err(), Some(LedgerError::InvalidAmount.into()));
        assert_eq!(ledger.record_count, 0);
    }

    #[test]
    fn stranger_cannot_use_either_write_path() {
        let admin = Pubkey::new_unique();
        let gateway = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let ledger = ledger_with_gateway(admin, gateway);

        assert_eq!(
            ledger.ensure_writer(&alice).unwrap_err(),
            LedgerError::InvalidWriter.into()
        );
        assert_eq!(
            ledger.ensure_admin(&alice).unwrap_err(),
            LedgerError::Unauthorized.into()
        );
        // the gateway does not get the admin path either
        assert_eq!(
            ledger.ensure_admin(&gateway).unwrap_err(),
            LedgerError::Unauthorized.into()
        );
        assert_eq!(ledger.record_count, 0);
    }
}
