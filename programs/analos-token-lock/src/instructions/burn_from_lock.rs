use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::accounting::TransferKind;
use crate::clock::{LedgerClock, SysvarClock};
use crate::custody::VaultCpi;
use crate::engine;
use crate::errors::ErrorCode;
use crate::events::LockedTokensBurned;
use crate::pda::{self, LOCK_RECORD_SEED};
use crate::state::LockRecord;

#[derive(Accounts)]
#[instruction(amount: u64, lock_id: u64)]
pub struct BurnFromLock<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ ErrorCode::Unauthorized,
        seeds = [
            LOCK_RECORD_SEED,
            owner.key().as_ref(),
            token_mint.key().as_ref(),
            &lock_id.to_le_bytes()
        ],
        bump = lock_record.bump
    )]
    pub lock_record: Account<'info, LockRecord>,

    #[account(mut, address = lock_record.vault @ ErrorCode::InvalidVault)]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<BurnFromLock>, amount: u64, lock_id: u64) -> Result<()> {
    let accounts = ctx.accounts;

    let lock_record_key = accounts.lock_record.key();
    pda::verify_lock_record(
        &lock_record_key,
        &accounts.owner.key(),
        &accounts.token_mint.key(),
        lock_id,
        accounts.lock_record.bump,
    )?;
    pda::verify_vault(&lock_record_key, &accounts.vault.key())?;

    let mint_info = accounts.token_mint.to_account_info();
    let kind = TransferKind::from_mint(&mint_info, SysvarClock.epoch()?)?;
    let mut custody = VaultCpi {
        token_program: accounts.token_program.to_account_info(),
        mint: mint_info,
        decimals: accounts.token_mint.decimals,
        vault: &mut accounts.vault,
        authority: accounts.lock_record.to_account_info(),
        owner: accounts.owner.to_account_info(),
        owner_token_account: None,
        signer: accounts.lock_record.signer(),
        kind,
    };

    let remaining = engine::burn_from_lock(&mut accounts.lock_record, amount, &mut custody)?;

    emit!(LockedTokensBurned {
        owner: accounts.lock_record.owner,
        mint: accounts.lock_record.mint,
        lock_id,
        amount,
        remaining,
    });

    msg!("🔥 Burned {} from lock {}", amount, lock_id);
    msg!("📊 Remaining locked: {}", remaining);

    Ok(())
}
