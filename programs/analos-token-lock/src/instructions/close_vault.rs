use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::accounting::TransferKind;
use crate::clock::{LedgerClock, SysvarClock};
use crate::custody::VaultCpi;
use crate::engine;
use crate::errors::ErrorCode;
use crate::pda::{self, LOCK_RECORD_SEED};
use crate::state::LockRecord;

/// Closes the vault, then Anchor closes the lock record. Rent from both goes
/// back to the owner.
#[derive(Accounts)]
#[instruction(lock_id: u64)]
pub struct CloseVault<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        close = owner,
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

    pub token_mint: InterfaceAccount<'info, Mint>,
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<CloseVault>, lock_id: u64) -> Result<()> {
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

    engine::close_vault(&accounts.lock_record, &mut custody)?;

    msg!("🗑️ Lock {} closed", lock_id);
    msg!("💰 Rent returned to: {}", accounts.owner.key());

    Ok(())
}
