use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::accounting::TransferKind;
use crate::clock::{LedgerClock, SysvarClock};
use crate::config::LockerConfig;
use crate::custody::VaultCpi;
use crate::engine::{self, LockRequest};
use crate::errors::ErrorCode;
use crate::events::TokensLocked;
use crate::pda::{self, LOCK_RECORD_SEED, VAULT_SEED};
use crate::state::{LockRecord, LockSigner};

#[derive(Accounts)]
#[instruction(amount: u64, unlock_timestamp: i64, lock_id: u64)]
pub struct LockTokens<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = owner,
        space = 8 + LockRecord::SPACE,
        seeds = [
            LOCK_RECORD_SEED,
            owner.key().as_ref(),
            token_mint.key().as_ref(),
            &lock_id.to_le_bytes()
        ],
        bump
    )]
    pub lock_record: Account<'info, LockRecord>,

    #[account(
        init,
        payer = owner,
        seeds = [VAULT_SEED, lock_record.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = lock_record,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = owner_token_account.owner == owner.key() @ ErrorCode::InvalidTokenAccount,
        constraint = owner_token_account.mint == token_mint.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(
    ctx: Context<LockTokens>,
    amount: u64,
    unlock_timestamp: i64,
    lock_id: u64,
) -> Result<()> {
    let bump = ctx.bumps.lock_record;
    let accounts = ctx.accounts;
    let clock = SysvarClock;

    let lock_record_key = accounts.lock_record.key();
    let request = LockRequest {
        owner: accounts.owner.key(),
        mint: accounts.token_mint.key(),
        vault: accounts.vault.key(),
        lock_id,
        bump,
        amount,
        unlock_timestamp,
    };
    pda::verify_lock_record(
        &lock_record_key,
        &request.owner,
        &request.mint,
        lock_id,
        bump,
    )?;
    pda::verify_vault(&lock_record_key, &request.vault)?;

    let mint_info = accounts.token_mint.to_account_info();
    let kind = TransferKind::from_mint(&mint_info, clock.epoch()?)?;
    let mut custody = VaultCpi {
        token_program: accounts.token_program.to_account_info(),
        mint: mint_info,
        decimals: accounts.token_mint.decimals,
        vault: &mut accounts.vault,
        authority: accounts.lock_record.to_account_info(),
        owner: accounts.owner.to_account_info(),
        owner_token_account: Some(accounts.owner_token_account.to_account_info()),
        signer: LockSigner {
            owner: request.owner,
            mint: request.mint,
            lock_id,
            bump,
        },
        kind,
    };

    let receipt = engine::lock_tokens(
        &mut accounts.lock_record,
        &request,
        &mut custody,
        &clock,
        &LockerConfig::DEFAULT,
    )?;

    emit!(TokensLocked {
        owner: request.owner,
        mint: request.mint,
        lock_id,
        amount,
        received_amount: receipt.received,
        unlock_timestamp,
    });

    msg!("🔒 Lock {} created: {} tokens", lock_id, receipt.received);
    if kind.changes_received_amount() {
        msg!("💸 Transfer fee withheld: {}", amount.saturating_sub(receipt.received));
    }
    msg!("⏰ Unlocks at: {}", unlock_timestamp);

    Ok(())
}
