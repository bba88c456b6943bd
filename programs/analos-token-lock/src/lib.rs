#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

// Security.txt implementation for program verification
#[cfg(not(feature = "no-entrypoint"))]
use {default_env::default_env, solana_security_txt::security_txt};

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Analos Token Lock",
    project_url: "https://github.com/Dubie-eth/analos-programs",
    contacts: "email:security@analos.io,twitter:@EWildn,telegram:t.me/Dubie_420",
    policy: "https://github.com/Dubie-eth/analos-programs/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/Dubie-eth/analos-programs",
    source_revision: default_env!("GITHUB_SHA", ""),
    source_release: "v0.2.0",
    auditors: "None",
    acknowledgements: "Thank you to all security researchers who help keep Analos secure!"
}

pub mod accounting;
pub mod clock;
pub mod config;
pub mod custody;
pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;


use instructions::*;

declare_id!("5cwfU6BAdJu8eJ9rwBvKqSdfpBifXY2rfxDf8Vc9ucvb");

/// Token Lock Program - time-locked vaults, one per lock id
/// Supports SPL Token and Token-2022 mints, including transfer fees
#[program]
pub mod analos_token_lock {
    use super::*;

    /// Lock `amount` until `unlock_timestamp` under a fresh `lock_id`
    pub fn lock_tokens(
        ctx: Context<LockTokens>,
        amount: u64,
        unlock_timestamp: i64,
        lock_id: u64,
    ) -> Result<()> {
        lock_tokens::handler(ctx, amount, unlock_timestamp, lock_id)
    }

    /// Burn straight from the signer's own token account
    pub fn burn_from_wallet(ctx: Context<BurnFromWallet>, amount: u64) -> Result<()> {
        burn_from_wallet::handler(ctx, amount)
    }

    /// Burn locked tokens, matured or not
    pub fn burn_from_lock(ctx: Context<BurnFromLock>, amount: u64, lock_id: u64) -> Result<()> {
        burn_from_lock::handler(ctx, amount, lock_id)
    }

    /// Burn from several wallet token accounts in one instruction
    pub fn burn_batch<'info>(
        ctx: Context<'_, '_, '_, 'info, BurnBatch<'info>>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        burn_batch::handler(ctx, amounts)
    }

    /// Withdraw matured tokens, in full or in part
    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, lock_id: u64, amount: u64) -> Result<()> {
        withdraw_tokens::handler(ctx, lock_id, amount)
    }

    /// Close an emptied lock and its vault
    pub fn close_vault(ctx: Context<CloseVault>, lock_id: u64) -> Result<()> {
        close_vault::handler(ctx, lock_id)
    }
}
