use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenInterface;

use crate::config::LockerConfig;
use crate::custody::WalletBurnCpi;
use crate::engine;
use crate::errors::ErrorCode;
use crate::events::BatchTokensBurned;

/// Remaining accounts carry the batch as `[mint_0, token_account_0, mint_1,
/// token_account_1, ...]`, all writable.
#[derive(Accounts)]
pub struct BurnBatch<'info> {
    #[account(mut)]
    pub burner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, BurnBatch<'info>>,
    amounts: Vec<u64>,
) -> Result<()> {
    require!(
        ctx.remaining_accounts.len() == amounts.len() * 2,
        ErrorCode::InvalidBatchAccounts
    );

    let mut burner = WalletBurnCpi::from_pairs(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.burner.to_account_info(),
        ctx.remaining_accounts,
    )?;
    let mints = engine::burn_batch(&mut burner, &amounts, &LockerConfig::DEFAULT)?;

    msg!("🔥 Batch burned {} mints", mints.len());

    emit!(BatchTokensBurned {
        burner: ctx.accounts.burner.key(),
        mints,
        amounts,
    });

    Ok(())
}
