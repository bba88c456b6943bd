use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::custody::WalletBurnCpi;
use crate::engine;
use crate::errors::ErrorCode;
use crate::events::TokensBurned;

#[derive(Accounts)]
pub struct BurnFromWallet<'info> {
    #[account(mut)]
    pub burner: Signer<'info>,

    #[account(mut)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        constraint = burner_token_account.owner == burner.key() @ ErrorCode::InvalidTokenAccount,
        constraint = burner_token_account.mint == token_mint.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub burner_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<BurnFromWallet>, amount: u64) -> Result<()> {
    let accounts = ctx.accounts;
    let mut burner = WalletBurnCpi {
        token_program: accounts.token_program.to_account_info(),
        burner: accounts.burner.to_account_info(),
        entries: vec![(
            accounts.token_mint.to_account_info(),
            accounts.burner_token_account.to_account_info(),
        )],
    };

    let mint = engine::burn_from_wallet(&mut burner, amount)?;

    emit!(TokensBurned {
        burner: accounts.burner.key(),
        mint,
        amount,
    });

    msg!("🔥 Burned {} tokens of {}", amount, mint);

    Ok(())
}
