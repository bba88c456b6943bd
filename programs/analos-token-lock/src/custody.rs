use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    self, Burn, CloseAccount, TokenAccount, TransferChecked,
};

use crate::accounting::{withheld_amount, TransferKind};
use crate::errors::ErrorCode;
use crate::state::LockSigner;

/// Token operations on one lock's vault. The vault's authority is the lock
/// record PDA, so every outgoing operation is signed with its seeds.
pub trait TokenCustody {
    fn transfer_kind(&self) -> TransferKind;

    /// Spendable vault balance, re-read from the ledger.
    fn vault_balance(&mut self) -> Result<u64>;

    /// Transfer fees withheld inside the vault, pending harvest by the
    /// mint's withdraw authority.
    fn withheld_fees(&self) -> Result<u64>;

    /// Owner wallet -> vault, signed by the owner.
    fn deposit_to_vault(&mut self, amount: u64) -> Result<()>;

    /// Vault -> owner wallet.
    fn release_from_vault(&mut self, amount: u64) -> Result<()>;

    fn burn_from_vault(&mut self, amount: u64) -> Result<()>;

    /// Deallocates the vault, rent goes to the owner.
    fn close_vault(&mut self) -> Result<()>;
}

/// Burns from wallet token accounts on the burner's own signature.
pub trait WalletBurner {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Burns `amount` from entry `index`, returning the mint burned.
    fn burn(&mut self, index: usize, amount: u64) -> Result<Pubkey>;
}

// ========== CPI ==========

pub struct VaultCpi<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub decimals: u8,
    pub vault: &'a mut InterfaceAccount<'info, TokenAccount>,
    /// The lock record account, signing as vault authority.
    pub authority: AccountInfo<'info>,
    pub owner: AccountInfo<'info>,
    pub owner_token_account: Option<AccountInfo<'info>>,
    pub signer: LockSigner,
    pub kind: TransferKind,
}

impl<'a, 'info> VaultCpi<'a, 'info> {
    fn owner_token_account(&self) -> Result<AccountInfo<'info>> {
        self.owner_token_account
            .clone()
            .ok_or_else(|| error!(ErrorCode::InvalidTokenAccount))
    }
}

impl<'a, 'info> TokenCustody for VaultCpi<'a, 'info> {
    fn transfer_kind(&self) -> TransferKind {
        self.kind
    }

    fn vault_balance(&mut self) -> Result<u64> {
        self.vault.reload()?;
        Ok(self.vault.amount)
    }

    fn withheld_fees(&self) -> Result<u64> {
        let vault_info = self.vault.to_account_info();
        let vault_data = vault_info.try_borrow_data()?;
        Ok(withheld_amount(&vault_data))
    }

    fn deposit_to_vault(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.owner_token_account()?,
            mint: self.mint.clone(),
            to: self.vault.to_account_info(),
            authority: self.owner.clone(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.clone(), cpi_accounts);
        token_interface::transfer_checked(cpi_ctx, amount, self.decimals)
    }

    fn release_from_vault(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.clone(),
            to: self.owner_token_account()?,
            authority: self.authority.clone(),
        };
        self.signer.with_seeds(|signer| {
            let cpi_ctx =
                CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, signer);
            token_interface::transfer_checked(cpi_ctx, amount, self.decimals)
        })
    }

    fn burn_from_vault(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = Burn {
            mint: self.mint.clone(),
            from: self.vault.to_account_info(),
            authority: self.authority.clone(),
        };
        self.signer.with_seeds(|signer| {
            let cpi_ctx =
                CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, signer);
            token_interface::burn(cpi_ctx, amount)
        })
    }

    fn close_vault(&mut self) -> Result<()> {
        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.owner.clone(),
            authority: self.authority.clone(),
        };
        self.signer.with_seeds(|signer| {
            let cpi_ctx =
                CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, signer);
            token_interface::close_account(cpi_ctx)
        })
    }
}

pub struct WalletBurnCpi<'info> {
    pub token_program: AccountInfo<'info>,
    pub burner: AccountInfo<'info>,
    /// `(mint, token_account)` pairs.
    pub entries: Vec<(AccountInfo<'info>, AccountInfo<'info>)>,
}

impl<'info> WalletBurnCpi<'info> {
    /// Builds the burn list from a flat `[mint, token_account, ...]` slice,
    /// rejecting any token account that is not the burner's own account of
    /// the paired mint.
    pub fn from_pairs(
        token_program: AccountInfo<'info>,
        burner: AccountInfo<'info>,
        accounts: &[AccountInfo<'info>],
    ) -> Result<Self> {
        require!(accounts.len() % 2 == 0, ErrorCode::InvalidBatchAccounts);

        let mut entries = Vec::with_capacity(accounts.len() / 2);
        for pair in accounts.chunks_exact(2) {
            let (mint, token_account) = (&pair[0], &pair[1]);
            require_keys_eq!(*mint.owner, token_program.key(), ErrorCode::InvalidBatchAccounts);
            require_keys_eq!(
                *token_account.owner,
                token_program.key(),
                ErrorCode::InvalidBatchAccounts
            );
            {
                let data = token_account.try_borrow_data()?;
                let state = TokenAccount::try_deserialize(&mut &data[..])
                    .map_err(|_| error!(ErrorCode::InvalidBatchAccounts))?;
                require_keys_eq!(state.owner, burner.key(), ErrorCode::InvalidBatchAccounts);
                require_keys_eq!(state.mint, mint.key(), ErrorCode::InvalidBatchAccounts);
            }
            entries.push((mint.clone(), token_account.clone()));
        }

        Ok(Self {
            token_program,
            burner,
            entries,
        })
    }
}

impl<'info> WalletBurner for WalletBurnCpi<'info> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn burn(&mut self, index: usize, amount: u64) -> Result<Pubkey> {
        let (mint, token_account) = self
            .entries
            .get(index)
            .ok_or_else(|| error!(ErrorCode::InvalidBatchAccounts))?;
        let cpi_accounts = Burn {
            mint: mint.clone(),
            from: token_account.clone(),
            authority: self.burner.clone(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.clone(), cpi_accounts);
        token_interface::burn(cpi_ctx, amount)?;
        Ok(mint.key())
    }
}
