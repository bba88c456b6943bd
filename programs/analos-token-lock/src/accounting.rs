use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::{
    extension::{
        transfer_fee::{TransferFeeAmount, TransferFeeConfig, MAX_FEE_BASIS_POINTS},
        BaseStateWithExtensions, StateWithExtensions,
    },
    state::{Account as Token2022Account, Mint as Token2022Mint},
};

use crate::errors::ErrorCode;

/// How a transfer of this mint behaves at the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferKind {
    /// SPL Token, or Token-2022 without a transfer fee.
    Plain,
    /// Token-2022 `TransferFeeConfig` mint; the destination is credited
    /// `amount - fee` and the fee is withheld inside the destination account.
    FeeAware { basis_points: u16, maximum_fee: u64 },
}

impl TransferKind {
    /// Inspects the mint's owning program and extensions. The fee schedule
    /// in force depends on the epoch.
    pub fn from_mint(mint: &AccountInfo, epoch: u64) -> Result<Self> {
        if *mint.owner != anchor_spl::token_2022::ID {
            return Ok(Self::Plain);
        }
        let data = mint.try_borrow_data()?;
        let state = StateWithExtensions::<Token2022Mint>::unpack(&data)?;
        let kind = match state.get_extension::<TransferFeeConfig>() {
            Ok(config) => {
                let fee = config.get_epoch_fee(epoch);
                Self::FeeAware {
                    basis_points: u16::from(fee.transfer_fee_basis_points),
                    maximum_fee: u64::from(fee.maximum_fee),
                }
            }
            Err(_) => Self::Plain,
        };
        Ok(kind)
    }

    /// Fee charged on a transfer of `amount`, rounded up and capped like
    /// Token-2022 does.
    pub fn fee_for(&self, amount: u64) -> Result<u64> {
        match *self {
            Self::Plain => Ok(0),
            Self::FeeAware {
                basis_points,
                maximum_fee,
            } => {
                if basis_points == 0 || amount == 0 {
                    return Ok(0);
                }
                let scale = u128::from(MAX_FEE_BASIS_POINTS);
                let raw = u128::from(amount)
                    .checked_mul(u128::from(basis_points))
                    .and_then(|n| n.checked_add(scale - 1))
                    .map(|n| n / scale)
                    .ok_or(ErrorCode::MathOverflow)?;
                let fee = u64::try_from(raw).map_err(|_| ErrorCode::MathOverflow)?;
                Ok(fee.min(maximum_fee))
            }
        }
    }

    /// What the destination is credited for a transfer of `amount`.
    pub fn received_for(&self, amount: u64) -> Result<u64> {
        let fee = self.fee_for(amount)?;
        amount
            .checked_sub(fee)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }

    pub fn changes_received_amount(&self) -> bool {
        matches!(
            *self,
            Self::FeeAware { basis_points, maximum_fee } if basis_points > 0 && maximum_fee > 0
        )
    }
}

/// Fee residue withheld inside a token account. Anything that is not a
/// Token-2022 account carrying `TransferFeeAmount` holds none.
pub fn withheld_amount(token_account_data: &[u8]) -> u64 {
    StateWithExtensions::<Token2022Account>::unpack(token_account_data)
        .ok()
        .and_then(|state| {
            state
                .get_extension::<TransferFeeAmount>()
                .ok()
                .map(|extension| u64::from(extension.withheld_amount))
        })
        .unwrap_or(0)
}
