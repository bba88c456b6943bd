//! Lock lifecycle: validation and accounting for every instruction.
//!
//! Each operation validates first, then calls the token capability, then
//! writes the lock record. A failed capability call therefore never leaves a
//! half-updated record behind, and the runtime discards the rest.

use anchor_lang::prelude::*;

use crate::clock::LedgerClock;
use crate::config::LockerConfig;
use crate::custody::{TokenCustody, WalletBurner};
use crate::errors::ErrorCode;
use crate::state::LockRecord;

/// Everything needed to initialise a fresh lock record.
#[derive(Clone, Copy, Debug)]
pub struct LockRequest {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub lock_id: u64,
    pub bump: u8,
    pub amount: u64,
    pub unlock_timestamp: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockReceipt {
    /// What actually landed in the vault and was recorded.
    pub received: u64,
    /// Fee the mint's schedule predicts for the deposit.
    pub expected_fee: u64,
}

pub fn lock_tokens<C, K>(
    record: &mut LockRecord,
    request: &LockRequest,
    custody: &mut C,
    clock: &K,
    config: &LockerConfig,
) -> Result<LockReceipt>
where
    C: TokenCustody,
    K: LedgerClock,
{
    require!(request.amount > 0, ErrorCode::ZeroAmount);

    let now = clock.unix_timestamp()?;
    require!(request.unlock_timestamp > now, ErrorCode::UnlockDateInPast);
    let duration = request
        .unlock_timestamp
        .checked_sub(now)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(
        duration <= config.max_lock_duration,
        ErrorCode::LockDurationTooLong
    );

    // The recorded amount is what the vault gained, whatever the mint charged.
    let balance_before = custody.vault_balance()?;
    custody.deposit_to_vault(request.amount)?;
    let balance_after = custody.vault_balance()?;
    let received = balance_after
        .checked_sub(balance_before)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(received > 0, ErrorCode::ZeroAmount);

    let expected_fee = custody.transfer_kind().fee_for(request.amount)?;
    if received.checked_add(expected_fee) != Some(request.amount) {
        msg!(
            "⚠️ Vault received {} of {} (schedule predicted fee {})",
            received,
            request.amount,
            expected_fee
        );
    }

    record.bump = request.bump;
    record.owner = request.owner;
    record.mint = request.mint;
    record.vault = request.vault;
    record.amount = received;
    record.unlock_timestamp = request.unlock_timestamp;
    record.id = request.lock_id;

    Ok(LockReceipt {
        received,
        expected_fee,
    })
}

/// Burns locked tokens out of the vault. Allowed before maturity.
pub fn burn_from_lock<C: TokenCustody>(
    record: &mut LockRecord,
    amount: u64,
    custody: &mut C,
) -> Result<u64> {
    require!(amount > 0, ErrorCode::ZeroAmount);
    require!(
        amount <= record.amount,
        ErrorCode::BurnAmountExceedsLocked
    );

    custody.burn_from_vault(amount)?;

    record.amount = record
        .amount
        .checked_sub(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    Ok(record.amount)
}

/// Releases matured tokens to the owner. The owner's wallet is credited
/// `amount` minus whatever the mint charges on the outgoing transfer.
pub fn withdraw<C, K>(
    record: &mut LockRecord,
    amount: u64,
    custody: &mut C,
    clock: &K,
) -> Result<u64>
where
    C: TokenCustody,
    K: LedgerClock,
{
    let now = clock.unix_timestamp()?;
    if !record.is_unlocked(now) {
        msg!(
            "🔒 Lock {} matures in {}s",
            record.id,
            record.seconds_until_unlock(now)
        );
        return err!(ErrorCode::StillLocked);
    }
    require!(amount <= record.amount, ErrorCode::InsufficientFunds);
    if amount == 0 {
        return Ok(record.amount);
    }

    custody.release_from_vault(amount)?;

    record.amount = record
        .amount
        .checked_sub(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    Ok(record.amount)
}

/// Closes the vault once nothing spendable or withheld is left in it. The
/// lock record itself is deallocated by the caller after this returns.
pub fn close_vault<C: TokenCustody>(record: &LockRecord, custody: &mut C) -> Result<()> {
    let balance = custody.vault_balance()?;
    let withheld = custody.withheld_fees()?;
    if record.amount != 0 || balance != 0 || withheld != 0 {
        msg!(
            "⏳ Vault not closable: locked {} balance {} withheld {}",
            record.amount,
            balance,
            withheld
        );
        return err!(ErrorCode::CannotCloseWithheldFees);
    }

    custody.close_vault()
}

pub fn burn_from_wallet<B: WalletBurner>(burner: &mut B, amount: u64) -> Result<Pubkey> {
    require!(amount > 0, ErrorCode::ZeroAmount);
    require!(burner.len() == 1, ErrorCode::InvalidBatchAccounts);
    burner.burn(0, amount)
}

/// Burns `amounts[i]` from wallet entry `i`. The whole batch is validated
/// before the first burn, so a malformed batch burns nothing.
pub fn burn_batch<B: WalletBurner>(
    burner: &mut B,
    amounts: &[u64],
    config: &LockerConfig,
) -> Result<Vec<Pubkey>> {
    require!(!amounts.is_empty(), ErrorCode::InvalidBatchAccounts);
    require!(
        amounts.len() == burner.len(),
        ErrorCode::InvalidBatchAccounts
    );
    require!(
        amounts.len() <= config.max_batch_burns,
        ErrorCode::InvalidBatchAccounts
    );
    require!(amounts.iter().all(|amount| *amount > 0), ErrorCode::ZeroAmount);

    amounts
        .iter()
        .enumerate()
        .map(|(index, amount)| burner.burn(index, *amount))
        .collect()
}
