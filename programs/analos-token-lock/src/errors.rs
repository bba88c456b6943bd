use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Unlock time must be in the future")]
    UnlockDateInPast,
    #[msg("Lock duration exceeds the maximum allowed")]
    LockDurationTooLong,
    #[msg("Tokens still locked")]
    StillLocked,
    #[msg("Burn amount exceeds the locked balance")]
    BurnAmountExceedsLocked,
    #[msg("Withdraw amount exceeds the locked balance")]
    InsufficientFunds,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Batch accounts do not match the requested burns")]
    InvalidBatchAccounts,
    #[msg("Vault still holds tokens or withheld transfer fees")]
    CannotCloseWithheldFees,
    #[msg("Lock record address does not match its seeds")]
    InvalidLockAddress,
    #[msg("Vault address does not match the lock record")]
    InvalidVault,
    #[msg("Token account is missing or does not match the mint")]
    InvalidTokenAccount,
    #[msg("Unauthorized")]
    Unauthorized,
}
