use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

pub const LOCK_RECORD_SEED: &[u8] = b"lock_record";
pub const VAULT_SEED: &[u8] = b"vault";

pub fn find_lock_record_address(owner: &Pubkey, mint: &Pubkey, lock_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            LOCK_RECORD_SEED,
            owner.as_ref(),
            mint.as_ref(),
            &lock_id.to_le_bytes(),
        ],
        &crate::ID,
    )
}

pub fn find_vault_address(lock_record: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, lock_record.as_ref()], &crate::ID)
}

/// Re-derives the lock record address from its persisted bump. Cheaper than
/// `find_program_address` and rejects any non-canonical bump the record
/// could not have been created with.
pub fn verify_lock_record(
    lock_record: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    lock_id: u64,
    bump: u8,
) -> Result<()> {
    let expected = Pubkey::create_program_address(
        &[
            LOCK_RECORD_SEED,
            owner.as_ref(),
            mint.as_ref(),
            &lock_id.to_le_bytes(),
            &[bump],
        ],
        &crate::ID,
    )
    .map_err(|_| error!(ErrorCode::InvalidLockAddress))?;
    require_keys_eq!(expected, *lock_record, ErrorCode::InvalidLockAddress);
    Ok(())
}

pub fn verify_vault(lock_record: &Pubkey, vault: &Pubkey) -> Result<()> {
    let (expected, _) = find_vault_address(lock_record);
    require_keys_eq!(expected, *vault, ErrorCode::InvalidVault);
    Ok(())
}
