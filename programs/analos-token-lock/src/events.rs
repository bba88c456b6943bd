use anchor_lang::prelude::*;

#[event]
pub struct TokensLocked {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub lock_id: u64,
    /// Amount the owner sent.
    pub amount: u64,
    /// Amount the vault received and the lock recorded.
    pub received_amount: u64,
    pub unlock_timestamp: i64,
}

#[event]
pub struct TokensBurned {
    pub burner: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

#[event]
pub struct LockedTokensBurned {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub lock_id: u64,
    pub amount: u64,
    pub remaining: u64,
}

#[event]
pub struct BatchTokensBurned {
    pub burner: Pubkey,
    pub mints: Vec<Pubkey>,
    pub amounts: Vec<u64>,
}

#[event]
pub struct TokensWithdrawn {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub lock_id: u64,
    pub amount: u64,
    pub remaining: u64,
}
