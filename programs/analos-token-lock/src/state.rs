use anchor_lang::prelude::*;

// ========== STATE ==========

/// One time-locked deposit. Lives at
/// `[b"lock_record", owner, mint, id.to_le_bytes()]` and is the token
/// authority of its vault.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct LockRecord {
    pub bump: u8,              // 1
    pub owner: Pubkey,         // 32
    pub mint: Pubkey,          // 32
    pub vault: Pubkey,         // 32
    pub amount: u64,           // 8
    pub unlock_timestamp: i64, // 8
    pub id: u64,               // 8
}

impl LockRecord {
    pub const SPACE: usize = 1 + 32 + 32 + 32 + 8 + 8 + 8; // 121 bytes

    pub fn is_unlocked(&self, now: i64) -> bool {
        now >= self.unlock_timestamp
    }

    /// Zero once matured.
    pub fn seconds_until_unlock(&self, now: i64) -> i64 {
        self.unlock_timestamp.saturating_sub(now).max(0)
    }

    pub fn signer(&self) -> LockSigner {
        LockSigner {
            owner: self.owner,
            mint: self.mint,
            lock_id: self.id,
            bump: self.bump,
        }
    }
}

/// Seed material for signing as the lock record PDA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockSigner {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub lock_id: u64,
    pub bump: u8,
}

impl LockSigner {
    /// Runs `f` with the signer seeds borrowed for the duration of the call.
    pub fn with_seeds<R>(&self, f: impl FnOnce(&[&[&[u8]]]) -> R) -> R {
        let lock_id = self.lock_id.to_le_bytes();
        let bump = [self.bump];
        let seeds: &[&[u8]] = &[
            crate::pda::LOCK_RECORD_SEED,
            self.owner.as_ref(),
            self.mint.as_ref(),
            &lock_id,
            &bump,
        ];
        f(&[seeds])
    }
}
