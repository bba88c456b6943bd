/// Five years, in seconds.
pub const MAX_LOCK_DURATION: i64 = 5 * 365 * 24 * 60 * 60;

/// Upper bound on `(mint, token_account)` pairs in one `burn_batch`.
pub const MAX_BATCH_BURNS: usize = 10;

/// Limits the engine enforces. Handlers pass [`LockerConfig::DEFAULT`];
/// tests build their own to exercise the edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockerConfig {
    pub max_lock_duration: i64,
    pub max_batch_burns: usize,
}

impl LockerConfig {
    pub const DEFAULT: Self = Self {
        max_lock_duration: MAX_LOCK_DURATION,
        max_batch_burns: MAX_BATCH_BURNS,
    };
}

impl Default for LockerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
