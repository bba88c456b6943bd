use anchor_lang::prelude::*;

/// Source of "now" for maturity checks and of the epoch that selects the
/// active transfer fee.
pub trait LedgerClock {
    fn unix_timestamp(&self) -> Result<i64>;
    fn epoch(&self) -> Result<u64>;
}

/// Reads the Clock sysvar.
pub struct SysvarClock;

impl LedgerClock for SysvarClock {
    fn unix_timestamp(&self) -> Result<i64> {
        Ok(Clock::get()?.unix_timestamp)
    }

    fn epoch(&self) -> Result<u64> {
        Ok(Clock::get()?.epoch)
    }
}
