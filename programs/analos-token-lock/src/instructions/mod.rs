#![allow(ambiguous_glob_reexports)]

pub mod burn_batch;
pub mod burn_from_lock;
pub mod burn_from_wallet;
pub mod close_vault;
pub mod lock_tokens;
pub mod withdraw_tokens;

pub use burn_batch::*;
pub use burn_from_lock::*;
pub use burn_from_wallet::*;
pub use close_vault::*;
pub use lock_tokens::*;
pub use withdraw_tokens::*;
