//! Error taxonomy for instruction construction and address derivation.
//!
//! Every failure in this crate is a programming or configuration error from
//! the caller's point of view. There is no recovery path here; callers decide
//! whether to abort or rebuild their inputs.

use solana_program::pubkey::Pubkey;
use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Every bump in [0,255] produced an address on the ed25519 curve.
    /// The caller must change the seed material.
    #[error("derivation exhausted: no bump in [0,255] yields an off-curve address")]
    DerivationExhausted,

    #[error("seed is {len} bytes, maximum is {max}")]
    SeedTooLong { len: usize, max: usize },

    #[error("too many seeds: {count}, maximum is {max}")]
    TooManySeeds { count: usize, max: usize },

    /// The owning program address ends with the PDA marker, so it cannot own
    /// seed-derived accounts.
    #[error("owner {0} is itself a program-derived address")]
    IllegalOwner(Pubkey),

    /// An account convention referenced a role that was never bound.
    #[error("no address bound for role `{role}`")]
    MissingAccountBinding { role: String },

    #[error("{what}: expected {expected} bytes, got {got}")]
    DecodeError {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid base58 address for `{field}`: {value}")]
    InvalidAddress { field: &'static str, value: String },
}
