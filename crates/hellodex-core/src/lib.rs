//! hellodex-core
//!
//! Pure instruction-construction logic for the hellodex demo client:
//! - deterministic address derivation (seed-string and bump-search PDAs)
//! - ordered account conventions with signer/writable flags
//! - fixed binary instruction payloads
//! - greeting account state layout
//! - configuration records for the deployed market/program instances
//!
//! Nothing in this crate performs I/O; every function is a deterministic
//! mapping from its inputs. Transaction submission lives in
//! `hellodex-client`.

pub mod accounts;
pub mod config;
pub mod constants;
pub mod errors;
pub mod instructions;
pub mod payload;
pub mod pda;
pub mod state;

pub use crate::errors::{CoreError, CoreResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::accounts::{greet_convention, swap_convention, Bindings, Convention, Role};
    pub use crate::config::{GreetConfig, GreetKeys, SwapConfig, SwapKeys, SwapSide};
    pub use crate::instructions::{build_greet_instruction, build_swap_instruction};
    pub use crate::payload::{decode_greet, decode_swap, InstructionPayload};
    pub use crate::pda::{derive_with_seed, find_program_address};
    pub use crate::state::{GreetingRecord, GREETING_RECORD_LEN};
    pub use crate::{CoreError, CoreResult};
}
