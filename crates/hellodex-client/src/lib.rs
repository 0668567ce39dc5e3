//! hellodex-client
//!
//! RPC-facing half of the hellodex demo client:
//! - a `Session` threading the connection, payer and program id
//! - transaction assembly, signer validation and submit/confirm
//! - payer funding bootstrap (airdrop top-up)
//! - greeting account setup, greet and swap operations
//! - state reads and key material loading
//!
//! All network calls are blocking and sequential; the confirmation deadline
//! is the only time bound.

pub mod context;
pub mod errors;
pub mod funding;
pub mod keyfile;
pub mod ops;
pub mod reader;
pub mod submit;

pub use crate::context::Session;
pub use crate::errors::{ClientError, ClientResult};
