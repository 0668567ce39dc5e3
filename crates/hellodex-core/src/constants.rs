//! Constants shared across the client.
//!
//! Keep these stable because they affect address derivation and the account
//! order sent to the deployed programs.

/// Seed string for the greeting account derived from the payer.
pub const GREETING_SEED: &str = "hello";

/// Marker appended during PDA hashing. Addresses produced this way are
/// guaranteed off-curve, i.e. unspendable by any private key.
pub const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Maximum length of a single derivation seed, in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds accepted by bump-search derivation.
pub const MAX_SEEDS: usize = 16;

/// SPL token program.
pub const TOKEN_PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Swap program referenced by the greeting instruction's account list.
pub const GREET_SWAP_PROGRAM: &str = "Cz2NJCKXvZMwDrSuaL9Wu4gi8r5AQGko8fW6gpUTxGAu";

/// Deployed serum-swap wrapper program.
pub const SERUM_SWAP_PROGRAM: &str = "7DcraPU81PGGLrDJ59T7WY4H453jpj5TEgzeLSBWwSmo";

/// Serum DEX program the swap wrapper trades against.
pub const SERUM_DEX_PROGRAM: &str = "DESVgJVGajEgKGXhb6XmqDHGz3VjdgP7rEVESBgxmroY";

/// Base key whose bytes seed the program-state PDA.
pub const SEED_KEY: &str = "6uV7Vy4V7ktpTydJe7M9fowRBBNH6vKxxVkJ9R4wCMwH";
