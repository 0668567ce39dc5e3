//! Account reference building.
//!
//! A [`Convention`] declares a program's calling convention: the ordered role
//! list with signer/writable flags. [`Bindings`] map role names to concrete
//! addresses. Building produces the `AccountMeta` sequence in declaration
//! order, which is part of the wire contract with the program and is never
//! reordered or semantically validated here.

use std::collections::BTreeMap;

use solana_program::instruction::AccountMeta;
use solana_program::pubkey::Pubkey;

use crate::errors::{CoreError, CoreResult};

/// One position in a program's account list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub name: &'static str,
    pub signer: bool,
    pub writable: bool,
}

impl Role {
    pub const fn readonly(name: &'static str) -> Self {
        Self { name, signer: false, writable: false }
    }

    pub const fn writable(name: &'static str) -> Self {
        Self { name, signer: false, writable: true }
    }

    pub const fn signer(name: &'static str, writable: bool) -> Self {
        Self { name, signer: true, writable }
    }
}

/// Ordered calling convention of a target program.
#[derive(Debug, Clone)]
pub struct Convention {
    name: &'static str,
    roles: &'static [Role],
}

impl Convention {
    pub const fn new(name: &'static str, roles: &'static [Role]) -> Self {
        Self { name, roles }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn roles(&self) -> &[Role] {
        self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Resolve every role against `bindings`, preserving declaration order.
    pub fn build(&self, bindings: &Bindings) -> CoreResult<Vec<AccountMeta>> {
        self.roles
            .iter()
            .map(|role| {
                let pubkey = bindings.get(role.name).ok_or_else(|| {
                    CoreError::MissingAccountBinding { role: role.name.to_string() }
                })?;
                Ok(AccountMeta {
                    pubkey,
                    is_signer: role.signer,
                    is_writable: role.writable,
                })
            })
            .collect()
    }
}

/// Role name → address map feeding [`Convention::build`].
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    map: BTreeMap<&'static str, Pubkey>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, role: &'static str, address: Pubkey) -> Self {
        self.map.insert(role, address);
        self
    }

    pub fn get(&self, role: &str) -> Option<Pubkey> {
        self.map.get(role).copied()
    }
}

/// Account order of the greeting instruction, as the deployed program reads
/// it with `next_account_info`.
pub fn greet_convention() -> Convention {
    const ROLES: &[Role] = &[
        Role::writable("greeted"),
        Role::readonly("token_program"),
        Role::readonly("derived_state"),
        Role::readonly("seed_key"),
        Role::readonly("swap_program"),
    ];
    Convention::new("greet", ROLES)
}

/// Account order of the swap instruction. Nineteen accounts; only the
/// authority signs.
pub fn swap_convention() -> Convention {
    const ROLES: &[Role] = &[
        Role::writable("market"),
        Role::writable("request_queue"),
        Role::writable("event_queue"),
        Role::writable("bids"),
        Role::writable("asks"),
        Role::writable("coin_vault"),
        Role::writable("pc_vault"),
        Role::readonly("vault_signer"),
        Role::writable("open_orders"),
        Role::writable("order_payer_token_account"),
        Role::writable("coin_wallet"),
        Role::writable("pc_wallet"),
        Role::signer("authority", true),
        Role::readonly("dex_program"),
        Role::readonly("token_program"),
        Role::readonly("swap_program"),
        Role::readonly("rent"),
        Role::readonly("derived_state"),
        Role::readonly("seed_key"),
    ];
    Convention::new("swap", ROLES)
}
