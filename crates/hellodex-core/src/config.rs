//! Configuration records for the deployed program instances.
//!
//! The swap account set used to live as hardcoded keys inside per-direction
//! functions; it is now one explicit, serializable record. Addresses are
//! carried as base58 strings (the form they appear in on explorers and in
//! JSON config files) and parsed once via [`SwapConfig::resolve`] /
//! [`GreetConfig::resolve`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use crate::constants::{GREET_SWAP_PROGRAM, SEED_KEY, SERUM_DEX_PROGRAM, SERUM_SWAP_PROGRAM, TOKEN_PROGRAM};
use crate::errors::{CoreError, CoreResult};

/// Which side of the market the swap takes. Picks the wallet that funds the
/// order: the price-currency wallet for a bid, the coin wallet for an ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapSide {
    Bid,
    Ask,
}

impl FromStr for SwapSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bid" => Ok(SwapSide::Bid),
            "ask" => Ok(SwapSide::Ask),
            other => Err(format!("unknown side `{other}`, expected bid or ask")),
        }
    }
}

/// Fixed account set of one deployed market/program instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapConfig {
    pub market: String,
    pub request_queue: String,
    pub event_queue: String,
    pub bids: String,
    pub asks: String,
    pub coin_vault: String,
    pub pc_vault: String,
    pub vault_signer: String,
    pub open_orders: String,
    pub coin_wallet: String,
    pub pc_wallet: String,
    pub dex_program: String,
    pub token_program: String,
    pub swap_program: String,
    pub seed_key: String,
}

impl SwapConfig {
    /// Built-in default market instance for the demo flows.
    pub fn serum_devnet() -> Self {
        Self {
            market: "3CykJJiyHfukKpA21sKwkXP6hXz7zLbCWVBZjNVGSfCy".to_string(),
            request_queue: "AUSjBwS9U7NZoL6PTyELJhyRysBPrE2NqpsTqgUZxuFi".to_string(),
            event_queue: "5B1LgbcXWimNBW1QicNkfQhq9KLifpWDrRH3Z8F8F4rJ".to_string(),
            bids: "GHbfKNTophWGjGeUz8nUsnkUaLaQRQgqGtoks37d75PY".to_string(),
            asks: "wUcxHXUULypUwqnvPhxh24yg9WdLLmFmwrfrmfSLb2K".to_string(),
            coin_vault: "Hq7GZE2WRw32p3wBwTEu9JAmVR1vSLfQTSdFpT63S3kh".to_string(),
            pc_vault: "HNEzsThJVeVGYgo6RQVLyWjXLusBv6GkpDbm9s8irEY4".to_string(),
            vault_signer: "EA6nyphSNDWBFEUshPFWnG99jx6Tucp8S7zo57f9phwa".to_string(),
            open_orders: "GcH8RR6xpdNc29267DAgCsNwZdQg32RLRGKWMa6h2cVE".to_string(),
            coin_wallet: "Bz5qNGZJLyAxdguHy5Ltpy6w9LQA4x8iokNwcvQ3DRWn".to_string(),
            pc_wallet: "Gra55eW39bb4UB25yd8CdqiwagJ7LcvQagMEhf7PcECP".to_string(),
            dex_program: SERUM_DEX_PROGRAM.to_string(),
            token_program: TOKEN_PROGRAM.to_string(),
            swap_program: SERUM_SWAP_PROGRAM.to_string(),
            seed_key: SEED_KEY.to_string(),
        }
    }

    pub fn resolve(&self) -> CoreResult<SwapKeys> {
        Ok(SwapKeys {
            market: parse_address("market", &self.market)?,
            request_queue: parse_address("request_queue", &self.request_queue)?,
            event_queue: parse_address("event_queue", &self.event_queue)?,
            bids: parse_address("bids", &self.bids)?,
            asks: parse_address("asks", &self.asks)?,
            coin_vault: parse_address("coin_vault", &self.coin_vault)?,
            pc_vault: parse_address("pc_vault", &self.pc_vault)?,
            vault_signer: parse_address("vault_signer", &self.vault_signer)?,
            open_orders: parse_address("open_orders", &self.open_orders)?,
            coin_wallet: parse_address("coin_wallet", &self.coin_wallet)?,
            pc_wallet: parse_address("pc_wallet", &self.pc_wallet)?,
            dex_program: parse_address("dex_program", &self.dex_program)?,
            token_program: parse_address("token_program", &self.token_program)?,
            swap_program: parse_address("swap_program", &self.swap_program)?,
            seed_key: parse_address("seed_key", &self.seed_key)?,
        })
    }
}

/// Parsed form of [`SwapConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapKeys {
    pub market: Pubkey,
    pub request_queue: Pubkey,
    pub event_queue: Pubkey,
    pub bids: Pubkey,
    pub asks: Pubkey,
    pub coin_vault: Pubkey,
    pub pc_vault: Pubkey,
    pub vault_signer: Pubkey,
    pub open_orders: Pubkey,
    pub coin_wallet: Pubkey,
    pub pc_wallet: Pubkey,
    pub dex_program: Pubkey,
    pub token_program: Pubkey,
    pub swap_program: Pubkey,
    pub seed_key: Pubkey,
}

impl SwapKeys {
    /// Token account the order is paid from.
    pub fn order_payer(&self, side: SwapSide) -> Pubkey {
        match side {
            SwapSide::Bid => self.pc_wallet,
            SwapSide::Ask => self.coin_wallet,
        }
    }
}

/// Fixed addresses referenced by the greeting instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetConfig {
    pub token_program: String,
    pub swap_program: String,
    pub seed_key: String,
}

impl Default for GreetConfig {
    fn default() -> Self {
        Self {
            token_program: TOKEN_PROGRAM.to_string(),
            swap_program: GREET_SWAP_PROGRAM.to_string(),
            seed_key: SEED_KEY.to_string(),
        }
    }
}

impl GreetConfig {
    pub fn resolve(&self) -> CoreResult<GreetKeys> {
        Ok(GreetKeys {
            token_program: parse_address("token_program", &self.token_program)?,
            swap_program: parse_address("swap_program", &self.swap_program)?,
            seed_key: parse_address("seed_key", &self.seed_key)?,
        })
    }
}

/// Parsed form of [`GreetConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetKeys {
    pub token_program: Pubkey,
    pub swap_program: Pubkey,
    pub seed_key: Pubkey,
}

fn parse_address(field: &'static str, value: &str) -> CoreResult<Pubkey> {
    value.parse().map_err(|_| CoreError::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_configs_resolve() {
        SwapConfig::serum_devnet().resolve().unwrap();
        GreetConfig::default().resolve().unwrap();
    }

    #[test]
    fn order_payer_follows_side() {
        let keys = SwapConfig::serum_devnet().resolve().unwrap();
        assert_eq!(keys.order_payer(SwapSide::Bid), keys.pc_wallet);
        assert_eq!(keys.order_payer(SwapSide::Ask), keys.coin_wallet);
    }

    #[test]
    fn bad_address_names_the_field() {
        let mut config = SwapConfig::serum_devnet();
        config.bids = "not-base58!".to_string();
        assert_matches!(
            config.resolve(),
            Err(CoreError::InvalidAddress { field: "bids", .. })
        );
    }

    #[test]
    fn side_parses_case_insensitively() {
        assert_eq!("Bid".parse::<SwapSide>().unwrap(), SwapSide::Bid);
        assert_eq!("ask".parse::<SwapSide>().unwrap(), SwapSide::Ask);
        assert!("buy".parse::<SwapSide>().is_err());
    }

    #[test]
    fn swap_config_round_trips_through_json() {
        let config = SwapConfig::serum_devnet();
        let json = serde_json::to_string(&config).unwrap();
        let back: SwapConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.resolve().unwrap(), config.resolve().unwrap());
    }
}
