//! Tunable game rules, loadable from a RON file.
//!
//! ```ron
//! (
//!     max_energy: 50,
//!     move_cost: 1,
//!     starting_money: 20,
//! )
//! ```
//! Missing fields fall back to `FarmConfig::default()`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::items;
use crate::data::ItemKind;
use crate::economy::PriceTable;
use crate::shared::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("starting inventory names unknown item {0:?}")]
    UnknownItem(String),

    #[error("price table names unknown item {0:?}")]
    UnknownPriceItem(String),

    #[error("{0} has a buy price but only seeds can be bought")]
    NotASeedForSale(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmConfig {
    /// Energy cap, also the amount restored each morning.
    pub max_energy: u32,
    /// Energy charged per successful step.
    pub move_cost: u32,
    /// Energy charged to till, untill, or water.
    pub action_cost: u32,
    pub starting_money: u32,
    pub starting_inventory: HashMap<ItemId, u32>,
    pub prices: PriceTable,
}

impl Default for FarmConfig {
    fn default() -> Self {
        let starting_inventory = [("Potato Seed", 5), ("Kale Seed", 2), ("Berry Seed", 1)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Self {
            max_energy: 100,
            move_cost: 1,
            action_cost: 1,
            starting_money: 0,
            starting_inventory,
            prices: PriceTable::default(),
        }
    }
}

impl FarmConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: FarmConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(item) = self.starting_inventory.keys().find(|item| !items::is_known(item)) {
            return Err(ConfigError::UnknownItem(item.clone()));
        }
        for item in self.prices.buy.keys() {
            match items::lookup(item) {
                Some(ItemKind::Seed(_)) => {}
                Some(ItemKind::Produce(_)) => return Err(ConfigError::NotASeedForSale(item.clone())),
                None => return Err(ConfigError::UnknownPriceItem(item.clone())),
            }
        }
        if let Some(item) = self.prices.sell.keys().find(|item| !items::is_known(item)) {
            return Err(ConfigError::UnknownPriceItem(item.clone()));
        }
        Ok(())
    }
}
