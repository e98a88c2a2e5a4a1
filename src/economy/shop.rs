use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::items;
use crate::shared::*;

/// Buy and sell price tables. An item missing from `buy` cannot be
/// purchased; an item missing from `sell` cannot be sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub buy: HashMap<ItemId, u32>,
    pub sell: HashMap<ItemId, u32>,
}

impl Default for PriceTable {
    fn default() -> Self {
        let buy = [("Potato Seed", 5), ("Kale Seed", 8), ("Berry Seed", 6)];
        let sell = [
            ("Potato Seed", 2),
            ("Kale Seed", 4),
            ("Berry Seed", 3),
            ("Potato", 12),
            ("Kale", 20),
            ("Berry", 8),
        ];
        Self {
            buy: buy.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            sell: sell.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}

impl PriceTable {
    pub fn buy_price(&self, item: &str) -> Result<u32, FarmError> {
        if !items::is_known(item) {
            return Err(FarmError::UnknownItem(item.to_string()));
        }
        self.buy
            .get(item)
            .copied()
            .ok_or_else(|| FarmError::NotForSale(item.to_string()))
    }

    pub fn sell_price(&self, item: &str) -> Result<u32, FarmError> {
        if !items::is_known(item) {
            return Err(FarmError::UnknownItem(item.to_string()));
        }
        self.sell
            .get(item)
            .copied()
            .ok_or_else(|| FarmError::NotForSale(item.to_string()))
    }

    /// One row per known item, in catalogue order, for the item panel.
    pub fn listings(&self) -> Vec<ShopListing> {
        items::all_items()
            .into_iter()
            .map(|item| ShopListing {
                item: item.to_string(),
                buy_price: self.buy.get(item).copied(),
                sell_price: self.sell.get(item).copied(),
            })
            .collect()
    }
}

/// A single entry in the item panel. `None` prices display as "N/A".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopListing {
    pub item: ItemId,
    pub buy_price: Option<u32>,
    pub sell_price: Option<u32>,
}
