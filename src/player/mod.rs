//! Player domain — position, facing, energy, money, inventory.
//!
//! Every mutator either succeeds completely or returns an error with the
//! player untouched.

mod movement;

use std::collections::HashMap;

use crate::data::items;
use crate::data::ItemKind;
use crate::shared::*;

pub use movement::MoveOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    position: Position,
    facing: Facing,
    energy: u32,
    max_energy: u32,
    money: u32,
    /// Never holds a zero count.
    inventory: HashMap<ItemId, u32>,
    selected: Option<ItemId>,
}

impl Player {
    /// A player with full energy and an empty inventory.
    pub fn new(position: Position, facing: Facing, max_energy: u32, money: u32) -> Self {
        Self {
            position,
            facing,
            energy: max_energy,
            max_energy,
            money,
            inventory: HashMap::new(),
            selected: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn max_energy(&self) -> u32 {
        self.max_energy
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn inventory(&self) -> &HashMap<ItemId, u32> {
        &self.inventory
    }

    pub fn count(&self, item: &str) -> u32 {
        self.inventory.get(item).copied().unwrap_or(0)
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a known item. Selecting an item not currently held is
    /// allowed; the item panel shows it with a zero count.
    pub fn select_item(&mut self, item: &str) -> Result<(), FarmError> {
        if !items::is_known(item) {
            return Err(FarmError::UnknownItem(item.to_string()));
        }
        self.selected = Some(item.to_string());
        Ok(())
    }

    pub fn add_item(&mut self, item: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let count = self.inventory.entry(item.to_string()).or_insert(0);
        *count = count.saturating_add(quantity);
    }

    pub fn remove_item(&mut self, item: &str, quantity: u32) -> Result<(), FarmError> {
        let held = self.count(item);
        if quantity > held {
            return Err(FarmError::InsufficientInventory {
                item: item.to_string(),
                wanted: quantity,
                held,
            });
        }
        if quantity == held {
            self.inventory.remove(item);
        } else if let Some(count) = self.inventory.get_mut(item) {
            *count -= quantity;
        }
        Ok(())
    }

    /// Pay `unit_price` for one unit of `item`. Only seeds can be bought.
    pub fn buy(&mut self, item: &str, unit_price: u32) -> Result<(), FarmError> {
        match items::lookup(item) {
            Some(ItemKind::Seed(_)) => {}
            Some(ItemKind::Produce(_)) => return Err(FarmError::NotASeed(item.to_string())),
            None => return Err(FarmError::UnknownItem(item.to_string())),
        }
        if self.money < unit_price {
            return Err(FarmError::InsufficientFunds {
                price: unit_price,
                money: self.money,
            });
        }
        self.money -= unit_price;
        self.add_item(item, 1);
        Ok(())
    }

    /// Sell one unit of `item` for `unit_price`.
    pub fn sell(&mut self, item: &str, unit_price: u32) -> Result<(), FarmError> {
        self.remove_item(item, 1)?;
        self.money = self.money.saturating_add(unit_price);
        Ok(())
    }

    /// Energy never drops below zero; a cost that cannot be paid in full
    /// is refused.
    pub fn spend_energy(&mut self, cost: u32) -> Result<(), FarmError> {
        if self.energy < cost {
            return Err(FarmError::Exhausted {
                needed: cost,
                energy: self.energy,
            });
        }
        self.energy -= cost;
        Ok(())
    }

    /// Take up to `cost` energy, stopping at zero.
    pub(crate) fn drain_energy(&mut self, cost: u32) {
        self.energy = self.energy.saturating_sub(cost);
    }

    pub fn restore_energy(&mut self) {
        self.energy = self.max_energy;
    }
}
