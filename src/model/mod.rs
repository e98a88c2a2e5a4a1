//! The farm simulation state machine.
//!
//! `FarmModel` owns the tile map, the plants (keyed by position), the
//! player, and the day counter. Every rule that ties a player action to a
//! state change lives here. A rejected command returns an error and leaves
//! every part of the model exactly as it was.

use std::collections::HashMap;

use bevy::log::{debug, info};

use crate::config::FarmConfig;
use crate::data::{ItemKind, Species};
use crate::data::items;
use crate::economy::EconomyStats;
use crate::farming::Plant;
use crate::player::{MoveOutcome, Player};
use crate::shared::*;
use crate::world::TileMap;

#[derive(Debug, Clone)]
pub struct FarmModel {
    map: TileMap,
    plants: HashMap<Position, Plant>,
    player: Player,
    day: u32,
    config: FarmConfig,
    stats: EconomyStats,
}

impl FarmModel {
    /// A fresh farm on day 1, with the player at the map's start position.
    pub fn new(map: TileMap, config: FarmConfig) -> Self {
        let (start, facing) = map.start();
        let mut player = Player::new(start, facing, config.max_energy, config.starting_money);
        for (item, &quantity) in &config.starting_inventory {
            player.add_item(item, quantity);
        }
        Self {
            map,
            plants: HashMap::new(),
            player,
            day: 1,
            config,
            stats: EconomyStats::default(),
        }
    }

    /// Parse `description` and build a farm from it.
    pub fn from_map_str(description: &str, config: FarmConfig) -> Result<Self, MapFormatError> {
        Ok(Self::new(TileMap::load(description)?, config))
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct player access for controllers acting on the model's behalf.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// Ground layout, one symbol string per row.
    pub fn ground(&self) -> Vec<String> {
        self.map.rows()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.map.dimensions()
    }

    pub fn plants(&self) -> &HashMap<Position, Plant> {
        &self.plants
    }

    pub fn plant_at(&self, pos: Position) -> Option<&Plant> {
        self.plants.get(&pos)
    }

    pub fn config(&self) -> &FarmConfig {
        &self.config
    }

    pub fn stats(&self) -> &EconomyStats {
        &self.stats
    }

    // ─── Movement & soil ─────────────────────────────────────────────────

    pub fn move_player(&mut self, direction: Facing) -> MoveOutcome {
        let outcome = self.player.move_to(direction, &self.map, self.config.move_cost);
        debug!("[Farm] Move {:?}: {:?} at {:?}", direction, outcome, self.player.position());
        outcome
    }

    pub fn till_soil(&mut self, pos: Position) -> Result<(), FarmError> {
        self.check_reach(pos)?;
        self.check_energy(self.config.action_cost)?;
        self.map.till(pos)?;
        self.charge(self.config.action_cost);
        Ok(())
    }

    /// Refused while a plant stands on the cell, so that every plant keeps
    /// growing on tilled soil.
    pub fn untill_soil(&mut self, pos: Position) -> Result<(), FarmError> {
        self.check_reach(pos)?;
        if self.plants.contains_key(&pos) {
            return Err(FarmError::Occupied(pos));
        }
        self.check_energy(self.config.action_cost)?;
        self.map.untill(pos)?;
        self.charge(self.config.action_cost);
        Ok(())
    }

    // ─── Plants ──────────────────────────────────────────────────────────

    pub fn add_plant(&mut self, pos: Position, plant: Plant) -> Result<(), FarmError> {
        if self.map.get(pos)? != GroundKind::Soil || self.plants.contains_key(&pos) {
            return Err(FarmError::InvalidPlanting(pos));
        }
        debug!("[Farm] Planted {} at {:?}", plant.def().name, pos);
        self.plants.insert(pos, plant);
        Ok(())
    }

    pub fn remove_plant(&mut self, pos: Position) -> Option<Plant> {
        self.plants.remove(&pos)
    }

    /// A plant already watered today is left alone and costs nothing.
    pub fn water_plant(&mut self, pos: Position) -> Result<(), FarmError> {
        if !self.map.contains(pos) {
            return Err(FarmError::OutOfBounds(pos));
        }
        if !self.plants.contains_key(&pos) {
            return Err(FarmError::NoPlant(pos));
        }
        if self.plants.get(&pos).is_some_and(|plant| plant.is_watered()) {
            return Ok(());
        }
        self.player.spend_energy(self.config.action_cost)?;
        if let Some(plant) = self.plants.get_mut(&pos) {
            plant.water();
        }
        Ok(())
    }

    /// Pick the plant at `pos`. Single-harvest plants are removed; the
    /// yield is returned for the caller to credit.
    pub fn harvest_plant(&mut self, pos: Position) -> Option<Harvest> {
        let harvest = self.plants.get_mut(&pos)?.harvest()?;
        if harvest.remove {
            self.plants.remove(&pos);
        }
        info!("[Farm] Harvested {} x{} at {:?}", harvest.item, harvest.quantity, pos);
        Some(harvest)
    }

    /// Advance one day: grow every plant, count the day, refill energy.
    pub fn new_day(&mut self) {
        let grown = self
            .plants
            .values_mut()
            .map(|plant| plant.advance_day())
            .filter(|&advanced| advanced)
            .count();
        self.day += 1;
        self.player.restore_energy();
        info!(
            "[Farm] Day {} begins: {} of {} plants grew",
            self.day,
            grown,
            self.plants.len()
        );
    }

    // ─── Player-position conveniences used by the controller ─────────────

    /// Plant the selected seed on the player's tile, consuming one seed.
    pub fn plant_selected(&mut self) -> Result<Species, FarmError> {
        let item = self
            .player
            .selected_item()
            .ok_or(FarmError::NothingSelected)?
            .to_string();
        let species = match items::lookup(&item) {
            Some(ItemKind::Seed(species)) => species,
            Some(ItemKind::Produce(_)) => return Err(FarmError::NotASeed(item)),
            None => return Err(FarmError::UnknownItem(item)),
        };
        if self.player.count(&item) == 0 {
            return Err(FarmError::InsufficientInventory { item, wanted: 1, held: 0 });
        }

        let pos = self.player.position();
        self.add_plant(pos, Plant::new(species))?;
        self.player.remove_item(&item, 1)?;
        Ok(species)
    }

    pub fn water_here(&mut self) -> Result<(), FarmError> {
        self.water_plant(self.player.position())
    }

    /// Harvest on the player's tile and put the produce in the inventory.
    pub fn harvest_here(&mut self) -> Option<Harvest> {
        let harvest = self.harvest_plant(self.player.position())?;
        self.player.add_item(&harvest.item, harvest.quantity);
        Some(harvest)
    }

    // ─── Economy ─────────────────────────────────────────────────────────

    pub fn select_item(&mut self, item: &str) -> Result<(), FarmError> {
        self.player.select_item(item)
    }

    /// Buy one unit at the configured price. Returns the price paid.
    pub fn buy_item(&mut self, item: &str) -> Result<u32, FarmError> {
        let price = self.config.prices.buy_price(item)?;
        self.player.buy(item, price)?;
        self.stats.record_purchase(price);
        info!("[Economy] Bought {} for {}g. Balance: {}g", item, price, self.player.money());
        Ok(price)
    }

    /// Sell one unit at the configured price. Returns the price received.
    pub fn sell_item(&mut self, item: &str) -> Result<u32, FarmError> {
        let price = self.config.prices.sell_price(item)?;
        self.player.sell(item, price)?;
        self.stats.record_sale(price);
        info!("[Economy] Sold {} for {}g. Balance: {}g", item, price, self.player.money());
        Ok(price)
    }

    // ─── Internal ────────────────────────────────────────────────────────

    /// Soil can only be worked on the player's own tile.
    fn check_reach(&self, pos: Position) -> Result<(), FarmError> {
        if !self.map.contains(pos) {
            return Err(FarmError::OutOfBounds(pos));
        }
        if pos != self.player.position() {
            return Err(FarmError::OutOfReach(pos));
        }
        Ok(())
    }

    fn check_energy(&self, cost: u32) -> Result<(), FarmError> {
        let energy = self.player.energy();
        if energy < cost {
            return Err(FarmError::Exhausted { needed: cost, energy });
        }
        Ok(())
    }

    fn charge(&mut self, cost: u32) {
        self.player.drain_energy(cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3×3 grass with tilled soil in the centre, player standing on it.
    const CENTRE_PLOT: &str = "@ 1 1\nGGG\nGSG\nGGG\n";

    fn farm(description: &str) -> FarmModel {
        FarmModel::from_map_str(description, FarmConfig::default()).unwrap()
    }

    fn grow_to_maturity(model: &mut FarmModel, pos: Position) {
        for _ in 0..20 {
            if model.plant_at(pos).is_some_and(|p| p.is_harvestable()) {
                return;
            }
            model.water_plant(pos).unwrap();
            model.new_day();
        }
        panic!("plant at {:?} never matured", pos);
    }

    #[test]
    fn test_new_farm_uses_config() {
        let model = farm(CENTRE_PLOT);
        assert_eq!(model.day(), 1);
        assert_eq!(model.dimensions(), (3, 3));
        assert_eq!(model.player().position(), (1, 1));
        assert_eq!(model.player().energy(), 100);
        assert_eq!(model.player().count("Potato Seed"), 5);
        assert_eq!(model.ground(), vec!["GGG", "GSG", "GGG"]);
    }

    #[test]
    fn test_potato_grows_only_when_watered() {
        let mut model = farm(CENTRE_PLOT);
        model.add_plant((1, 1), Plant::new(Species::Potato)).unwrap();

        model.new_day();
        assert_eq!(model.plant_at((1, 1)).unwrap().stage(), 0);

        model.water_plant((1, 1)).unwrap();
        model.new_day();
        assert_eq!(model.plant_at((1, 1)).unwrap().stage(), 1);
        assert_eq!(model.day(), 3);
    }

    #[test]
    fn test_add_plant_rejections_leave_state() {
        let mut model = farm(CENTRE_PLOT);
        assert_eq!(
            model.add_plant((0, 0), Plant::new(Species::Kale)),
            Err(FarmError::InvalidPlanting((0, 0)))
        );
        assert_eq!(
            model.add_plant((3, 0), Plant::new(Species::Kale)),
            Err(FarmError::OutOfBounds((3, 0)))
        );
        model.add_plant((1, 1), Plant::new(Species::Kale)).unwrap();
        assert_eq!(
            model.add_plant((1, 1), Plant::new(Species::Berry)),
            Err(FarmError::InvalidPlanting((1, 1)))
        );
        assert_eq!(model.plant_at((1, 1)).unwrap().species(), Species::Kale);
        assert_eq!(model.plants().len(), 1);
    }

    #[test]
    fn test_harvest_mature_potato_removes_it() {
        let mut model = farm(CENTRE_PLOT);
        model.add_plant((1, 1), Plant::new(Species::Potato)).unwrap();
        grow_to_maturity(&mut model, (1, 1));

        let harvest = model.harvest_plant((1, 1)).unwrap();
        assert_eq!((harvest.item.as_str(), harvest.quantity), ("Potato", 1));
        assert!(model.plants().is_empty());
    }

    #[test]
    fn test_harvest_early_or_empty_is_none() {
        let mut model = farm(CENTRE_PLOT);
        assert_eq!(model.harvest_plant((1, 1)), None);
        model.add_plant((1, 1), Plant::new(Species::Potato)).unwrap();
        model.water_plant((1, 1)).unwrap();
        model.new_day();
        let before = model.plants().clone();
        assert_eq!(model.harvest_plant((1, 1)), None);
        assert_eq!(model.plants(), &before);
    }

    #[test]
    fn test_berry_stays_after_harvest() {
        let mut model = farm(CENTRE_PLOT);
        model.add_plant((1, 1), Plant::new(Species::Berry)).unwrap();
        grow_to_maturity(&mut model, (1, 1));
        let harvest = model.harvest_here().unwrap();
        assert!(!harvest.remove);
        assert!(model.plant_at((1, 1)).is_some());
        assert_eq!(model.player().count("Berry"), 1);
    }

    #[test]
    fn test_remove_plant() {
        let mut model = farm(CENTRE_PLOT);
        assert!(model.remove_plant((1, 1)).is_none());
        model.add_plant((1, 1), Plant::new(Species::Kale)).unwrap();
        assert_eq!(model.remove_plant((1, 1)).map(|p| p.species()), Some(Species::Kale));
        assert!(model.plants().is_empty());
    }

    #[test]
    fn test_till_only_where_standing() {
        let mut model = farm("@ 0 0\nUU\nGG\n");
        assert_eq!(model.till_soil((0, 1)), Err(FarmError::OutOfReach((0, 1))));
        assert_eq!(model.till_soil((5, 5)), Err(FarmError::OutOfBounds((5, 5))));
        model.till_soil((0, 0)).unwrap();
        assert_eq!(model.map().get((0, 0)), Ok(GroundKind::Soil));
        assert_eq!(model.player().energy(), 99);
        model.untill_soil((0, 0)).unwrap();
        assert_eq!(model.map().get((0, 0)), Ok(GroundKind::Untilled));
    }

    #[test]
    fn test_refused_till_costs_nothing() {
        let mut model = farm("@ 0 0\nGU\n");
        assert!(model.till_soil((0, 0)).is_err());
        assert_eq!(model.player().energy(), 100);
    }

    #[test]
    fn test_untill_under_plant_refused() {
        let mut model = farm(CENTRE_PLOT);
        model.add_plant((1, 1), Plant::new(Species::Potato)).unwrap();
        assert_eq!(model.untill_soil((1, 1)), Err(FarmError::Occupied((1, 1))));
        assert_eq!(model.map().get((1, 1)), Ok(GroundKind::Soil));
    }

    #[test]
    fn test_water_needs_plant_and_energy() {
        let config = FarmConfig { max_energy: 0, ..FarmConfig::default() };
        let mut model = FarmModel::from_map_str(CENTRE_PLOT, config).unwrap();
        assert_eq!(model.water_here(), Err(FarmError::NoPlant((1, 1))));
        model.add_plant((1, 1), Plant::new(Species::Potato)).unwrap();
        assert_eq!(
            model.water_here(),
            Err(FarmError::Exhausted { needed: 1, energy: 0 })
        );
        assert!(!model.plant_at((1, 1)).unwrap().is_watered());
    }

    #[test]
    fn test_watering_twice_costs_once() {
        let config = FarmConfig { max_energy: 1, ..FarmConfig::default() };
        let mut model = FarmModel::from_map_str(CENTRE_PLOT, config).unwrap();
        model.add_plant((1, 1), Plant::new(Species::Potato)).unwrap();

        model.water_here().unwrap();
        assert_eq!(model.player().energy(), 0);
        assert_eq!(model.water_here(), Ok(()), "already watered today");
        assert_eq!(model.player().energy(), 0);

        model.new_day();
        assert_eq!(model.player().energy(), 1, "energy refills overnight");
        assert!(!model.plant_at((1, 1)).unwrap().is_watered());
    }

    #[test]
    fn test_plant_selected_consumes_seed() {
        let mut model = farm(CENTRE_PLOT);
        assert_eq!(model.plant_selected(), Err(FarmError::NothingSelected));

        model.select_item("Kale").unwrap();
        assert_eq!(model.plant_selected(), Err(FarmError::NotASeed("Kale".into())));

        model.select_item("Berry Seed").unwrap();
        assert_eq!(model.plant_selected(), Ok(Species::Berry));
        assert_eq!(model.player().count("Berry Seed"), 0);

        model.remove_plant((1, 1));
        assert_eq!(
            model.plant_selected(),
            Err(FarmError::InsufficientInventory { item: "Berry Seed".into(), wanted: 1, held: 0 })
        );
    }

    #[test]
    fn test_failed_planting_keeps_seed() {
        let mut model = farm("@ 0 0\nGS\n");
        model.select_item("Potato Seed").unwrap();
        assert_eq!(model.plant_selected(), Err(FarmError::InvalidPlanting((0, 0))));
        assert_eq!(model.player().count("Potato Seed"), 5);
    }

    #[test]
    fn test_buy_and_sell_through_price_table() {
        let config = FarmConfig { starting_money: 10, ..FarmConfig::default() };
        let mut model = FarmModel::from_map_str(CENTRE_PLOT, config).unwrap();

        assert_eq!(model.buy_item("Potato Seed"), Ok(5));
        assert_eq!(model.buy_item("Potato Seed"), Ok(5));
        assert_eq!(model.player().money(), 0);
        assert_eq!(model.player().count("Potato Seed"), 7);
        assert_eq!(
            model.buy_item("Potato Seed"),
            Err(FarmError::InsufficientFunds { price: 5, money: 0 })
        );
        assert_eq!(model.buy_item("Potato"), Err(FarmError::NotForSale("Potato".into())));

        assert_eq!(model.sell_item("Kale Seed"), Ok(4));
        assert_eq!(model.player().money(), 4);
        assert!(matches!(
            model.sell_item("Kale"),
            Err(FarmError::InsufficientInventory { .. })
        ));
        assert_eq!(model.stats().total_transactions, 3);
    }

    #[test]
    fn test_produce_in_buy_table_is_still_refused() {
        let mut config = FarmConfig { starting_money: 10, ..FarmConfig::default() };
        config.prices.buy.insert("Potato".into(), 1);
        let mut model = FarmModel::from_map_str(CENTRE_PLOT, config).unwrap();
        let before = model.player().clone();

        assert_eq!(model.buy_item("Potato"), Err(FarmError::NotASeed("Potato".into())));
        assert_eq!(model.player(), &before);
        assert_eq!(model.stats().total_transactions, 0);
    }

    #[test]
    fn test_move_player_uses_map() {
        let mut model = farm("@ 0 0\nGW\nGG\n");
        assert_eq!(model.move_player(Facing::Right), MoveOutcome::Blocked);
        assert_eq!(model.move_player(Facing::Down), MoveOutcome::Moved);
        assert_eq!(model.player().position(), (1, 0));
        assert_eq!(model.player().energy(), 99);
    }
}
