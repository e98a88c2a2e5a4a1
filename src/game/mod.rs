//! Controller shell — turns `FarmCommand` events into model calls.
//!
//! The model lives in the `Farm` resource. One system drains the command
//! queue in order each frame and reports what happened through the shared
//! outcome events; views only ever read `Farm`.

use bevy::prelude::*;

use crate::model::FarmModel;
use crate::player::MoveOutcome;
use crate::shared::*;

/// The whole simulation, as a Bevy resource.
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct Farm(pub FarmModel);

/// One player command. Tile actions apply to the player's own tile.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum FarmCommand {
    Move(Facing),
    Till,
    Untill,
    Plant,
    Water,
    Harvest,
    RemovePlant,
    SelectItem(ItemId),
    Buy(ItemId),
    Sell(ItemId),
    NewDay,
}

/// What a successfully applied command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Done,
    /// Nothing to act on (empty tile, unripe crop).
    Nothing,
    Moved(MoveOutcome),
    Harvested(Harvest, Position),
    Traded { item: ItemId, price: u32, is_purchase: bool },
    /// Carries the day that just ended.
    DayEnded(u32),
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FarmCommand>()
            .add_event::<DayEndEvent>()
            .add_event::<CropHarvestedEvent>()
            .add_event::<ShopTransactionEvent>()
            .add_event::<ActionRejectedEvent>()
            .add_systems(
                Update,
                apply_farm_commands.run_if(resource_exists::<Farm>),
            );
    }
}

/// Apply one command to the model.
pub fn execute(model: &mut FarmModel, command: &FarmCommand) -> Result<CommandOutcome, FarmError> {
    let here = model.player().position();
    let outcome = match command {
        FarmCommand::Move(direction) => CommandOutcome::Moved(model.move_player(*direction)),
        FarmCommand::Till => {
            model.till_soil(here)?;
            CommandOutcome::Done
        }
        FarmCommand::Untill => {
            model.untill_soil(here)?;
            CommandOutcome::Done
        }
        FarmCommand::Plant => {
            model.plant_selected()?;
            CommandOutcome::Done
        }
        FarmCommand::Water => {
            model.water_here()?;
            CommandOutcome::Done
        }
        FarmCommand::Harvest => match model.harvest_here() {
            Some(harvest) => CommandOutcome::Harvested(harvest, here),
            None => CommandOutcome::Nothing,
        },
        FarmCommand::RemovePlant => match model.remove_plant(here) {
            Some(_) => CommandOutcome::Done,
            None => CommandOutcome::Nothing,
        },
        FarmCommand::SelectItem(item) => {
            model.select_item(item)?;
            CommandOutcome::Done
        }
        FarmCommand::Buy(item) => CommandOutcome::Traded {
            item: item.clone(),
            price: model.buy_item(item)?,
            is_purchase: true,
        },
        FarmCommand::Sell(item) => CommandOutcome::Traded {
            item: item.clone(),
            price: model.sell_item(item)?,
            is_purchase: false,
        },
        FarmCommand::NewDay => {
            let ended = model.day();
            model.new_day();
            CommandOutcome::DayEnded(ended)
        }
    };
    Ok(outcome)
}

pub fn apply_farm_commands(
    mut commands: EventReader<FarmCommand>,
    mut farm: ResMut<Farm>,
    mut day_events: EventWriter<DayEndEvent>,
    mut harvest_events: EventWriter<CropHarvestedEvent>,
    mut shop_events: EventWriter<ShopTransactionEvent>,
    mut rejected_events: EventWriter<ActionRejectedEvent>,
) {
    for command in commands.read() {
        match execute(&mut farm, command) {
            Ok(CommandOutcome::DayEnded(day)) => {
                day_events.send(DayEndEvent { day });
            }
            Ok(CommandOutcome::Harvested(harvest, position)) => {
                harvest_events.send(CropHarvestedEvent {
                    item: harvest.item,
                    quantity: harvest.quantity,
                    position,
                });
            }
            Ok(CommandOutcome::Traded { item, price, is_purchase }) => {
                shop_events.send(ShopTransactionEvent { item, price, is_purchase });
            }
            Ok(_) => {}
            Err(error) => {
                warn!("[Farm] {:?} refused: {}", command, error);
                rejected_events.send(ActionRejectedEvent { error });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FarmConfig;
    use crate::data::Species;

    fn model() -> FarmModel {
        FarmModel::from_map_str("@ 0 0\nUU\nGG\n", FarmConfig::default()).unwrap()
    }

    #[test]
    fn test_execute_till_plant_water() {
        let mut model = model();
        assert_eq!(execute(&mut model, &FarmCommand::Till), Ok(CommandOutcome::Done));
        execute(&mut model, &FarmCommand::SelectItem("Kale Seed".into())).unwrap();
        execute(&mut model, &FarmCommand::Plant).unwrap();
        execute(&mut model, &FarmCommand::Water).unwrap();
        let plant = model.plant_at((0, 0)).unwrap();
        assert_eq!(plant.species(), Species::Kale);
        assert!(plant.is_watered());
    }

    #[test]
    fn test_execute_reports_nothing_on_empty_tile() {
        let mut model = model();
        assert_eq!(execute(&mut model, &FarmCommand::Harvest), Ok(CommandOutcome::Nothing));
        assert_eq!(execute(&mut model, &FarmCommand::RemovePlant), Ok(CommandOutcome::Nothing));
    }

    #[test]
    fn test_execute_errors_pass_through() {
        let mut model = model();
        assert_eq!(
            execute(&mut model, &FarmCommand::Buy("Potato Seed".into())),
            Err(FarmError::InsufficientFunds { price: 5, money: 0 })
        );
        assert_eq!(
            execute(&mut model, &FarmCommand::SelectItem("Turnip".into())),
            Err(FarmError::UnknownItem("Turnip".into()))
        );
    }

    #[test]
    fn test_execute_new_day_reports_day() {
        let mut model = model();
        assert_eq!(execute(&mut model, &FarmCommand::NewDay), Ok(CommandOutcome::DayEnded(1)));
        assert_eq!(model.day(), 2);
    }
}
