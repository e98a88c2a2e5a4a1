use bevy::prelude::*;

use crate::data::items;
use crate::game::{Farm, FarmCommand};
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>().add_systems(
            Update,
            read_keyboard
                .before(crate::game::apply_farm_commands)
                .run_if(resource_exists::<Farm>),
        );
    }
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub till: KeyCode,
    pub untill: KeyCode,
    pub plant: KeyCode,
    pub water: KeyCode,
    pub harvest: KeyCode,
    pub remove_plant: KeyCode,
    pub buy_selected: KeyCode,
    pub sell_selected: KeyCode,
    pub next_day: KeyCode,
    /// Item slots in catalogue order.
    pub select_slots: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            till: KeyCode::KeyT,
            untill: KeyCode::KeyU,
            plant: KeyCode::KeyP,
            water: KeyCode::KeyE,
            harvest: KeyCode::KeyH,
            remove_plant: KeyCode::KeyR,
            buy_selected: KeyCode::KeyB,
            sell_selected: KeyCode::KeyV,
            next_day: KeyCode::KeyN,
            select_slots: vec![
                KeyCode::Digit1,
                KeyCode::Digit2,
                KeyCode::Digit3,
                KeyCode::Digit4,
                KeyCode::Digit5,
                KeyCode::Digit6,
            ],
        }
    }
}

/// The single point where key presses become farm commands. One key press
/// is one command; held keys do not repeat.
pub fn read_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    farm: Res<Farm>,
    mut commands: EventWriter<FarmCommand>,
) {
    let moves = [
        (bindings.move_up, Facing::Up),
        (bindings.move_down, Facing::Down),
        (bindings.move_left, Facing::Left),
        (bindings.move_right, Facing::Right),
    ];
    for (key, facing) in moves {
        if keys.just_pressed(key) {
            commands.send(FarmCommand::Move(facing));
        }
    }

    let actions = [
        (bindings.till, FarmCommand::Till),
        (bindings.untill, FarmCommand::Untill),
        (bindings.plant, FarmCommand::Plant),
        (bindings.water, FarmCommand::Water),
        (bindings.harvest, FarmCommand::Harvest),
        (bindings.remove_plant, FarmCommand::RemovePlant),
        (bindings.next_day, FarmCommand::NewDay),
    ];
    for (key, command) in actions {
        if keys.just_pressed(key) {
            commands.send(command);
        }
    }

    for (key, item) in bindings.select_slots.iter().zip(items::all_items()) {
        if keys.just_pressed(*key) {
            commands.send(FarmCommand::SelectItem(item.to_string()));
        }
    }

    if let Some(item) = farm.player().selected_item() {
        if keys.just_pressed(bindings.buy_selected) {
            commands.send(FarmCommand::Buy(item.to_string()));
        }
        if keys.just_pressed(bindings.sell_selected) {
            commands.send(FarmCommand::Sell(item.to_string()));
        }
    }
}
