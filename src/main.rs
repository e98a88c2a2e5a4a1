use std::fs;
use std::process::ExitCode;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use homestead::config::FarmConfig;
use homestead::game::{Farm, GamePlugin};
use homestead::input::InputPlugin;
use homestead::model::FarmModel;
use homestead::ui::UiPlugin;
use homestead::world::{TileMap, DEFAULT_FARM};

/// Usage: `homestead [map-file] [config.ron]`
fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let description = match args.next() {
        Some(path) => match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Could not read map {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_FARM.to_string(),
    };

    let map = match TileMap::load(&description) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Invalid map: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = match args.next() {
        Some(path) => match FarmConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => FarmConfig::default(),
    };

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Homestead".into(),
                resolution: WindowResolution::new(960.0, 720.0),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(Farm(FarmModel::new(map, config)))
        .add_plugins((GamePlugin, InputPlugin, UiPlugin))
        .run();

    if exit.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
