use crate::shared::*;
use crate::world::TileMap;

use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Turned to face the edge of the map or an impassable tile.
    Blocked,
    /// Turned, but too tired to take the step.
    Exhausted,
}

impl Player {
    /// Face `direction`, then step one tile that way if the target is on
    /// the map, walkable, and the player can pay `cost` energy. Energy is
    /// only charged for a step actually taken.
    pub fn move_to(&mut self, direction: Facing, map: &TileMap, cost: u32) -> MoveOutcome {
        self.facing = direction;

        let Some(target) = direction.step(self.position) else {
            return MoveOutcome::Blocked;
        };
        if is_blocked(target, map) {
            return MoveOutcome::Blocked;
        }
        if self.spend_energy(cost).is_err() {
            return MoveOutcome::Exhausted;
        }

        self.position = target;
        MoveOutcome::Moved
    }
}

/// Off the map or impassable ground.
fn is_blocked(pos: Position, map: &TileMap) -> bool {
    match map.get(pos) {
        Ok(ground) => !ground.is_walkable(),
        Err(_) => true,
    }
}
