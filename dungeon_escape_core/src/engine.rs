use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    Direction, GameError, RoomId,
    key::{place_key, place_key_randomly},
    map::{DungeonMap, Room, build_map},
};

/// Health the player starts every game with.
pub const STARTING_HEALTH: i32 = 10;

/// State of the single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub current_room: RoomId,
    /// Drops by one with every successful move.
    pub health: i32,
    /// Set once the key is picked up; never cleared.
    pub has_key: bool,
}

impl Player {
    pub fn new() -> Self {
        Player {
            current_room: RoomId::Cell,
            health: STARTING_HEALTH,
            has_key: false,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Escaped,
    Died,
}

/// Whether moving in `direction` would walk into the exit door while it is still locked.
pub fn is_locked_exit(player: &Player, direction: Direction) -> bool {
    player.current_room == RoomId::Gate && !player.has_key && direction == Direction::East
}

/// Applies one player action to the game state.
///
/// The key is picked up first if it lies in the player's room, whether or not the
/// move succeeds. The move then fails, leaving position and health untouched, if it
/// would pass through the locked exit door or if the room has no doorway in
/// `direction`. Otherwise the player walks through and loses one point of health.
///
/// Returns `true` if the player moved.
pub fn attempt_move(direction: Direction, player: &mut Player, map: &mut DungeonMap) -> bool {
    let room = &mut map[player.current_room];
    if room.has_key {
        player.has_key = true;
        room.has_key = false;
    }

    if is_locked_exit(player, direction) {
        return false;
    }

    match room.doorway(direction) {
        Some(destination) => {
            player.current_room = destination;
            player.health -= 1;
            true
        }
        None => false,
    }
}

/// Returns `false` once the player is out of health or has reached the exit.
pub fn is_ongoing(player: &Player) -> bool {
    !(player.health <= 0 || player.current_room == RoomId::Exit)
}

/// One game session: the dungeon and the player walking through it.
#[derive(Debug, Clone)]
pub struct Game {
    map: DungeonMap,
    player: Player,
}

impl Game {
    /// Starts a game with the key hidden in a random room, using the thread-local
    /// generator seeded from the operating system.
    pub fn new() -> Result<Self, GameError> {
        Self::with_rng(&mut rand::rng())
    }

    /// Starts a game with the key hidden in a room chosen by `rng`.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut map = build_map();
        place_key_randomly(&mut map, rng)?;
        Ok(Game {
            map,
            player: Player::new(),
        })
    }

    /// Starts a game with the key in a known room.
    pub fn with_key_in(room: RoomId) -> Result<Self, GameError> {
        let mut map = build_map();
        place_key(&mut map, room)?;
        Ok(Game {
            map,
            player: Player::new(),
        })
    }

    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        attempt_move(direction, &mut self.player, &mut self.map)
    }

    pub fn is_ongoing(&self) -> bool {
        is_ongoing(&self.player)
    }

    pub fn is_locked_exit(&self, direction: Direction) -> bool {
        is_locked_exit(&self.player, direction)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn map(&self) -> &DungeonMap {
        &self.map
    }

    /// The room the player is standing in.
    pub fn current_room(&self) -> &Room {
        &self.map[self.player.current_room]
    }

    /// Returns how the game ended, or `None` while it is still being played.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_ongoing() {
            None
        } else if self.player.health > 0 && self.player.current_room == RoomId::Exit {
            Some(Outcome::Escaped)
        } else {
            Some(Outcome::Died)
        }
    }
}
