use serde::{Deserialize, Serialize};

pub mod engine;
pub mod key;
pub mod map;

pub use engine::{Game, Outcome, Player, STARTING_HEALTH, attempt_move, is_locked_exit, is_ongoing};
pub use key::{KEY_ROOMS, place_key, place_key_randomly};
pub use map::{DungeonMap, Room, build_map};

/// Identifies one of the fixed rooms of the dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomId {
    Cell,
    Gate,
    Armory,
    Jailers,
    Exit,
}

impl RoomId {
    /// Every room, in storage order.
    pub const ALL: [RoomId; 5] = [
        RoomId::Cell,
        RoomId::Gate,
        RoomId::Armory,
        RoomId::Jailers,
        RoomId::Exit,
    ];

    /// Position of this room in `ALL` and in the map's room storage.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A direction the player can ask to move in.
///
/// `None` stands for any input that does not name a compass direction; no room
/// has a doorway labelled with it, so a move in that direction is always rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    None,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::None,
    ];
}

/// Errors raised when the key is placed in a way the game rules forbid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("The key cannot be placed in the exit room")]
    ExitCannotHoldKey,
    #[error("The key is already lying in room {room:?}")]
    KeyAlreadyPlaced { room: RoomId },
}
