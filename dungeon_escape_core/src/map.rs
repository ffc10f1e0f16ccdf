use std::{
    collections::BTreeMap,
    ops::{Index, IndexMut},
};

use serde::{Deserialize, Serialize};

use crate::{Direction, RoomId};

/// A single location in the dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Text shown while the player stands in this room.
    pub message: String,
    /// Directed edges out of this room, at most one per direction.
    pub doorways: BTreeMap<Direction, RoomId>,
    /// Whether the key currently lies on this room's floor.
    pub has_key: bool,
}

impl Room {
    pub fn new(message: impl Into<String>, doorways: &[(Direction, RoomId)]) -> Self {
        Room {
            message: message.into(),
            doorways: doorways.iter().copied().collect(),
            has_key: false,
        }
    }

    /// Returns the room reached by leaving in `direction`, if there is a doorway that way.
    #[inline]
    pub fn doorway(&self, direction: Direction) -> Option<RoomId> {
        self.doorways.get(&direction).copied()
    }
}

/// The fixed set of rooms, addressable by `RoomId`.
///
/// Rooms are stored in `RoomId::ALL` order, so every id always resolves and
/// lookups hand out references into the map itself rather than copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonMap {
    rooms: [Room; 5],
}

impl DungeonMap {
    /// Gets an immutable reference to a room.
    #[inline]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// Gets a mutable reference to a room.
    #[inline]
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    /// Returns an iterator that yields `(RoomId, &Room)` for each room.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        RoomId::ALL.into_iter().zip(self.rooms.iter())
    }

    /// Finds the room the key is lying in, if it has not been picked up.
    pub fn key_location(&self) -> Option<RoomId> {
        self.rooms()
            .find_map(|(id, room)| if room.has_key { Some(id) } else { None })
    }
}

impl Index<RoomId> for DungeonMap {
    type Output = Room;

    #[inline]
    fn index(&self, id: RoomId) -> &Self::Output {
        self.room(id)
    }
}

impl IndexMut<RoomId> for DungeonMap {
    #[inline]
    fn index_mut(&mut self, id: RoomId) -> &mut Self::Output {
        self.room_mut(id)
    }
}

/// Builds the dungeon's fixed five-room layout. No room holds the key yet.
pub fn build_map() -> DungeonMap {
    DungeonMap {
        rooms: RoomId::ALL.map(build_room),
    }
}

fn build_room(id: RoomId) -> Room {
    match id {
        RoomId::Cell => Room::new(
            "A small, dark prison cell with doors South and East.",
            &[
                (Direction::South, RoomId::Armory),
                (Direction::East, RoomId::Gate),
            ],
        ),
        RoomId::Gate => Room::new(
            "A large, torchlit room with doors West, South, and East.\n\
             There is daylight entering under the door to the East.",
            &[
                (Direction::West, RoomId::Cell),
                (Direction::South, RoomId::Jailers),
                (Direction::East, RoomId::Exit),
            ],
        ),
        RoomId::Armory => Room::new(
            "A store room with doors North and East.",
            &[
                (Direction::North, RoomId::Cell),
                (Direction::East, RoomId::Jailers),
            ],
        ),
        RoomId::Jailers => Room::new(
            "A jailer's barracks with doors West and North.",
            &[
                (Direction::West, RoomId::Armory),
                (Direction::North, RoomId::Gate),
            ],
        ),
        RoomId::Exit => Room::new("YOU FOUND THE KEY AND ESCAPED!", &[]),
    }
}
