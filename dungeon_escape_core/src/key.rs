use log::debug;
use rand::Rng;

use crate::{DungeonMap, GameError, RoomId};

/// Rooms the key may start in. The exit is never one of them.
pub const KEY_ROOMS: [RoomId; 4] = [
    RoomId::Cell,
    RoomId::Gate,
    RoomId::Armory,
    RoomId::Jailers,
];

/// Puts the key on the floor of `room`.
///
/// Fails if `room` is the exit or if the key is already lying somewhere.
pub fn place_key(map: &mut DungeonMap, room: RoomId) -> Result<(), GameError> {
    if room == RoomId::Exit {
        return Err(GameError::ExitCannotHoldKey);
    }
    if let Some(existing) = map.key_location() {
        return Err(GameError::KeyAlreadyPlaced { room: existing });
    }
    map[room].has_key = true;
    debug!("Key placed in {:?}", room);
    Ok(())
}

/// Puts the key in one of `KEY_ROOMS`, each chosen with equal probability.
///
/// Returns the chosen room.
pub fn place_key_randomly<R: Rng + ?Sized>(
    map: &mut DungeonMap,
    rng: &mut R,
) -> Result<RoomId, GameError> {
    let room = KEY_ROOMS[rng.random_range(0..KEY_ROOMS.len())];
    place_key(map, room)?;
    Ok(room)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::build_map;

    #[test]
    fn exit_cannot_hold_key() {
        let mut map = build_map();
        assert_eq!(
            place_key(&mut map, RoomId::Exit),
            Err(GameError::ExitCannotHoldKey)
        );
        assert_eq!(map.key_location(), None);
    }

    #[test]
    fn only_one_key_per_map() {
        let mut map = build_map();
        place_key(&mut map, RoomId::Armory).unwrap();
        assert_eq!(
            place_key(&mut map, RoomId::Cell),
            Err(GameError::KeyAlreadyPlaced {
                room: RoomId::Armory
            })
        );
        assert!(!map[RoomId::Cell].has_key);
    }

    #[test]
    fn random_placement_marks_exactly_one_room() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut map = build_map();
        let room = place_key_randomly(&mut map, &mut rng).unwrap();

        assert_ne!(room, RoomId::Exit);
        assert_eq!(map.key_location(), Some(room));
        assert_eq!(map.rooms().filter(|(_, r)| r.has_key).count(), 1);
    }

    #[test]
    fn random_placement_covers_every_key_room() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 5];
        let trials = 4000;
        for _ in 0..trials {
            let mut map = build_map();
            let room = place_key_randomly(&mut map, &mut rng).unwrap();
            counts[room.index()] += 1;
        }

        assert_eq!(counts[RoomId::Exit.index()], 0);
        for room in KEY_ROOMS {
            // Expected 1000 each; allow a generous margin.
            let count = counts[room.index()];
            assert!(
                (800..=1200).contains(&count),
                "{:?} chosen {} times out of {}",
                room,
                count,
                trials
            );
        }
    }
}
