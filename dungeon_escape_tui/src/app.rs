use dungeon_escape_core::{Direction, Game};
use log::{debug, info};

/// Which screen is showing. Each one replaces the previous on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title and instructions, waiting for any key.
    Splash,
    /// Room view, waiting for a direction.
    Playing,
    /// The last move was refused, waiting for any key.
    /// `locked` is set when the exit door was what stopped the player.
    Rejected { locked: bool },
    /// Escape or death message, waiting for any key before quitting.
    Finished,
}

pub struct App {
    /// The game being played.
    pub game: Game,
    pub screen: Screen,
    /// Flag to control the main loop.
    pub should_quit: bool,
}

/// Maps a key press to a direction: `w`, `a`, `s`, `d` for the compass points,
/// anything else to `Direction::None`.
pub fn direction_for(key: Option<char>) -> Direction {
    match key {
        Some('w') => Direction::North,
        Some('a') => Direction::West,
        Some('s') => Direction::South,
        Some('d') => Direction::East,
        _ => Direction::None,
    }
}

impl App {
    pub fn new(game: Game, skip_intro: bool) -> Self {
        App {
            game,
            screen: if skip_intro {
                Screen::Playing
            } else {
                Screen::Splash
            },
            should_quit: false,
        }
    }

    /// Handles one key press. `None` stands for a key that is not a character.
    pub fn handle_key(&mut self, key: Option<char>) {
        match self.screen {
            Screen::Splash | Screen::Rejected { .. } => self.screen = Screen::Playing,
            Screen::Playing => self.take_turn(direction_for(key)),
            Screen::Finished => self.quit(),
        }
    }

    fn take_turn(&mut self, direction: Direction) {
        let moved = self.game.attempt_move(direction);
        let player = self.game.player();
        debug!(
            "Move {:?} {}: now in {:?} with health {}",
            direction,
            if moved { "accepted" } else { "rejected" },
            player.current_room,
            player.health
        );

        if !self.game.is_ongoing() {
            info!("Game over: {:?}", self.game.outcome());
            self.screen = Screen::Finished;
        } else if !moved {
            self.screen = Screen::Rejected {
                locked: self.game.is_locked_exit(direction),
            };
        }
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use dungeon_escape_core::{Outcome, RoomId};

    use super::*;

    fn playing(key_room: RoomId) -> App {
        App::new(Game::with_key_in(key_room).unwrap(), true)
    }

    fn press_all(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(Some(c));
        }
    }

    #[test]
    fn maps_wasd_to_directions() {
        assert_eq!(direction_for(Some('w')), Direction::North);
        assert_eq!(direction_for(Some('a')), Direction::West);
        assert_eq!(direction_for(Some('s')), Direction::South);
        assert_eq!(direction_for(Some('d')), Direction::East);
        assert_eq!(direction_for(Some('W')), Direction::None);
        assert_eq!(direction_for(Some('x')), Direction::None);
        assert_eq!(direction_for(None), Direction::None);
    }

    #[test]
    fn splash_waits_for_any_key() {
        let mut app = App::new(Game::with_key_in(RoomId::Cell).unwrap(), false);
        assert_eq!(app.screen, Screen::Splash);

        app.handle_key(Some('s'));
        assert_eq!(app.screen, Screen::Playing);
        // The dismissing key is not a move.
        assert_eq!(app.game.player().current_room, RoomId::Cell);
    }

    #[test]
    fn wall_bump_shows_generic_rejection() {
        let mut app = playing(RoomId::Armory);
        app.handle_key(Some('w'));
        assert_eq!(app.screen, Screen::Rejected { locked: false });

        app.handle_key(None);
        assert_eq!(app.screen, Screen::Playing);
    }

    #[test]
    fn unknown_key_is_a_rejected_move() {
        let mut app = playing(RoomId::Armory);
        app.handle_key(None);
        assert_eq!(app.screen, Screen::Rejected { locked: false });
        assert_eq!(app.game.player().health, 10);
    }

    #[test]
    fn locked_exit_shows_locked_rejection() {
        let mut app = playing(RoomId::Jailers);
        app.handle_key(Some('d'));
        assert_eq!(app.game.player().current_room, RoomId::Gate);

        app.handle_key(Some('d'));
        assert_eq!(app.screen, Screen::Rejected { locked: true });
        assert_eq!(app.game.player().current_room, RoomId::Gate);
    }

    #[test]
    fn escaping_finishes_then_quits() {
        let mut app = playing(RoomId::Armory);
        press_all(&mut app, "swdd");
        assert_eq!(app.screen, Screen::Finished);
        assert_eq!(app.game.outcome(), Some(Outcome::Escaped));
        assert!(!app.should_quit);

        app.handle_key(Some('x'));
        assert!(app.should_quit);
    }

    #[test]
    fn running_out_of_health_finishes() {
        let mut app = playing(RoomId::Gate);
        press_all(&mut app, "swswswswsw");
        assert_eq!(app.screen, Screen::Finished);
        assert_eq!(app.game.outcome(), Some(Outcome::Died));
    }
}
