use chrono::{DateTime, TimeDelta, Utc};
use memory_puzzle_core as game;

/// How long a mismatched pair stays face up.
pub(crate) const MISMATCH_HIDE_DELAY_MS: i64 = 650;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct PendingHide {
    pub tiles: (game::Coord2, game::Coord2),
    pub due: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SessionEvent {
    /// Nothing happened, either the tile was face up or a hide is still pending.
    Ignored,
    FirstSelected(game::Coord2),
    Matched(game::Coord2, game::Coord2),
    Mismatched(PendingHide),
    Completed {
        level: game::LevelConfig,
        moves: u32,
        elapsed_secs: u32,
    },
}

/// One game in progress, plus the timing the board itself does not track.
///
/// Hides are scheduled by position and dropped together with the board on a new game, so a late hide can never
/// touch a newer board.
#[derive(Clone, Debug)]
pub(crate) struct Session {
    board: game::Board,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    pending_hide: Option<PendingHide>,
}

impl Session {
    pub fn new(level: game::LevelConfig, seed: Option<u64>, now: DateTime<Utc>) -> game::Result<Self> {
        let board = game::Board::new(level, seed)?;
        log::info!(
            "Starting {} game with seed {}",
            board.level().name,
            board.seed().unwrap_or_default()
        );
        Ok(Self {
            board,
            started_at: now,
            ended_at: None,
            pending_hide: None,
        })
    }

    pub fn new_game(
        &mut self,
        level: game::LevelConfig,
        seed: Option<u64>,
        now: DateTime<Utc>,
    ) -> game::Result<()> {
        if let Some(pending) = self.pending_hide.take() {
            log::debug!("Dropping pending hide of {:?}", pending.tiles);
        }
        *self = Self::new(level, seed, now)?;
        Ok(())
    }

    pub fn board(&self) -> &game::Board {
        &self.board
    }

    pub fn level(&self) -> &game::LevelConfig {
        self.board.level()
    }

    pub fn pending_hide(&self) -> Option<PendingHide> {
        self.pending_hide
    }

    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        (self.ended_at.unwrap_or(now) - self.started_at)
            .num_seconds()
            .max(0) as u32
    }

    pub fn select(&mut self, coords: game::Coord2, now: DateTime<Utc>) -> game::Result<SessionEvent> {
        use game::RevealOutcome::*;

        if self.pending_hide.is_some() {
            // validate anyway so bad input is still reported
            self.board.validate_coords(coords)?;
            return Ok(SessionEvent::Ignored);
        }

        Ok(match self.board.reveal(coords)? {
            NoChange => SessionEvent::Ignored,
            FirstSelected(first) => SessionEvent::FirstSelected(first),
            Mismatched(first, second) => {
                let pending = PendingHide {
                    tiles: (first, second),
                    due: now + TimeDelta::milliseconds(MISMATCH_HIDE_DELAY_MS),
                };
                self.pending_hide = Some(pending);
                SessionEvent::Mismatched(pending)
            }
            Matched(_, _) if self.board.all_matched() => {
                self.ended_at = Some(now);
                SessionEvent::Completed {
                    level: self.board.level().clone(),
                    moves: self.board.moves(),
                    elapsed_secs: self.elapsed_secs(now),
                }
            }
            Matched(first, second) => SessionEvent::Matched(first, second),
        })
    }

    /// Runs the pending hide once it is due. Returns whether the board changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> game::Result<bool> {
        let Some(pending) = self.pending_hide else {
            return Ok(false);
        };
        if now < pending.due {
            return Ok(false);
        }

        self.pending_hide = None;
        let (a, b) = pending.tiles;
        Ok(self.board.hide_unmatched(a, b)?.has_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000 + millis).unwrap()
    }

    fn session() -> Session {
        Session::new(game::LevelConfig::EASY, Some(42), at(0)).unwrap()
    }

    fn pairs(board: &game::Board) -> Vec<(game::Coord2, game::Coord2)> {
        let mut positions: HashMap<game::Identity, Vec<game::Coord2>> = HashMap::new();
        for snapshot in board.snapshots() {
            positions
                .entry(snapshot.identity)
                .or_default()
                .push(snapshot.coords());
        }
        positions.into_values().map(|found| (found[0], found[1])).collect()
    }

    fn mismatching_pair(board: &game::Board) -> (game::Coord2, game::Coord2) {
        let pairs = pairs(board);
        (pairs[0].0, pairs[1].0)
    }

    #[test]
    fn mismatch_blocks_input_until_hide_fires() {
        let mut session = session();
        let (a, b) = mismatching_pair(session.board());

        assert_eq!(session.select(a, at(0)), Ok(SessionEvent::FirstSelected(a)));
        let event = session.select(b, at(100)).unwrap();
        let expected = PendingHide {
            tiles: (a, b),
            due: at(100 + MISMATCH_HIDE_DELAY_MS),
        };
        assert_eq!(event, SessionEvent::Mismatched(expected));

        // further clicks are swallowed while the pair is on display
        let other = pairs(session.board())[2].0;
        assert_eq!(session.select(other, at(200)), Ok(SessionEvent::Ignored));
        assert!(!session.board()[other].is_revealed());

        assert_eq!(session.tick(at(300)), Ok(false));
        assert!(session.board()[a].is_revealed());

        assert_eq!(session.tick(at(800)), Ok(true));
        assert!(!session.board()[a].is_revealed());
        assert!(!session.board()[b].is_revealed());
        assert_eq!(session.pending_hide(), None);
        assert_eq!(session.tick(at(900)), Ok(false));
    }

    #[test]
    fn blocked_input_still_reports_bad_coords() {
        let mut session = session();
        let (a, b) = mismatching_pair(session.board());
        session.select(a, at(0)).unwrap();
        session.select(b, at(0)).unwrap();

        assert_eq!(
            session.select((7, 7), at(1)),
            Err(game::GameError::InvalidCoords((7, 7)))
        );
    }

    #[test]
    fn new_game_drops_pending_hide() {
        let mut session = session();
        let (a, b) = mismatching_pair(session.board());
        session.select(a, at(0)).unwrap();
        session.select(b, at(0)).unwrap();
        assert!(session.pending_hide().is_some());

        session
            .new_game(game::LevelConfig::MEDIUM, Some(9), at(1_000))
            .unwrap();

        assert_eq!(session.pending_hide(), None);
        assert_eq!(session.tick(at(5_000)), Ok(false));
        assert_eq!(session.level(), &game::LevelConfig::MEDIUM);
        assert!(session.board().tiles().all(|(_, tile)| !tile.is_revealed()));
        assert_eq!(session.elapsed_secs(at(3_500)), 2);
    }

    #[test]
    fn completing_the_board_reports_moves_and_time() {
        let mut session = session();
        let pairs = pairs(session.board());
        let last = pairs.len() - 1;

        for (turn, (first, second)) in pairs.into_iter().enumerate() {
            let now = at(turn as i64 * 1_000);
            session.select(first, now).unwrap();
            let event = session.select(second, now).unwrap();
            if turn == last {
                assert_eq!(
                    event,
                    SessionEvent::Completed {
                        level: game::LevelConfig::EASY,
                        moves: 8,
                        elapsed_secs: 7
                    }
                );
            } else {
                assert_eq!(event, SessionEvent::Matched(first, second));
            }
        }

        // clock stops once the board is solved
        assert_eq!(session.elapsed_secs(at(60_000)), 7);
    }

    #[test]
    fn elapsed_time_counts_whole_seconds() {
        let session = session();

        assert_eq!(session.elapsed_secs(at(0)), 0);
        assert_eq!(session.elapsed_secs(at(2_999)), 2);
        assert_eq!(session.elapsed_secs(at(-5_000)), 0);
    }
}
