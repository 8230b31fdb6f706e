//! The tick simulation.
//!
//! `GameState` owns the snake, the special cells, the score and every timer.
//! The front end advances it by feeding elapsed milliseconds into
//! [`GameState::tick`]; one movement step fires per 300 ms interval, while the
//! bomb fuse and the boost cycle count down independently of movement. All
//! fatal conditions collapse into the single terminal `game_over` flag.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::core::{grid, GameRng};
use crate::types::{
    Cue, Direction, BOMB_FUSE_MS, BOMB_ODDS, BOOST_ACTIVE_MS, BOOST_HIDDEN_MS, CELL_COUNT,
    MOVE_INTERVAL_MS, START_CELL,
};

/// Complete simulation state.
///
/// Fields are public so that tests (and the view) can inspect and stage
/// scenarios directly; the timing fields stay private because they only make
/// sense through [`GameState::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Snake body, head at the front, tail at the back. Never empty.
    pub snake: VecDeque<u16>,
    pub direction: Direction,
    /// Apple cell. `None` only while a bomb occupies the apple slot or the
    /// board filled up.
    pub apple: Option<u16>,
    /// Bomb cell. Transient: reverts to an apple when the fuse runs out.
    pub bomb: Option<u16>,
    /// Boost cell. Cycles absent (15 s) -> active (5 s) -> absent.
    pub boost: Option<u16>,
    pub score: u32,
    pub game_over: bool,
    /// Set together with `game_over` when the board fills up completely.
    pub won: bool,
    pub rng: GameRng,
    /// At most one accepted direction change per movement step.
    direction_locked: bool,
    move_timer_ms: u32,
    bomb_timer_ms: u32,
    boost_timer_ms: u32,
    last_cue: Option<Cue>,
}

impl GameState {
    /// Create a new game: single-segment snake on the center cell, heading
    /// right, apple on a random free cell, boost cycle armed.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            snake: VecDeque::from([START_CELL]),
            direction: Direction::Right,
            apple: None,
            bomb: None,
            boost: None,
            score: 0,
            game_over: false,
            won: false,
            rng: GameRng::new(seed),
            direction_locked: false,
            move_timer_ms: 0,
            bomb_timer_ms: 0,
            boost_timer_ms: BOOST_HIDDEN_MS,
            last_cue: None,
        };
        state.apple = state.sample_free_cell(None);
        state
    }

    /// Request a direction change.
    ///
    /// Silently rejected when a change is already locked in for the current
    /// step, or when `dir` would reverse the snake into itself. On acceptance
    /// the direction locks until the next movement step completes.
    pub fn request_direction(&mut self, dir: Direction) {
        if self.direction_locked || dir == self.direction.opposite() {
            return;
        }
        self.direction = dir;
        self.direction_locked = true;
    }

    /// Advance the simulation by `elapsed_ms` of wall time.
    ///
    /// Fires one movement step per 300 ms interval and counts the bomb fuse
    /// and boost cycle down. Does nothing once the game is over, which also
    /// stops both special-cell timers from mutating terminal state.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }

        // Consume time in slices that never cross a movement boundary. The
        // countdowns are charged per slice before the step runs, so a timer
        // armed (or re-armed) by a step is only ever charged with time that
        // elapsed after the arming.
        let mut remaining = elapsed_ms;
        while remaining > 0 {
            let slice = remaining.min(MOVE_INTERVAL_MS - self.move_timer_ms);
            remaining -= slice;
            self.move_timer_ms += slice;

            if self.bomb.is_some() {
                self.bomb_timer_ms = self.bomb_timer_ms.saturating_sub(slice);
            }
            self.boost_timer_ms = self.boost_timer_ms.saturating_sub(slice);

            if self.move_timer_ms >= MOVE_INTERVAL_MS {
                self.move_timer_ms = 0;
                self.step();
                if self.game_over {
                    return;
                }
            }

            // Bomb fuse: the bomb reverts to an apple when it runs out. A
            // fatal collision ends the game first, so a consumed bomb never
            // reverts.
            if self.bomb.is_some() && self.bomb_timer_ms == 0 {
                self.apple = self.bomb.take();
            }

            // Boost cycle: absent -> active -> absent, re-armed on every
            // change. A step at this boundary runs first, so a spawned boost
            // never lands on the cell the head just took.
            if self.boost_timer_ms == 0 {
                match self.boost.take() {
                    None => {
                        // No free cell: skip this activation and re-arm.
                        self.boost = self.sample_free_cell(None);
                        self.boost_timer_ms = if self.boost.is_some() {
                            BOOST_ACTIVE_MS
                        } else {
                            BOOST_HIDDEN_MS
                        };
                    }
                    Some(_) => {
                        self.boost_timer_ms = BOOST_HIDDEN_MS;
                    }
                }
            }
        }
    }

    /// One movement step: the core transition.
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }
        let Some(&head) = self.snake.front() else {
            return;
        };

        // Boundary exit is checked inside grid::step, before any index
        // arithmetic could wrap across a row edge.
        let Some(next) = grid::step(head, self.direction) else {
            self.end_game();
            return;
        };

        let is_eating = self.apple == Some(next);
        let tail = self.snake.back().copied().unwrap_or(head);

        // Moving onto the tail cell is safe only when the tail vacates this
        // step, i.e. on a non-eating move.
        if self.snake.contains(&next) && (next != tail || is_eating) {
            self.end_game();
            return;
        }
        if self.bomb == Some(next) {
            self.end_game();
            return;
        }

        if is_eating {
            self.score += 1;
            self.last_cue = Some(Cue::Eat);
            self.apple = self.sample_free_cell(Some(next));
            if self.apple.is_none() {
                // Board full: the run is complete.
                self.won = true;
                self.game_over = true;
            }
            // Tail kept: the snake grows by one below.
        } else {
            self.snake.pop_back();
            // Only an existing apple next to the new head ever turns into a
            // bomb; a bomb is never spawned on a fresh cell, so it cannot
            // appear adjacent to the head out of nowhere.
            if let Some(apple) = self.apple {
                if grid::is_adjacent(next, apple) && self.rng.one_in(BOMB_ODDS) {
                    self.bomb = Some(apple);
                    self.apple = None;
                    self.bomb_timer_ms = BOMB_FUSE_MS;
                }
            }
        }

        if self.boost == Some(next) {
            // Shrink-to-one: the new head becomes the sole segment.
            self.last_cue = Some(Cue::Eat);
            self.snake.clear();
            self.boost = None;
            self.boost_timer_ms = BOOST_HIDDEN_MS;
        }

        self.snake.push_front(next);
        self.direction_locked = false;
    }

    /// Take the pending sound cue, if any.
    pub fn take_cue(&mut self) -> Option<Cue> {
        self.last_cue.take()
    }

    fn end_game(&mut self) {
        self.game_over = true;
        self.last_cue = Some(Cue::GameOver);
    }

    /// Pick a uniformly random cell not occupied by the snake, the apple,
    /// the bomb, the boost or `also_exclude`. `None` when no cell qualifies.
    fn sample_free_cell(&mut self, also_exclude: Option<u16>) -> Option<u16> {
        let mut free = ArrayVec::<u16, { CELL_COUNT as usize }>::new();
        for cell in 1..=CELL_COUNT {
            let occupied = self.snake.contains(&cell)
                || self.apple == Some(cell)
                || self.bomb == Some(cell)
                || self.boost == Some(cell)
                || also_exclude == Some(cell);
            if !occupied {
                free.push(cell);
            }
        }
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.pick(free.len())])
    }
}
