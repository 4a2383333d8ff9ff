use std::time::{Duration, Instant};

use log::debug;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::board::Board;
use crate::grid::{Grid, Position, Size};

/// What a single press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressOutcome {
    /// Positions whose panels turned, pressed cell first.
    pub affected: Vec<Position>,
    /// Whether this press cleared the board.
    pub solved: bool,
}

/// One stage attempt: a board scrambled from a seed, the clock, and a per-cell
/// press ledger. The session latches once the board is solved; presses after
/// the clear are ignored and the clock stops.
#[derive(Debug)]
pub struct Session {
    board: Board,
    press_counts: Grid<u8>,
    seed: u64,
    scramble_presses: usize,
    player_presses: usize,
    started: Instant,
    solved_in: Option<Duration>,
}

impl Session {
    pub fn new(size: Size, scramble_presses: usize, seed: u64) -> Self {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let mut board = Board::new(size);
        let trace = board.scramble(scramble_presses, &mut rng);

        let mut press_counts = Grid::new(size.width, size.height, &mut |_, _| 0u8);

        for &(x, y) in &trace {
            let count = press_counts.get_mut(x, y).unwrap();

            *count = (*count + 1) % 4;
        }

        // A scramble can land uniform by chance; that counts as an instant win.
        let solved_in = if board.is_solved() {
            Some(Duration::ZERO)
        } else {
            None
        };

        Self {
            board,
            press_counts,
            seed,
            scramble_presses: trace.len(),
            player_presses: 0,
            started: Instant::now(),
            solved_in,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn scramble_presses(&self) -> usize {
        self.scramble_presses
    }

    /// Player presses so far; scramble presses are not counted.
    pub fn presses(&self) -> usize {
        self.player_presses
    }

    pub fn solved(&self) -> bool {
        self.solved_in.is_some()
    }

    /// Time played. Stops advancing once the board clears.
    pub fn elapsed(&self) -> Duration {
        match self.solved_in {
            Some(frozen) => frozen,
            None => self.started.elapsed(),
        }
    }

    /// Applies a player press. `None` once the session is solved: a cleared
    /// board no longer reacts.
    pub fn press(&mut self, x: usize, y: usize) -> Option<PressOutcome> {
        if self.solved_in.is_some() {
            return None;
        }

        let affected = self.board.press(x, y);
        let count = self.press_counts.get_mut(x, y).unwrap();

        *count = (*count + 1) % 4;
        self.player_presses += 1;

        let solved = self.board.is_solved();

        if solved {
            self.solved_in = Some(self.started.elapsed());
            debug!("Cleared after {} presses", self.player_presses);
        }

        Some(PressOutcome { affected, solved })
    }

    /// Presses that bring every panel back to pointing up: each cell pressed
    /// often enough to complete its mod-4 press count. Presses commute and four
    /// presses of one cell cancel out, so the order does not matter and the
    /// result is always a valid clear, though rarely the shortest one.
    pub fn solution(&self) -> Vec<Position> {
        let mut presses = Vec::new();

        for (x, y, &count) in &self.press_counts {
            for _ in 0..(4 - count) % 4 {
                presses.push((x, y));
            }
        }

        presses
    }
}
