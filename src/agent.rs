//! Move selection strategies behind a common trait.
//!
//! Drivers hold a `&mut dyn MoveSelector` and never care which strategy is
//! behind it.

use crate::constants::DEFAULT_SEARCH_DEPTH;
use crate::game::Game;
use crate::search;

/// Anything that can pick a pit for the side to move.
pub trait MoveSelector {
    /// Choose a pit for the current player, or `None` if there is no legal move.
    fn select_move(&mut self, game: &Game) -> Option<usize>;

    /// Display name used in reports.
    fn name(&self) -> &str;
}

/// Plain depth-limited minimax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    pub depth: usize,
}

impl Minimax {
    pub fn new(depth: usize) -> Self {
        Minimax { depth }
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl MoveSelector for Minimax {
    fn select_move(&mut self, game: &Game) -> Option<usize> {
        search::choose_move_minimax(game, self.depth)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Alpha-beta search with a depth cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBeta {
    pub depth: usize,
}

impl AlphaBeta {
    pub fn new(depth: usize) -> Self {
        AlphaBeta { depth }
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl MoveSelector for AlphaBeta {
    fn select_move(&mut self, game: &Game) -> Option<usize> {
        search::choose_move_alphabeta(game, self.depth)
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}

/// Picks uniformly among the legal moves.
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl RandomPlayer {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        RandomPlayer {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomPlayer {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomPlayer {
    fn select_move(&mut self, game: &Game) -> Option<usize> {
        game.random_legal_move(&mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
