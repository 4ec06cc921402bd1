//! Player-facing game API.
//!
//! [`Game`] wraps a [`Board`] together with the history of moves played on
//! it. Human drivers, search agents and the simulation loop all go through
//! this type.

use std::cmp::Ordering;

use crate::board::{Board, Player};
use crate::config::GameConfig;
use crate::error::{MancalaError, MoveError};
use crate::rules::{self, MoveResult};

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

impl GameOutcome {
    /// Compare final store counts: the larger store wins.
    pub fn from_scores(p1: u32, p2: u32) -> Self {
        match p1.cmp(&p2) {
            Ordering::Greater => GameOutcome::Winner(Player::One),
            Ordering::Less => GameOutcome::Winner(Player::Two),
            Ordering::Equal => GameOutcome::Tie,
        }
    }
}

/// A game in progress: the current position plus the move log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    board: Board,
    /// Moves played so far as `(player, pit)`; never consulted by the rules
    moves: Vec<(Player, usize)>,
}

impl Game {
    /// Start a new game with the given board dimensions.
    pub fn new(pits_per_player: usize, stones_per_pit: u32) -> Result<Self, MancalaError> {
        Self::from_config(&GameConfig::new(pits_per_player, stones_per_pit))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, MancalaError> {
        Ok(Self::from_board(Board::from_config(config)?))
    }

    /// Continue play from an existing position with an empty move log.
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> &[(Player, usize)] {
        &self.moves
    }

    pub fn is_legal(&self, pit: usize) -> bool {
        rules::is_legal(&self.board, pit)
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        rules::legal_moves(&self.board)
    }

    pub fn random_legal_move(&self, rng: &mut fastrand::Rng) -> Option<usize> {
        rules::random_legal_move(&self.board, rng)
    }

    /// Play `pit` for the side to move and record it in the move log.
    ///
    /// On error neither the board nor the log changes.
    pub fn play(&mut self, pit: usize) -> Result<MoveResult, MoveError> {
        let player = self.board.current_player();
        let result = rules::apply_move(&mut self.board, pit)?;
        self.moves.push((player, pit));
        Ok(result)
    }

    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    /// Store contents as `(player_one, player_two)`.
    pub fn scores(&self) -> (u32, u32) {
        rules::scores(&self.board)
    }

    pub fn utility(&self, player: Player) -> i32 {
        rules::utility(&self.board, player)
    }

    /// Winner of a finished game, or `None` while play continues.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_terminal() {
            return None;
        }
        let (p1, p2) = self.scores();
        Some(GameOutcome::from_scores(p1, p2))
    }
}
