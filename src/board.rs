//! Mancala board representation.
//!
//! The board is a single array of stone counts laid out counter-clockwise:
//! - Player One's pits at `0..n`, followed by Player One's store at `n`
//! - Player Two's pits at `n+1..=2n`, followed by Player Two's store at `2n+1`
//!
//! Pits are numbered from 1 to `n` from each player's own point of view, so
//! pit 1 is the first cell of that player's range.

use std::fmt;
use std::ops::Range;

use crate::config::GameConfig;
use crate::constants::{MAX_CELLS, MAX_TOTAL_STONES};
use crate::error::MancalaError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Short label used when rendering the board
    pub fn label(self) -> &'static str {
        match self {
            Player::One => "P1",
            Player::Two => "P2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A Mancala position: stone counts plus the side to move.
///
/// `Board` is `Copy`, so the search can explore a branch by value without
/// touching the caller's position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pits_per_player: usize,
    pub(crate) cells: [u32; MAX_CELLS],
    pub(crate) current_player: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::starting(&GameConfig::default())
    }
}

impl Board {
    /// Create the starting position: every pit holds `stones_per_pit`, both
    /// stores are empty and Player One moves first.
    pub fn new(pits_per_player: usize, stones_per_pit: u32) -> Result<Self, MancalaError> {
        Self::from_config(&GameConfig::new(pits_per_player, stones_per_pit))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, MancalaError> {
        config.validate()?;
        Ok(Self::starting(config))
    }

    fn starting(config: &GameConfig) -> Self {
        let mut board = Board {
            pits_per_player: config.pits_per_player,
            cells: [0; MAX_CELLS],
            current_player: Player::One,
        };
        for player in [Player::One, Player::Two] {
            for idx in board.pit_range(player) {
                board.cells[idx] = config.stones_per_pit;
            }
        }
        board
    }

    /// Build an arbitrary position from its cell values, in board layout order.
    ///
    /// `cells` must hold exactly `2 * (pits_per_player + 1)` values, summing to
    /// at most [`MAX_TOTAL_STONES`].
    pub fn from_cells(
        pits_per_player: usize,
        cells: &[u32],
        current_player: Player,
    ) -> Result<Self, MancalaError> {
        // Any positive stone count passes validation; only the pit count matters here.
        GameConfig::new(pits_per_player, 1).validate()?;
        let expected = 2 * (pits_per_player + 1);
        if cells.len() != expected {
            return Err(MancalaError::InvalidConfiguration(format!(
                "expected {expected} cells for {pits_per_player} pits per player, got {}",
                cells.len()
            )));
        }
        let total = cells.iter().try_fold(0u32, |acc, &c| acc.checked_add(c));
        if total.is_none_or(|t| t > MAX_TOTAL_STONES) {
            return Err(MancalaError::InvalidConfiguration(format!(
                "a board holds at most {MAX_TOTAL_STONES} stones"
            )));
        }
        let mut board = Board {
            pits_per_player,
            cells: [0; MAX_CELLS],
            current_player,
        };
        board.cells[..expected].copy_from_slice(cells);
        Ok(board)
    }

    #[inline]
    pub fn pits_per_player(&self) -> usize {
        self.pits_per_player
    }

    /// Number of cells in use (pits and stores).
    #[inline]
    pub fn num_cells(&self) -> usize {
        2 * (self.pits_per_player + 1)
    }

    /// The cells in use, in board layout order.
    pub fn cells(&self) -> &[u32] {
        &self.cells[..self.num_cells()]
    }

    /// Stone count at a board index. Indices past the live cells read as 0.
    #[inline]
    pub fn get(&self, idx: usize) -> u32 {
        if idx >= self.num_cells() {
            return 0;
        }
        self.cells[idx]
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Board indices of a player's pits (stores excluded).
    pub fn pit_range(&self, player: Player) -> Range<usize> {
        let n = self.pits_per_player;
        match player {
            Player::One => 0..n,
            Player::Two => n + 1..2 * n + 1,
        }
    }

    /// Board index of a player's store.
    pub fn store_index(&self, player: Player) -> usize {
        match player {
            Player::One => self.pits_per_player,
            Player::Two => 2 * self.pits_per_player + 1,
        }
    }

    /// Map a 1-indexed pit number of `player` to its board index.
    pub fn pit_index(&self, player: Player, pit: usize) -> Option<usize> {
        if pit == 0 || pit > self.pits_per_player {
            return None;
        }
        Some(self.pit_range(player).start + pit - 1)
    }

    /// The pit mirrored across the board from `idx`.
    ///
    /// Offset `k` from the start of one range maps to offset `k` from the end
    /// of the other; with this layout both directions reduce to `2n - idx`.
    #[inline]
    pub fn opposite(&self, idx: usize) -> usize {
        2 * self.pits_per_player - idx
    }

    /// Which player's pit range contains `idx`, if any.
    pub fn pit_owner(&self, idx: usize) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&p| self.pit_range(p).contains(&idx))
    }

    pub fn store(&self, player: Player) -> u32 {
        self.cells[self.store_index(player)]
    }

    /// Stones remaining in a player's pits.
    pub fn side_stones(&self, player: Player) -> u32 {
        self.cells[self.pit_range(player)].iter().sum()
    }

    pub fn total_stones(&self) -> u32 {
        self.cells().iter().sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.pits_per_player;
        let p1 = &self.cells[self.pit_range(Player::One)];
        let p2 = &self.cells[self.pit_range(Player::Two)];

        writeln!(f, "P1               P2")?;
        writeln!(f, "     ____{}____     ", self.store(Player::Two))?;
        for i in 0..n {
            // Player Two's pits run the other way, so row i faces p2[n - 1 - i].
            let (left, right) = (p1[i], p2[n - 1 - i]);
            if i == n - 1 {
                writeln!(f, "{} -> |_{left}_|_{right}_| <- {}", i + 1, n - i)?;
            } else {
                writeln!(f, "{} -> | {left} | {right} | <- {}", i + 1, n - i)?;
            }
        }
        writeln!(f, "         {}         ", self.store(Player::One))?;
        write!(f, "Turn: {}", self.current_player)
    }
}
