//! Constants for board dimensions and search defaults.
//!
//! The board is stored as a fixed-size array so that positions can be copied
//! cheaply during search. Only the first `2 * (pits_per_player + 1)` cells of
//! the array are in use for a given game.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of pits each player owns in a standard game.
pub const DEFAULT_PITS_PER_PLAYER: usize = 6;

/// Number of stones placed in every pit at the start of a standard game.
pub const DEFAULT_STONES_PER_PIT: u32 = 4;

/// Largest supported number of pits per player.
pub const MAX_PITS_PER_PLAYER: usize = 15;

/// Size of the backing cell array (pits plus one store for each player).
pub const MAX_CELLS: usize = 2 * (MAX_PITS_PER_PLAYER + 1);

/// Largest number of stones a board may hold, so store differences fit in `i32`.
pub const MAX_TOTAL_STONES: u32 = i32::MAX as u32;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies, counting the root move.
pub const DEFAULT_SEARCH_DEPTH: usize = 5;

/// Number of games played per experiment by the CLI when none is given.
pub const DEFAULT_NUM_GAMES: usize = 100;
