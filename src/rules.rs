//! Move legality, sowing, capture and end-of-game scoring.
//!
//! All functions operate on a [`Board`] directly. A move is applied either
//! completely (sow, capture, turn switch, sweep) or not at all.
//!
//! This engine has no extra turn for a last stone landing in the mover's own
//! store: every move passes the turn to the other player.

use crate::board::{Board, Player};
use crate::error::MoveError;

/// Summary of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Board index that received the last sown stone
    pub last: usize,
    /// Stones moved into the mover's store by a capture (0 if none)
    pub captured: u32,
    /// Whether the move ended the game
    pub game_over: bool,
}

/// Check whether the current player may sow from `pit` (1-indexed).
pub fn is_legal(board: &Board, pit: usize) -> bool {
    check_move(board, pit).is_ok()
}

/// Resolve a pit number to its board index, or explain why it can't be played.
fn check_move(board: &Board, pit: usize) -> Result<usize, MoveError> {
    let idx = board
        .pit_index(board.current_player, pit)
        .ok_or(MoveError::OutOfRange { pit })?;
    if board.cells[idx] == 0 {
        return Err(MoveError::EmptyPit { pit });
    }
    Ok(idx)
}

/// Pit numbers the current player can sow from, in ascending order.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    let range = board.pit_range(board.current_player);
    let start = range.start;
    range
        .filter(|&idx| board.cells[idx] > 0)
        .map(|idx| idx - start + 1)
        .collect()
}

/// Pick a legal move uniformly at random.
pub fn random_legal_move(board: &Board, rng: &mut fastrand::Rng) -> Option<usize> {
    let moves = legal_moves(board);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// The game is over once either side has no stones left in its pits.
pub fn is_terminal(board: &Board) -> bool {
    board.side_stones(Player::One) == 0 || board.side_stones(Player::Two) == 0
}

/// Play `pit` for the current player.
///
/// Fails without touching the board if the game is already over, the pit is
/// out of range, or the pit is empty.
pub fn apply_move(board: &mut Board, pit: usize) -> Result<MoveResult, MoveError> {
    if is_terminal(board) {
        return Err(MoveError::GameOver);
    }
    let start = check_move(board, pit)?;

    let mover = board.current_player;
    let skip = board.store_index(mover.other());
    let len = board.num_cells();

    let mut stones = board.cells[start];
    board.cells[start] = 0;
    let mut idx = start;
    while stones > 0 {
        idx = (idx + 1) % len;
        if idx == skip {
            continue;
        }
        board.cells[idx] += 1;
        stones -= 1;
    }

    let captured = capture(board, mover, idx);
    board.current_player = mover.other();
    let game_over = is_terminal(board);
    if game_over {
        finalize(board);
    }

    log::trace!("{mover} sowed pit {pit}: last={idx} captured={captured}");

    Ok(MoveResult {
        last: idx,
        captured,
        game_over,
    })
}

/// Capture the opposite pit if the last stone landed in an empty pit of the mover.
fn capture(board: &mut Board, mover: Player, last: usize) -> u32 {
    if board.pit_owner(last) != Some(mover) || board.cells[last] != 1 {
        return 0;
    }
    let opposite = board.opposite(last);
    let taken = board.cells[opposite];
    if taken == 0 {
        return 0;
    }
    let store = board.store_index(mover);
    board.cells[store] += taken + 1;
    board.cells[last] = 0;
    board.cells[opposite] = 0;
    taken + 1
}

/// Sweep the stones left on the non-empty side into that side's store.
///
/// Does nothing unless the board is terminal. Calling it again has no effect.
pub fn finalize(board: &mut Board) {
    if !is_terminal(board) {
        return;
    }
    for player in [Player::One, Player::Two] {
        let remaining = board.side_stones(player);
        if remaining == 0 {
            continue;
        }
        for idx in board.pit_range(player) {
            board.cells[idx] = 0;
        }
        let store = board.store_index(player);
        board.cells[store] += remaining;
    }
}

/// Store contents as `(player_one, player_two)`.
pub fn scores(board: &Board) -> (u32, u32) {
    (board.store(Player::One), board.store(Player::Two))
}

/// Store difference from `player`'s point of view.
pub fn utility(board: &Board, player: Player) -> i32 {
    board.store(player) as i32 - board.store(player.other()) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_legal_moves() {
        let board = Board::default();
        assert_eq!(legal_moves(&board), vec![1, 2, 3, 4, 5, 6]);
        assert!(is_legal(&board, 1));
        assert!(is_legal(&board, 6));
        assert!(!is_legal(&board, 0));
        assert!(!is_legal(&board, 7));
    }

    #[test]
    fn test_legal_moves_skip_empty_pits() {
        let board = Board::from_cells(4, &[0, 2, 0, 1, 3, 1, 1, 1, 1, 5], Player::One).unwrap();
        assert_eq!(legal_moves(&board), vec![2, 4]);
        assert!(!is_legal(&board, 1));
    }

    #[test]
    fn test_legal_moves_for_player_two() {
        let board = Board::from_cells(4, &[1, 1, 1, 1, 0, 0, 3, 0, 2, 0], Player::Two).unwrap();
        assert_eq!(legal_moves(&board), vec![2, 4]);
    }

    #[test]
    fn test_opening_move() {
        let mut board = Board::default();
        let result = apply_move(&mut board, 3).unwrap();
        assert_eq!(board.cells(), &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
        assert_eq!(result.last, 6);
        assert_eq!(result.captured, 0);
        assert!(!result.game_over);
        assert_eq!(board.current_player(), Player::Two);
    }

    #[test]
    fn test_no_extra_turn_in_own_store() {
        let mut board = Board::default();
        // Pit 3 holds 4 stones and ends exactly in Player One's store.
        apply_move(&mut board, 3).unwrap();
        assert_eq!(board.current_player(), Player::Two);
    }

    #[test]
    fn test_sowing_skips_opponent_store() {
        // Pit 2 holds 4 stones: own store, both opposing pits, skip their store, pit 1.
        let mut board = Board::from_cells(2, &[1, 4, 0, 1, 1, 0], Player::One).unwrap();
        let result = apply_move(&mut board, 2).unwrap();
        assert_eq!(board.store(Player::Two), 0);
        assert_eq!(result.last, 0);
        assert_eq!(board.cells(), &[2, 0, 1, 2, 2, 0]);
    }

    #[test]
    fn test_capture() {
        // Player One sows pit 1 (one stone) into the empty pit 2, opposite 4 stones.
        let mut board = Board::from_cells(3, &[1, 0, 2, 0, 1, 4, 3, 0], Player::One).unwrap();
        assert_eq!(board.opposite(1), 5);
        let result = apply_move(&mut board, 1).unwrap();
        assert_eq!(result.captured, 5);
        assert_eq!(board.cells(), &[0, 0, 2, 5, 1, 0, 3, 0]);
    }

    #[test]
    fn test_no_capture_when_opposite_empty() {
        let mut board = Board::from_cells(3, &[1, 0, 2, 0, 1, 0, 3, 0], Player::One).unwrap();
        let result = apply_move(&mut board, 1).unwrap();
        assert_eq!(result.captured, 0);
        assert_eq!(board.cells(), &[0, 1, 2, 0, 1, 0, 3, 0]);
    }

    #[test]
    fn test_no_capture_on_opponent_side() {
        // Player One's last stone lands in an empty pit of Player Two.
        let mut board = Board::from_cells(3, &[1, 0, 2, 0, 0, 1, 3, 0], Player::One).unwrap();
        let result = apply_move(&mut board, 3).unwrap();
        assert_eq!(result.last, 4);
        assert_eq!(result.captured, 0);
        assert_eq!(board.cells(), &[1, 0, 0, 1, 1, 1, 3, 0]);
    }

    #[test]
    fn test_player_two_capture() {
        // Player Two sows pit 1 (index 4) into empty index 5, opposite index 1.
        let mut board = Board::from_cells(3, &[1, 6, 1, 0, 1, 0, 2, 0], Player::Two).unwrap();
        let result = apply_move(&mut board, 1).unwrap();
        assert_eq!(result.captured, 7);
        assert_eq!(board.cells(), &[1, 0, 1, 0, 0, 0, 2, 7]);
        assert_eq!(board.current_player(), Player::One);
    }

    #[test]
    fn test_illegal_moves_leave_board_unchanged() {
        let mut board = Board::from_cells(3, &[0, 2, 1, 0, 1, 1, 1, 0], Player::One).unwrap();
        let before = board;
        for (pit, expected) in [
            (1, MoveError::EmptyPit { pit: 1 }),
            (0, MoveError::OutOfRange { pit: 0 }),
            (4, MoveError::OutOfRange { pit: 4 }),
        ] {
            assert_eq!(apply_move(&mut board, pit), Err(expected));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_on_terminal_board_is_rejected() {
        let mut board = Board::from_cells(3, &[0, 0, 0, 5, 1, 2, 3, 4], Player::Two).unwrap();
        let before = board;
        assert!(is_terminal(&board));
        assert_eq!(apply_move(&mut board, 1), Err(MoveError::GameOver));
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_detection() {
        let board = Board::default();
        assert!(!is_terminal(&board));
        let board = Board::from_cells(3, &[1, 0, 0, 5, 0, 0, 0, 4], Player::One).unwrap();
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_finalize_sweeps_remaining_side() {
        let mut board = Board::from_cells(3, &[0, 0, 0, 5, 1, 2, 3, 4], Player::One).unwrap();
        finalize(&mut board);
        assert_eq!(board.cells(), &[0, 0, 0, 5, 0, 0, 0, 10]);
        assert_eq!(scores(&board), (5, 10));

        finalize(&mut board);
        assert_eq!(scores(&board), (5, 10));
    }

    #[test]
    fn test_finalize_with_both_sides_empty() {
        let mut board = Board::from_cells(2, &[0, 0, 5, 0, 0, 3], Player::One).unwrap();
        let before = board;
        finalize(&mut board);
        assert_eq!(board, before);
        assert_eq!(scores(&board), (5, 3));
    }

    #[test]
    fn test_finalize_ignores_live_board() {
        let mut board = Board::default();
        finalize(&mut board);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_last_move_triggers_sweep() {
        // Player One empties their only stone into the store; Player Two's stones are swept.
        let mut board = Board::from_cells(2, &[0, 1, 3, 2, 1, 4], Player::One).unwrap();
        let result = apply_move(&mut board, 2).unwrap();
        assert!(result.game_over);
        assert_eq!(board.cells(), &[0, 0, 4, 0, 0, 7]);
        assert_eq!(scores(&board), (4, 7));
    }

    #[test]
    fn test_utility_is_store_difference() {
        let board = Board::from_cells(2, &[1, 1, 7, 1, 1, 3], Player::One).unwrap();
        assert_eq!(utility(&board, Player::One), 4);
        assert_eq!(utility(&board, Player::Two), -4);
    }

    #[test]
    fn test_random_legal_move() {
        let mut rng = fastrand::Rng::with_seed(7);
        let board = Board::from_cells(4, &[0, 2, 0, 1, 3, 1, 1, 1, 1, 5], Player::One).unwrap();
        let mut seen = [false; 5];
        for _ in 0..200 {
            let pit = random_legal_move(&board, &mut rng).unwrap();
            assert!(pit == 2 || pit == 4, "pit {pit} is not legal");
            seen[pit] = true;
        }
        assert!(seen[2] && seen[4], "both legal moves should be drawn");
    }

    #[test]
    fn test_random_legal_move_none_without_stones() {
        let mut rng = fastrand::Rng::with_seed(1);
        let board = Board::from_cells(3, &[0, 0, 0, 5, 1, 2, 3, 4], Player::One).unwrap();
        assert!(legal_moves(&board).is_empty());
        assert_eq!(random_legal_move(&board, &mut rng), None);
    }
}
