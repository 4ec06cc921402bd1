//! Adversarial search: depth-limited minimax and alpha-beta pruning.
//!
//! Both searches score leaves with the store difference from the point of
//! view of the player to move at the root, and explore copies of the root
//! [`Board`], so the caller's position is never touched.
//!
//! `depth` counts plies including the root move: at depth 1 each legal move
//! is scored by the position it leads to. A depth of 0 is treated as 1.
//!
//! Moves are tried in ascending pit order and the root keeps the first move
//! reaching the best value, so minimax and alpha-beta always agree on the
//! chosen move. They differ only in how many positions they visit.

use crate::board::{Board, Player};
use crate::game::Game;
use crate::rules;

/// Outcome of a search from one root position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best pit for the side to move, or `None` if it has no legal move
    pub best_move: Option<usize>,
    /// Minimax value of the root from the mover's point of view
    pub value: i32,
    /// Positions visited, root included
    pub nodes: u64,
}

/// Positions reachable in one move, paired with the pit that leads there.
fn successors(board: &Board) -> impl Iterator<Item = (usize, Board)> + '_ {
    rules::legal_moves(board).into_iter().filter_map(|pit| {
        let mut next = *board;
        rules::apply_move(&mut next, pit).ok().map(|_| (pit, next))
    })
}

// =============================================================================
// Minimax
// =============================================================================

/// Run a plain minimax search to `depth` plies.
pub fn minimax(board: &Board, depth: usize) -> SearchResult {
    let depth = depth.max(1);
    let root = board.current_player();
    let mut nodes = 1;
    let mut best: Option<(usize, i32)> = None;

    for (pit, next) in successors(board) {
        let value = minimax_value(&next, depth - 1, root, false, &mut nodes);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pit, value));
        }
    }

    let result = finish(board, root, best, nodes);
    log::debug!(
        "minimax depth={depth} move={:?} value={} nodes={}",
        result.best_move,
        result.value,
        result.nodes
    );
    result
}

fn minimax_value(
    board: &Board,
    depth: usize,
    root: Player,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 || rules::is_terminal(board) {
        return rules::utility(board, root);
    }

    let mut best: Option<i32> = None;
    for (_, next) in successors(board) {
        let value = minimax_value(&next, depth - 1, root, !maximizing, nodes);
        best = Some(match best {
            None => value,
            Some(b) if maximizing => b.max(value),
            Some(b) => b.min(value),
        });
    }
    best.unwrap_or_else(|| rules::utility(board, root))
}

// =============================================================================
// Alpha-beta
// =============================================================================

/// Run an alpha-beta search with a cutoff at `depth` plies.
///
/// The root passes its best value so far down as `alpha`. A pruned child can
/// only report a bound no better than that value, so it never displaces the
/// first best move and the choice matches [`minimax`].
pub fn alphabeta(board: &Board, depth: usize) -> SearchResult {
    let depth = depth.max(1);
    let root = board.current_player();
    let mut nodes = 1;
    let mut alpha = i32::MIN;
    let mut best: Option<(usize, i32)> = None;

    for (pit, next) in successors(board) {
        let value = alphabeta_value(&next, depth - 1, alpha, i32::MAX, root, false, &mut nodes);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pit, value));
            alpha = alpha.max(value);
        }
    }

    let result = finish(board, root, best, nodes);
    log::debug!(
        "alphabeta depth={depth} move={:?} value={} nodes={}",
        result.best_move,
        result.value,
        result.nodes
    );
    result
}

fn alphabeta_value(
    board: &Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    root: Player,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 || rules::is_terminal(board) {
        return rules::utility(board, root);
    }

    let mut best: Option<i32> = None;
    for (_, next) in successors(board) {
        let value = alphabeta_value(&next, depth - 1, alpha, beta, root, !maximizing, nodes);
        if maximizing {
            let v = best.map_or(value, |b| b.max(value));
            best = Some(v);
            alpha = alpha.max(v);
        } else {
            let v = best.map_or(value, |b| b.min(value));
            best = Some(v);
            beta = beta.min(v);
        }
        if alpha >= beta {
            break;
        }
    }
    best.unwrap_or_else(|| rules::utility(board, root))
}

fn finish(board: &Board, root: Player, best: Option<(usize, i32)>, nodes: u64) -> SearchResult {
    match best {
        Some((pit, value)) => SearchResult {
            best_move: Some(pit),
            value,
            nodes,
        },
        None => SearchResult {
            best_move: None,
            value: rules::utility(board, root),
            nodes,
        },
    }
}

// =============================================================================
// Game-level entry points
// =============================================================================

/// Best move for the side to move according to minimax.
pub fn choose_move_minimax(game: &Game, depth: usize) -> Option<usize> {
    minimax(game.board(), depth).best_move
}

/// Best move for the side to move according to alpha-beta search.
pub fn choose_move_alphabeta(game: &Game, depth: usize) -> Option<usize> {
    alphabeta(game.board(), depth).best_move
}
