//! Mancala: a two-player Mancala engine with game-tree search.
//!
//! This crate implements the board rules of Mancala (sowing, captures and the
//! end-of-game sweep) and two adversarial searches that pick moves on top of
//! them: depth-limited minimax and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and search defaults
//! - [`config`] - Validated game configuration
//! - [`error`] - Error types
//! - [`board`] - Board layout, players and rendering
//! - [`rules`] - Move legality, sowing, capture and scoring
//! - [`game`] - Player-facing game API with a move log
//! - [`search`] - Minimax and alpha-beta search
//! - [`agent`] - The `MoveSelector` trait and its strategies
//! - [`simulate`] - Full-game simulation and statistics
//!
//! ## Example
//!
//! ```
//! use mancala::game::Game;
//! use mancala::search::choose_move_alphabeta;
//!
//! // Create a standard game: 6 pits per player, 4 stones per pit
//! let mut game = Game::default();
//!
//! // Play a move for Player One
//! game.play(3).unwrap();
//!
//! // Search for Player Two's reply
//! let reply = choose_move_alphabeta(&game, 5).unwrap();
//! game.play(reply).unwrap();
//! println!("{}", game.board());
//! ```

pub mod agent;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod simulate;
