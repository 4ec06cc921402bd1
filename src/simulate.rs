//! Full-game simulation and win/loss statistics.
//!
//! Plays complete games between two [`MoveSelector`]s and aggregates the
//! results, the way the command-line benchmark reports them.

use std::fmt;
use std::time::{Duration, Instant};

use crate::agent::MoveSelector;
use crate::board::Player;
use crate::config::GameConfig;
use crate::error::MancalaError;
use crate::game::{Game, GameOutcome};

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub p1_score: u32,
    pub p2_score: u32,
    pub total_moves: usize,
    pub elapsed: Duration,
}

impl GameRecord {
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_scores(self.p1_score, self.p2_score)
    }
}

/// Play one game to the end.
///
/// `player_one` moves on Player One's turns and `player_two` on Player Two's.
/// The game also stops early if a selector has no move to offer.
pub fn play_game(
    config: &GameConfig,
    player_one: &mut dyn MoveSelector,
    player_two: &mut dyn MoveSelector,
) -> Result<GameRecord, MancalaError> {
    let mut game = Game::from_config(config)?;
    let start = Instant::now();

    while !game.is_terminal() {
        let selector: &mut dyn MoveSelector = match game.current_player() {
            Player::One => &mut *player_one,
            Player::Two => &mut *player_two,
        };
        let Some(pit) = selector.select_move(&game) else {
            break;
        };
        game.play(pit)?;
    }

    let (p1_score, p2_score) = game.scores();
    Ok(GameRecord {
        p1_score,
        p2_score,
        total_moves: game.moves().len(),
        elapsed: start.elapsed(),
    })
}

/// Aggregated results of a batch of games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSummary {
    pub player_one: String,
    pub player_two: String,
    pub num_games: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub ties: usize,
    pub total_moves: usize,
    pub total_time: Duration,
}

impl SimulationSummary {
    fn new(player_one: &str, player_two: &str) -> Self {
        SimulationSummary {
            player_one: player_one.to_string(),
            player_two: player_two.to_string(),
            num_games: 0,
            p1_wins: 0,
            p2_wins: 0,
            ties: 0,
            total_moves: 0,
            total_time: Duration::ZERO,
        }
    }

    fn record(&mut self, game: &GameRecord) {
        self.num_games += 1;
        match game.outcome() {
            GameOutcome::Winner(Player::One) => self.p1_wins += 1,
            GameOutcome::Winner(Player::Two) => self.p2_wins += 1,
            GameOutcome::Tie => self.ties += 1,
        }
        self.total_moves += game.total_moves;
        self.total_time += game.elapsed;
    }

    pub fn average_moves(&self) -> f64 {
        if self.num_games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.num_games as f64
    }

    pub fn average_time(&self) -> Duration {
        if self.num_games == 0 {
            return Duration::ZERO;
        }
        self.total_time / self.num_games as u32
    }

    fn percent(&self, count: usize) -> f64 {
        if self.num_games == 0 {
            return 0.0;
        }
        count as f64 / self.num_games as f64 * 100.0
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Results after {} games -----", self.num_games)?;
        writeln!(
            f,
            "Player 1 Wins ({}): {}  ({:.1}%)",
            self.player_one,
            self.p1_wins,
            self.percent(self.p1_wins)
        )?;
        writeln!(
            f,
            "Player 2 Wins ({}): {}  ({:.1}%)",
            self.player_two,
            self.p2_wins,
            self.percent(self.p2_wins)
        )?;
        writeln!(f, "Ties: {}  ({:.1}%)", self.ties, self.percent(self.ties))?;
        writeln!(f, "Average Moves per Game: {:.2}", self.average_moves())?;
        writeln!(
            f,
            "Average Time per Game: {:.2}s",
            self.average_time().as_secs_f64()
        )?;
        write!(f, "-----------------------------------")
    }
}

/// Play `num_games` games between the same two selectors.
pub fn simulate_games(
    config: &GameConfig,
    num_games: usize,
    player_one: &mut dyn MoveSelector,
    player_two: &mut dyn MoveSelector,
) -> Result<SimulationSummary, MancalaError> {
    if num_games == 0 {
        return Err(MancalaError::InvalidConfiguration(
            "num_games must be > 0".into(),
        ));
    }
    config.validate()?;

    let mut summary = SimulationSummary::new(player_one.name(), player_two.name());
    for i in 0..num_games {
        let record = play_game(config, player_one, player_two)?;
        log::debug!(
            "game {}: {}-{} in {} moves",
            i + 1,
            record.p1_score,
            record.p2_score,
            record.total_moves
        );
        summary.record(&record);
    }

    log::info!(
        "{} vs {}: {} games, {}/{}/{} (P1/P2/tie)",
        summary.player_one,
        summary.player_two,
        summary.num_games,
        summary.p1_wins,
        summary.p2_wins,
        summary.ties
    );
    Ok(summary)
}
