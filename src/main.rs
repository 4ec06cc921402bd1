//! Mancala: play and benchmark Mancala search agents.
//!
//! ## Usage
//!
//! - `mancala` - Play one demo game, printing the board after every move
//! - `mancala demo` - Same as above, with options
//! - `mancala simulate` - Play a batch of games: search agent vs random
//! - `mancala benchmark` - Run the standard set of experiments

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use mancala::agent::{AlphaBeta, Minimax, MoveSelector, RandomPlayer};
use mancala::board::Player;
use mancala::config::GameConfig;
use mancala::constants::{
    DEFAULT_NUM_GAMES, DEFAULT_PITS_PER_PLAYER, DEFAULT_SEARCH_DEPTH, DEFAULT_STONES_PER_PIT,
};
use mancala::game::{Game, GameOutcome};
use mancala::simulate::simulate_games;

/// Mancala: minimax and alpha-beta search agents
#[derive(Parser)]
#[command(name = "mancala")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game (Player 1 = chosen strategy, Player 2 = random) and show every move
    Demo {
        #[command(flatten)]
        agent: AgentArgs,
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Play a batch of games (Player 1 = chosen strategy, Player 2 = random)
    Simulate {
        /// Number of games to play
        #[arg(long, default_value_t = DEFAULT_NUM_GAMES)]
        games: usize,
        #[command(flatten)]
        agent: AgentArgs,
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Run the standard experiments: random, minimax and alpha-beta against random
    Benchmark {
        /// Seed for the random players
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Random,
    Minimax,
    Alphabeta,
}

#[derive(clap::Args)]
struct AgentArgs {
    /// Move selection strategy for Player 1
    #[arg(long, value_enum, default_value_t = Strategy::Alphabeta)]
    strategy: Strategy,
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: usize,
    /// Seed for the random players
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(clap::Args)]
struct BoardArgs {
    /// Pits per player
    #[arg(long, default_value_t = DEFAULT_PITS_PER_PLAYER)]
    pits: usize,
    /// Stones per pit at the start
    #[arg(long, default_value_t = DEFAULT_STONES_PER_PIT)]
    stones: u32,
}

impl BoardArgs {
    fn config(&self) -> Result<GameConfig> {
        let config = GameConfig::new(self.pits, self.stones);
        config.validate().context("invalid board options")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { agent, board }) => run_demo(&agent, &board.config()?),
        Some(Commands::Simulate {
            games,
            agent,
            board,
        }) => {
            let config = board.config()?;
            run_simulation(&config, games, agent.strategy, agent.depth, agent.seed)
        }
        Some(Commands::Benchmark { seed }) => run_benchmark(seed),
        None => {
            let agent = AgentArgs {
                strategy: Strategy::Alphabeta,
                depth: DEFAULT_SEARCH_DEPTH,
                seed: None,
            };
            run_demo(&agent, &GameConfig::default())
        }
    }
}

fn random_player(seed: Option<u64>) -> RandomPlayer {
    seed.map_or_else(RandomPlayer::new, RandomPlayer::with_seed)
}

fn make_selector(strategy: Strategy, depth: usize, seed: Option<u64>) -> Box<dyn MoveSelector> {
    match strategy {
        Strategy::Random => Box::new(random_player(seed)),
        Strategy::Minimax => Box::new(Minimax::new(depth)),
        Strategy::Alphabeta => Box::new(AlphaBeta::new(depth)),
    }
}

fn run_demo(agent: &AgentArgs, config: &GameConfig) -> Result<()> {
    let mut player_one = make_selector(agent.strategy, agent.depth, agent.seed);
    // Offset the seed so two random players don't mirror each other.
    let mut player_two = random_player(agent.seed.map(|s| s.wrapping_add(1)));
    let mut game = Game::from_config(config)?;

    println!("{}\n", game.board());
    while !game.is_terminal() {
        let player = game.current_player();
        let selector: &mut dyn MoveSelector = match player {
            Player::One => player_one.as_mut(),
            Player::Two => &mut player_two,
        };
        let Some(pit) = selector.select_move(&game) else {
            break;
        };
        game.play(pit)
            .with_context(|| format!("{} chose an illegal pit {pit}", selector.name()))?;
        println!("{player} ({}) plays pit {pit}", selector.name());
        println!("{}\n", game.board());
    }

    let (p1, p2) = game.scores();
    match game.outcome() {
        Some(GameOutcome::Winner(Player::One)) => println!("Game Over - P1 WINS ({p1}-{p2})"),
        Some(GameOutcome::Winner(Player::Two)) => println!("Game Over - P2 WINS ({p1}-{p2})"),
        Some(GameOutcome::Tie) => println!("Game Over - It's a Tie ({p1}-{p2})"),
        None => println!("Game stopped early ({p1}-{p2})"),
    }
    Ok(())
}

fn run_simulation(
    config: &GameConfig,
    games: usize,
    strategy: Strategy,
    depth: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mut player_one = make_selector(strategy, depth, seed);
    let mut player_two = random_player(seed.map(|s| s.wrapping_add(1)));
    let summary = simulate_games(config, games, player_one.as_mut(), &mut player_two)
        .context("simulation failed")?;

    let depth_label = if strategy == Strategy::Random { 0 } else { depth };
    let name = &summary.player_one;
    println!("\nAI Function: {name}  |  Depth: {depth_label}");
    println!("{summary}");
    Ok(())
}

fn run_benchmark(seed: Option<u64>) -> Result<()> {
    let config = GameConfig::default();
    println!("========== MANCALA AI ==========");

    let experiments = [
        ("Random vs Random", Strategy::Random, 0, 100),
        ("Minimax (depth 5) vs Random", Strategy::Minimax, 5, 100),
        ("Alpha-Beta (depth 5) vs Random", Strategy::Alphabeta, 5, 100),
        ("Alpha-Beta (depth 10) vs Random", Strategy::Alphabeta, 10, 10),
    ];
    for (i, (title, strategy, depth, games)) in experiments.into_iter().enumerate() {
        println!("\n{}. {title}:", i + 1);
        run_simulation(&config, games, strategy, depth, seed)?;
    }
    Ok(())
}
