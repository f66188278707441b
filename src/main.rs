//! Terminal adapter for playing against the engine's bot tiers.
//!
//! This is a thin demo of the adapter contract: it renders the board,
//! collects a position, and feeds it to the room. The real consumers of the
//! engine are chat-platform bots doing the same over messages and reactions.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use oxo::{PlayerType, Registry};
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Registry key for the single terminal match.
const ROOM_ID: &str = "terminal";

/// Play tic-tac-toe against a bot from the terminal.
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Tic-tac-toe engine demo", long_about = None)]
#[command(version)]
struct Cli {
    /// Bot tier to play against.
    #[arg(short, long, value_enum, default_value_t = Opponent::Cheat)]
    opponent: Opponent,

    /// Your display name.
    #[arg(long, default_value = "you")]
    name: String,
}

/// Bot difficulty tiers.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum Opponent {
    /// Plays the first free square.
    Easy,
    /// Plays a random free square.
    Random,
    /// Plays optimally; a draw is the best you can get.
    Cheat,
}

impl From<Opponent> for PlayerType {
    fn from(opponent: Opponent) -> Self {
        match opponent {
            Opponent::Easy => PlayerType::EasyBot,
            Opponent::Random => PlayerType::RandomBot,
            Opponent::Cheat => PlayerType::CheatBot,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let mut registry = Registry::new();
    registry.new_room(ROOM_ID, cli.name, None, cli.opponent.into())?;

    let stdin = std::io::stdin();
    loop {
        let room = registry.room_mut(ROOM_ID)?;
        if room.is_over() {
            break;
        }

        println!("{}\n", room.board().display());
        print!("Your move (1-9, or q to quit): ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        stdin.read_line(&mut line)?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            registry.stop(ROOM_ID);
            println!("Game stopped.");
            return Ok(());
        }

        let Ok(cell) = input.parse::<usize>() else {
            println!("Enter a number between 1 and 9.\n");
            continue;
        };
        if cell < 1 || cell > 9 {
            println!("Enter a number between 1 and 9.\n");
            continue;
        }

        if let Err(error) = room.play(cell - 1) {
            println!("{error}\n");
        }
    }

    let room = registry.room(ROOM_ID)?;
    println!("{}\n", room.board().display());
    match room.winner()? {
        None => println!("It's a draw."),
        Some(player) if player.is_bot() => println!("The bot wins."),
        Some(player) => println!(
            "{} wins!",
            player.handle().as_deref().unwrap_or("the human")
        ),
    }
    registry.stop(ROOM_ID);

    Ok(())
}
