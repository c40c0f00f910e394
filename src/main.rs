#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use riverquest::{init_logging, ui, CliPlayer, Command, GameEngine, PuzzleConfig, ScriptedPlayer, Session};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, global = true, help = "JSON puzzle description (defaults to Farmer/Wolf/Chicken/Grain)")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override the boat capacity")]
    capacity: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively in the terminal.
    Play,
    /// Apply commands in order and print the result as JSON.
    Replay {
        #[arg(help = "Commands such as \"board farmer\", \"cross\", \"land chicken\"")]
        moves: Vec<String>,
    },
    /// Print the rules of the selected puzzle.
    Rules,
}

#[cfg(feature = "std")]
fn load_config(cli: &Cli) -> anyhow::Result<PuzzleConfig> {
    let mut config = match &cli.config {
        Some(path) => PuzzleConfig::read_json_file(path)?,
        None => PuzzleConfig::default(),
    };
    if let Some(capacity) = cli.capacity {
        config = config.with_capacity(capacity);
    }
    config.checked()
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Play => {
            println!("RiverQuest: The Strategic Crossing");
            let engine = GameEngine::new(config)?;
            print!("{}", ui::rules_text(engine.config()));
            let player = CliPlayer::stdio(engine.config());
            let mut session = Session::new(Box::new(player), engine);
            let summary = session.run()?;
            println!(
                "Leaving after {} moves ({:?}).",
                summary.move_count, summary.status
            );
        }
        Commands::Replay { moves } => {
            let commands = moves
                .iter()
                .map(|m| Command::parse(m).ok_or_else(|| anyhow::anyhow!("invalid command '{}'", m)))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let engine = GameEngine::new(config)?;
            let mut session = Session::new(Box::new(ScriptedPlayer::new(commands)), engine);
            let summary = session.run()?;
            let result = serde_json::json!({
                "status": summary.status,
                "moveCount": summary.move_count,
                "accepted": summary.accepted,
                "rejected": summary.rejected,
                "state": session.engine().state(),
            });
            println!("{}", serde_json::to_string(&result)?);
        }
        Commands::Rules => {
            print!("{}", ui::rules_text(&config));
        }
    }
    Ok(())
}
