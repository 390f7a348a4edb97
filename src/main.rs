#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use tictactoe::{
    init_logging, CliMover, ConsoleObserver, Marker, MoveProvider, Player, PlayerKind,
    RandomMover, SessionController, SessionRunner,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Easy,
    Medium,
    Impossible,
}

#[cfg(feature = "std")]
impl From<PlayerType> for PlayerKind {
    fn from(t: PlayerType) -> Self {
        match t {
            PlayerType::Human => PlayerKind::Human,
            PlayerType::Easy => PlayerKind::AiEasy,
            PlayerType::Medium => PlayerKind::AiMedium,
            PlayerType::Impossible => PlayerKind::AiImpossible,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a session at this terminal.
    Play {
        #[arg(long, default_value = "Player 1")]
        x_name: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        x_type: PlayerType,
        #[arg(long, default_value = "Player 2")]
        o_name: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        o_type: PlayerType,
        #[arg(long, default_value_t = 3)]
        rounds: u32,
        #[arg(long, help = "Fix RNG seed for reproducible AI moves (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let two computer players play a session and print the result.
    Sim {
        #[arg(long, default_value_t = 10)]
        rounds: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn provider_for(player: &Player, seed: Option<u64>) -> Box<dyn MoveProvider> {
    if player.kind().is_human() {
        Box::new(CliMover::new(player.name()))
    } else {
        match seed {
            Some(s) => Box::new(RandomMover::from_seed(s)),
            None => Box::new(RandomMover::from_entropy()),
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (player_x, player_o, rounds, seed) = match cli.command {
        Commands::Play {
            x_name,
            x_type,
            o_name,
            o_type,
            rounds,
            seed,
        } => {
            let x = Player::new(&x_name, Marker::Cross, x_type.into())
                .map_err(|e| anyhow::anyhow!(e))?;
            let o = Player::new(&o_name, Marker::Nought, o_type.into())
                .map_err(|e| anyhow::anyhow!(e))?;
            (x, o, rounds, seed)
        }
        Commands::Sim { rounds, seed } => {
            let x = Player::new("Computer X", Marker::Cross, PlayerKind::AiEasy)
                .map_err(|e| anyhow::anyhow!(e))?;
            let o = Player::new("Computer O", Marker::Nought, PlayerKind::AiEasy)
                .map_err(|e| anyhow::anyhow!(e))?;
            (x, o, rounds, seed)
        }
    };

    if let Some(s) = seed {
        println!("Using fixed seed: {} (AI moves will be reproducible)", s);
    }

    let x_provider = provider_for(&player_x, seed);
    let o_provider = provider_for(&player_o, seed.map(|s| s.wrapping_add(1)));

    let mut controller = SessionController::new();
    controller.add_observer(Box::new(ConsoleObserver::new()));
    let mut runner = SessionRunner::new(controller, x_provider, o_provider);

    println!("\n╔══════════════════════════════════════╗");
    println!("║          NOUGHTS AND CROSSES         ║");
    println!("╚══════════════════════════════════════╝");
    println!("  {} vs {}, {} round(s)", player_x, player_o, rounds);

    runner.start(player_x, player_o)?;
    if let Err(e) = runner.play_rounds(rounds).await {
        eprintln!("Session ended with an error: {}", e);
        runner.finish();
        return Err(e);
    }
    Ok(())
}
