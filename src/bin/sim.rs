use serde_json::json;
use tictactoe::{Marker, Player, PlayerKind, RandomMover, SessionController, SessionRunner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <seed1> <seed2> <rounds>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let rounds: u32 = args[3].parse()?;

    let x = Player::new("player1", Marker::Cross, PlayerKind::AiEasy)
        .map_err(|e| anyhow::anyhow!(e))?;
    let o = Player::new("player2", Marker::Nought, PlayerKind::AiEasy)
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut runner = SessionRunner::new(
        SessionController::new(),
        Box::new(RandomMover::from_seed(seed1)),
        Box::new(RandomMover::from_seed(seed2)),
    );
    runner.start(x, o)?;
    let summary = runner.play_rounds(rounds).await?;

    let tallies = summary.tallies;
    let winner = if tallies.x_wins > tallies.o_wins {
        Some("player1")
    } else if tallies.o_wins > tallies.x_wins {
        Some("player2")
    } else {
        None
    };

    let result = json!({
        "rounds": tallies.total(),
        "tallies": tallies,
        "player1": summary.player_x,
        "player2": summary.player_o,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
