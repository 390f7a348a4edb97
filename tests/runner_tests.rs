use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tictactoe::{
    BoardSnapshot, CliMover, GameError, LineKind, Marker, MoveOutcome, MoveProvider, Phase,
    Player, PlayerKind, RandomMover, SessionController, SessionRunner,
};

/// Plays a fixed list of moves and records rejections.
struct Scripted {
    moves: VecDeque<(usize, usize)>,
    rejected: Arc<Mutex<Vec<(usize, usize)>>>,
}

impl Scripted {
    fn new(moves: &[(usize, usize)]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            rejected: Arc::default(),
        }
    }
}

#[async_trait::async_trait]
impl MoveProvider for Scripted {
    async fn request_move(
        &mut self,
        _snapshot: &BoardSnapshot,
        _marker: Marker,
    ) -> anyhow::Result<(usize, usize)> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn handle_rejection(&mut self, coord: (usize, usize), error: &GameError) {
        assert!(error.is_recoverable());
        self.rejected.lock().unwrap().push(coord);
    }
}

fn players() -> (Player, Player) {
    (
        Player::new("Xena", Marker::Cross, PlayerKind::Human).unwrap(),
        Player::new("Otto", Marker::Nought, PlayerKind::AiImpossible).unwrap(),
    )
}

#[tokio::test]
async fn test_scripted_round_x_wins() -> anyhow::Result<()> {
    let (x, o) = players();
    let mut runner = SessionRunner::new(
        SessionController::new(),
        Box::new(Scripted::new(&[(0, 0), (0, 1), (0, 2)])),
        Box::new(Scripted::new(&[(1, 1), (2, 2)])),
    );
    runner.start(x, o)?;
    let outcome = runner.play_round().await?;
    match outcome {
        MoveOutcome::Won { line, winner } => {
            assert_eq!(line.kind(), LineKind::Row(0));
            assert_eq!(winner.name(), "Xena");
        }
        other => panic!("expected a win, got {:?}", other),
    }
    assert_eq!(runner.controller().phase(), Phase::RoundOver);
    Ok(())
}

#[tokio::test]
async fn test_occupied_choice_is_requested_again() -> anyhow::Result<()> {
    let (x, o) = players();
    let o_script = Scripted::new(&[(0, 0), (1, 1), (2, 2)]);
    let rejected = o_script.rejected.clone();
    let mut runner = SessionRunner::new(
        SessionController::new(),
        Box::new(Scripted::new(&[(0, 0), (0, 1), (0, 2)])),
        Box::new(o_script),
    );
    runner.start(x, o)?;
    let outcome = runner.play_round().await?;
    assert!(matches!(outcome, MoveOutcome::Won { .. }));
    assert_eq!(*rejected.lock().unwrap(), vec![(0, 0)]);
    assert_eq!(runner.controller().tallies().x_wins, 1);
    Ok(())
}

#[tokio::test]
async fn test_out_of_range_choice_aborts() {
    let (x, o) = players();
    let mut runner = SessionRunner::new(
        SessionController::new(),
        Box::new(Scripted::new(&[(5, 5)])),
        Box::new(Scripted::new(&[])),
    );
    runner.start(x, o).unwrap();
    let err = runner.play_round().await.unwrap_err();
    assert!(err.to_string().contains("between 0 and 2"));
    assert_eq!(runner.controller().board().occupied_count(), 0);
}

#[tokio::test]
async fn test_round_requires_started_session() {
    let mut runner = SessionRunner::new(
        SessionController::new(),
        Box::new(RandomMover::from_seed(1)),
        Box::new(RandomMover::from_seed(2)),
    );
    assert!(runner.play_round().await.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_random_session_runs_to_completion() -> anyhow::Result<()> {
    let (x, o) = players();
    let handle = tokio::spawn(async move {
        let mut runner = SessionRunner::new(
            SessionController::new(),
            Box::new(RandomMover::from_seed(7)),
            Box::new(RandomMover::from_seed(8)),
        );
        runner.start(x, o)?;
        let summary = runner.play_rounds(9).await?;
        Ok::<_, anyhow::Error>((summary, runner.into_controller()))
    });
    let (summary, controller) = handle.await??;
    assert_eq!(summary.tallies.total(), 9);
    assert_eq!(summary.player_x.unwrap().name(), "Xena");
    assert_eq!(controller.phase(), Phase::Idle);
    Ok(())
}

#[tokio::test]
async fn test_same_seeds_replay_identically() -> anyhow::Result<()> {
    let mut results = Vec::new();
    for _ in 0..2 {
        let (x, o) = players();
        let mut runner = SessionRunner::new(
            SessionController::new(),
            Box::new(RandomMover::from_seed(42)),
            Box::new(RandomMover::from_seed(43)),
        );
        runner.start(x, o)?;
        results.push(runner.play_rounds(6).await?.tallies);
    }
    assert_eq!(results[0], results[1]);
    Ok(())
}

#[tokio::test]
async fn test_cli_mover_reads_and_validates_input() -> anyhow::Result<()> {
    let input: &[u8] = b"help\nZ9\nA1\nb2\n";
    let mut mover = CliMover::with_reader("Tester", input);

    let mut snapshot = BoardSnapshot::default();
    snapshot.cells[0][0] = tictactoe::Cell::Cross;

    // "Z9" is invalid and "A1" is taken, so "b2" is the first usable answer.
    let coord = mover.request_move(&snapshot, Marker::Nought).await?;
    assert_eq!(coord, (1, 1));

    // Input exhausted.
    assert!(mover.request_move(&snapshot, Marker::Nought).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_cli_mover_accepts_row_col_input() -> anyhow::Result<()> {
    let input: &[u8] = b"0 0\n2 1\n";
    let mut mover = CliMover::with_reader("Tester", input);

    let mut snapshot = BoardSnapshot::default();
    snapshot.cells[0][0] = tictactoe::Cell::Nought;

    // (0, 0) is taken, so the second line is used.
    assert_eq!(mover.request_move(&snapshot, Marker::Cross).await?, (2, 1));
    Ok(())
}
