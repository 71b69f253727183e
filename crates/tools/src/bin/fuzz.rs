use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::debug;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::Serialize;
use wasteland_core::{Board, Direction, GenerationConfig, RunState, Traversal, derive_run_seed};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 100)]
    runs: u32,
    #[arg(short, long, default_value_t = 500)]
    max_commands: u32,
    #[arg(long, default_value_t = 15)]
    size: usize,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Default)]
struct FuzzSummary {
    runs: u32,
    succeeded: u32,
    depleted: u32,
    abandoned: u32,
    commands: u64,
    mean_score: f64,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn check_invariants(traversal: &Traversal, map_seed: u64) -> Result<()> {
    let board = traversal.board();
    let pos = traversal.position();
    ensure!(board.in_bounds(pos), "Invariant failed: agent off the board on map_seed {map_seed}");
    for cell in board.positions() {
        let tile = board.tile(cell).context("Invariant failed: missing tile")?;
        ensure!(
            !(tile.kind.is_route() && tile.item.is_some()),
            "Invariant failed: food on route at {cell} on map_seed {map_seed}"
        );
    }
    match traversal.state() {
        RunState::Active => {
            ensure!(traversal.resource() >= 1, "Invariant failed: active without health");
            ensure!(pos != board.goal(), "Invariant failed: active on the goal");
            ensure!(traversal.score().is_err(), "Invariant failed: score while active");
        }
        RunState::Depleted => {
            ensure!(traversal.resource() < 1, "Invariant failed: depleted with health");
            ensure!(traversal.score() == Ok(0), "Invariant failed: depleted run scored");
        }
        RunState::Succeeded => {
            ensure!(pos == board.goal(), "Invariant failed: success off the goal");
            ensure!(traversal.score().is_ok(), "Invariant failed: no score after success");
        }
        RunState::Abandoned => {
            ensure!(traversal.score().is_ok_and(|score| score >= 0), "Invariant failed: quit score");
        }
    }
    Ok(())
}

fn run_once(board: Board, rng: &mut ChaCha8Rng, max_commands: u32, map_seed: u64) -> Result<Traversal> {
    let mut traversal = Traversal::new(board);
    check_invariants(&traversal, map_seed)?;

    while traversal.state().is_active() {
        if traversal.commands_issued() >= max_commands {
            traversal.abandon()?;
            break;
        }
        let before = traversal.resource();
        // Moves outnumber searches three to one.
        if rng.next_u64() % 4 == 0 {
            let result = traversal.forage()?;
            ensure!(
                traversal.resource() == before - 1 + result.delta,
                "Invariant failed: forage accounting on map_seed {map_seed}"
            );
        } else {
            let direction = choose(rng, &Direction::ALL);
            let steps = (rng.next_u64() % 6) as u32;
            let result = traversal.move_agent(direction, steps)?;
            ensure!(
                result.steps_taken <= steps && traversal.resource() <= before,
                "Invariant failed: move accounting on map_seed {map_seed}"
            );
        }
        check_invariants(&traversal, map_seed)?;
    }
    Ok(traversal)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.json {
        println!(
            "Starting Fuzz harness on seed {} for {} runs of at most {} commands...",
            args.seed, args.runs, args.max_commands
        );
    }
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut summary = FuzzSummary::default();
    let mut score_total = 0_i64;

    for run in 0..args.runs {
        let map_seed = derive_run_seed(args.seed, u64::from(run));
        let board = Board::build(args.size, map_seed, &GenerationConfig::default())
            .with_context(|| format!("Board generation failed on map_seed {map_seed}"))?;
        let traversal = run_once(board, &mut rng, args.max_commands, map_seed)?;

        summary.runs += 1;
        summary.commands += u64::from(traversal.commands_issued());
        match traversal.state() {
            RunState::Succeeded => summary.succeeded += 1,
            RunState::Depleted => summary.depleted += 1,
            RunState::Abandoned => summary.abandoned += 1,
            RunState::Active => unreachable!("run loop exits only on a finished run"),
        }
        let score = traversal.score()?;
        score_total += i64::from(score);
        debug!("run {run} on map_seed {map_seed}: {:?}, score {score}", traversal.state());
    }
    if summary.runs > 0 {
        summary.mean_score = score_total as f64 / f64::from(summary.runs);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Fuzzing completed successfully: {} succeeded, {} depleted, {} abandoned over {} commands (mean score {:.1}).",
            summary.succeeded, summary.depleted, summary.abandoned, summary.commands, summary.mean_score
        );
    }
    Ok(())
}
