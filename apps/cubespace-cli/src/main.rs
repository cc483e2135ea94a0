use anyhow::Result;
use clap::{Parser, Subcommand};
use cubespace_common::parse_sequence;
use cubespace_input::Action;
use cubespace_kernel::{Cube, DEFAULT_SCRAMBLE_MOVES, Scrambler};
use cubespace_play::{GameController, Signal};
use cubespace_render::{QuadRenderer, RenderView, Renderer, TextNetRenderer};
use cubespace_session::{SessionStore, format_time};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cubespace-cli", about = "CLI frontend for cubespace operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print engine info and the solved cube
    Info,
    /// Apply a move sequence in standard notation, e.g. "R U R' U'"
    Apply {
        /// Whitespace-separated moves; a trailing ' marks counter-clockwise
        sequence: String,
    },
    /// Scramble deterministically and print the sequence
    Scramble {
        /// Number of random turns
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_MOVES)]
        moves: u32,
        /// Seed for the deterministic scramble stream
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
    /// Headless demo: scramble, then animate the inverse solve frame by frame
    Demo {
        /// Scramble length for the demo
        #[arg(short, long, default_value = "5")]
        moves: u32,
        /// Seed for the deterministic scramble stream
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Session save file updated when the demo solves the cube
        #[arg(long, default_value = "cubespace_save.json")]
        save: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            let cube = Cube::new();
            let view = RenderView::default();
            println!("cubespace-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("cubelets: {}", cube.cubelets().len());
            println!("solved: {}", cube.is_solved());
            println!(
                "frame primitives: {}",
                QuadRenderer::new().render(&cube, &view).len()
            );
            println!("{}", TextNetRenderer::new().render(&cube, &view));
        }
        Commands::Apply { sequence } => {
            let moves = parse_sequence(&sequence)?;
            let mut cube = Cube::new();
            for mv in &moves {
                cube.turn(*mv)?;
            }
            println!("applied {} moves: {}", moves.len(), sequence.trim());
            println!("{}", TextNetRenderer::new().render(&cube, &RenderView::default()));
            println!("solved: {}", cube.is_solved());
        }
        Commands::Scramble { moves, seed } => {
            let mut cube = Cube::new();
            let applied = Scrambler::new(seed).scramble(&mut cube, moves)?;
            let notation: Vec<String> = applied.iter().map(|m| m.to_string()).collect();
            println!("scramble ({moves} moves, seed {seed}): {}", notation.join(" "));
            println!("{}", TextNetRenderer::new().render(&cube, &RenderView::default()));
        }
        Commands::Demo { moves, seed, save } => run_demo(moves, seed, &save)?,
    }

    Ok(())
}

/// Drive the full stack headlessly at 60 ticks per second of simulated time:
/// scramble, then request the inverse sequence one animated turn at a time.
fn run_demo(moves: u32, seed: u64, save: &str) -> Result<()> {
    const TICKS_PER_SECOND: u32 = 60;

    let mut cube = Cube::new();
    let mut ctrl = GameController::new(seed);

    // The controller owns an identically-seeded scrambler, so previewing the
    // sequence here matches what Scramble applies.
    let mut preview = Scrambler::new(seed);
    let sequence: Vec<_> = (0..moves).map(|_| preview.next_move()).collect();
    ctrl.handle(&mut cube, Action::Scramble { moves })?;
    let notation: Vec<String> = sequence.iter().map(|m| m.to_string()).collect();
    println!("scrambled: {}", notation.join(" "));

    let mut ticks: u32 = 0;
    let mut solved_signal = None;
    for mv in sequence.iter().rev() {
        ctrl.handle(&mut cube, Action::Turn(mv.inverse()))?;
        loop {
            ticks += 1;
            match ctrl.tick(&mut cube)? {
                Some(Signal::MoveCommitted { mv, count, solved }) => {
                    println!("tick {ticks:4}: committed {mv} (move {count}, solved {solved})");
                    if solved {
                        solved_signal = Some(count);
                    }
                    break;
                }
                Some(_) | None => {}
            }
        }
    }

    let elapsed_secs = ticks / TICKS_PER_SECOND;
    match solved_signal {
        Some(count) => {
            let store = SessionStore::new(save);
            let mut data = store.load_or_default()?;
            let reward = data.record_solve(count, elapsed_secs);
            store.save(&data)?;
            println!(
                "solved in {count} moves / {} — +{} coins (time {}, efficiency {}), level {}",
                format_time(elapsed_secs),
                reward.total,
                reward.time_bonus,
                reward.move_bonus,
                data.level
            );
        }
        None => println!("demo finished unsolved after {}", format_time(elapsed_secs)),
    }
    Ok(())
}
