#![warn(clippy::pedantic)]

use std::{
    fs,
    io::stdin,
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{OptionExt, WrapErr, eyre};
use cubik_core::{CubeState, Face, Move, parse_sequence};
use log::{LevelFilter, debug, info};
use owo_colors::OwoColorize;
use replay::ReplayCursor;

/// Edit, validate and replay 3×3×3 cube colorings
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a cube as a colored net along with its encoding.
    Show {
        /// 54-character facelet string; defaults to the saved cube.
        cube: Option<String>,
    },
    /// Check that a facelet string is a well-formed, balanced coloring.
    Validate {
        /// 54-character facelet string; defaults to the saved cube.
        cube: Option<String>,
    },
    /// Recolor a single sticker and save the result.
    Set {
        /// Face letter (U, R, F, D, L, B).
        face: String,
        /// Row on the face (0-2).
        row: usize,
        /// Column on the face (0-2).
        col: usize,
        /// New color, as a face letter.
        color: String,
        /// Cube to edit; defaults to the saved cube.
        cube: Option<String>,
    },
    /// Apply a move sequence and save the result.
    Apply {
        /// The move sequence, e.g. "R U' F2".
        sequence: String,
        /// Cube to start from; defaults to the saved cube.
        cube: Option<String>,
    },
    /// Step through a solution, showing the cube after each move.
    Replay {
        /// Space-separated solution, e.g. as returned by the solver.
        solution: String,
        /// Cube the solution starts from; defaults to the saved cube.
        cube: Option<String>,
        /// Milliseconds between moves; 0 steps interactively instead.
        #[arg(short, long, default_value_t = 800)]
        delay_ms: u64,
    },
    /// Reset the saved cube to the solved state.
    Reset,
}

/// Helper for accurate sleep intervals.
struct Ticker {
    now: Instant,
}

impl Ticker {
    fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    fn wait(&mut self, delay: Duration) {
        // Advance the expected next time and sleep until that instant.
        self.now += delay;
        thread::sleep(self.now.saturating_duration_since(Instant::now()));
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Commands::Show { cube } => {
            let state = load_cube(cube)?;
            print_net(&state);
            println!("{state}");
        }
        Commands::Validate { cube } => {
            let state = load_cube(cube)?;
            state.validate()?;
            println!("OK");
        }
        Commands::Set {
            face,
            row,
            col,
            color,
            cube,
        } => {
            let face = parse_face(&face)?;
            let color = parse_face(&color)?;
            if row > 2 || col > 2 {
                return Err(eyre!("row and column must be 0-2, got ({row}, {col})"));
            }

            let state = load_cube(cube)?.with_facelet(face, row, col, color);
            print_net(&state);
            println!("{state}");
            save_cube(&state)?;
        }
        Commands::Apply { sequence, cube } => {
            let moves = parse_sequence(&sequence)?;
            let state = load_cube(cube)?.apply_all(&moves);
            print_net(&state);
            println!("{state}");
            save_cube(&state)?;
        }
        Commands::Replay {
            solution,
            cube,
            delay_ms,
        } => {
            let initial = load_cube(cube)?;
            let moves = parse_sequence(&solution)?;
            run_replay(initial, moves, delay_ms)?;
        }
        Commands::Reset => {
            let state = CubeState::solved();
            print_net(&state);
            save_cube(&state)?;
        }
    }

    Ok(())
}

fn parse_face(s: &str) -> color_eyre::Result<Face> {
    s.parse::<Face>()
        .map_err(|()| eyre!("unknown face letter `{s}`, expected one of U R F D L B"))
}

fn state_file() -> color_eyre::Result<PathBuf> {
    let mut path = dirs::data_local_dir().ok_or_eyre("no data directory on this platform")?;
    path.push("cubik");
    fs::create_dir_all(&path).wrap_err_with(|| format!("could not create {}", path.display()))?;
    path.push("last_cube");
    Ok(path)
}

/// The cube to operate on: the explicit argument if given, otherwise the
/// saved cube, otherwise solved.
fn load_cube(arg: Option<String>) -> color_eyre::Result<CubeState> {
    if let Some(s) = arg {
        return Ok(s.parse::<CubeState>()?);
    }

    let path = state_file()?;
    match fs::read_to_string(&path) {
        Ok(saved) => {
            debug!("loaded cube from {}", path.display());
            Ok(saved.trim().parse::<CubeState>()?)
        }
        Err(_) => {
            info!("no saved cube, starting from solved");
            Ok(CubeState::solved())
        }
    }
}

fn save_cube(state: &CubeState) -> color_eyre::Result<()> {
    let path = state_file()?;
    fs::write(&path, state.to_string())
        .wrap_err_with(|| format!("could not write {}", path.display()))?;
    debug!("saved cube to {}", path.display());
    Ok(())
}

fn run_replay(initial: CubeState, moves: Vec<Move>, delay_ms: u64) -> color_eyre::Result<()> {
    info!("replaying {} moves", moves.len());

    let mut cursor = ReplayCursor::new(initial, moves);
    print_progress(&cursor);

    if delay_ms == 0 {
        replay_interactive(&mut cursor)?;
    } else {
        let mut ticker = Ticker::new();
        while cursor.step_forward() {
            ticker.wait(Duration::from_millis(delay_ms));
            print_progress(&cursor);
        }
    }

    println!("{}", cursor.state());
    Ok(())
}

fn replay_interactive(cursor: &mut ReplayCursor) -> color_eyre::Result<()> {
    eprintln!("Enter: next move, b: previous move, q: quit");

    let mut line = String::new();
    loop {
        line.clear();
        if stdin().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "q" => break,
            "b" => {
                if cursor.step_back() {
                    print_progress(cursor);
                } else {
                    eprintln!("already at the start");
                }
            }
            _ => {
                if cursor.step_forward() {
                    print_progress(cursor);
                } else {
                    eprintln!("already at the end");
                    break;
                }
            }
        }
    }

    Ok(())
}

/// One animation frame: the move list with the cursor highlighted, then the
/// net at the current position.
fn print_progress(cursor: &ReplayCursor) {
    let position = cursor.position();
    for (i, mv) in cursor.moves().iter().enumerate() {
        let token = mv.to_string();
        if i as isize == position {
            print!("{} ", token.bold().green());
        } else if (i as isize) < position {
            print!("{} ", token.green());
        } else {
            print!("{} ", token.dimmed());
        }
    }
    println!();
    print_net(&cursor.state());
    println!();
}

/// Sticker colors of the rendered net, per face.
fn sticker_rgb(color: Face) -> (u8, u8, u8) {
    match color {
        Face::U => (255, 215, 0),
        Face::R => (255, 165, 0),
        Face::F => (0, 255, 0),
        Face::D => (255, 255, 255),
        Face::L => (255, 0, 0),
        Face::B => (0, 0, 255),
    }
}

/// Print the cube unfolded into a cross: U on top, then L F R B, then D.
fn print_net(state: &CubeState) {
    for row in 0..3 {
        print!("{:10}", "");
        print_face_row(state, Face::U, row);
        println!();
    }
    for row in 0..3 {
        for face in [Face::L, Face::F, Face::R, Face::B] {
            print_face_row(state, face, row);
            print!(" ");
        }
        println!();
    }
    for row in 0..3 {
        print!("{:10}", "");
        print_face_row(state, Face::D, row);
        println!();
    }
}

fn print_face_row(state: &CubeState, face: Face, row: usize) {
    for col in 0..3 {
        let color = state.facelet(face, row, col);
        let (r, g, b) = sticker_rgb(color);
        print!(
            "{}",
            format!(" {} ", color.as_char()).black().on_truecolor(r, g, b)
        );
    }
}
