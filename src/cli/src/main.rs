#![warn(clippy::pedantic)]

//! `cubecoach`: scan files in, beginner method steps out.

mod config;
mod prompt;
mod render;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use beginner_solver::{Orientation, Outcome, Phase, Session, Simulated};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, WrapErr, bail};
use cube_core::{
    Algorithm, ColorScheme, Cube,
    scan::{SCAN_ORDER, Scan},
};
use itertools::Itertools;
use log::{debug, info};

use crate::{config::Config, prompt::Prompt};

#[derive(Parser, Debug)]
#[command(name = "cubecoach", version, about = "Step by step coaching for the beginner method")]
struct Cli {
    /// Read this config file instead of the one in the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log what the solver is doing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw a scanned cube and check that it could be real
    Show { scan: PathBuf },
    /// Turn a scanned cube and print the scan of the result
    Apply { scan: PathBuf, moves: String },
    /// Print the next step of a phase. The scan is taken the way that phase holds the cube.
    Next {
        scan: PathBuf,
        #[arg(long, default_value = "daisy")]
        phase: Phase,
    },
    /// Solve a scanned cube from the start
    Solve {
        scan: PathBuf,
        /// Walk a human through the solve instead of simulating it
        #[arg(long)]
        guided: bool,
    },
    /// Print the scan of a solved cube after the given moves
    Scramble { moves: String },
    /// Type in a scan face by face, holding the cube with the first layer color on top
    Scan {
        /// Write the scan here instead of printing it
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config::load(cli.config.as_deref())?;
    debug!("{config:?}");

    match cli.command {
        Command::Show { scan } => {
            let cube = read_scan(&scan)?;
            print!("{}", render::net(&cube, config.color));
            println!(
                "{}",
                cube.color_counts()
                    .iter()
                    .map(|(color, count)| format!("{color}: {count}"))
                    .join(", ")
            );
            validate(&cube, &config.scheme, Orientation::Inverted)
                .wrap_err("This cube can't be solved as scanned")?;
        }
        Command::Apply { scan, moves } => {
            let mut cube = load(&scan, &config, Orientation::Inverted)?;
            cube.apply_str(&moves)?;
            print!("{}", toml::to_string(&Scan::of_cube(&cube))?);
        }
        Command::Scramble { moves } => {
            let alg = moves.parse::<Algorithm>()?;
            let cube = Cube::solved(&config.scheme).after(&alg);
            print!("{}", toml::to_string(&Scan::of_cube(&cube))?);
        }
        Command::Scan { out } => {
            let scheme = config.strict.then_some(&config.scheme);
            let stdin = io::stdin();
            let scan = Prompt::new(stdin.lock(), io::stdout()).scan(scheme)?;

            let cube = scan.to_cube()?;
            if config.strict {
                validate(&cube, &config.scheme, Orientation::Inverted)
                    .wrap_err("This cube can't be solved as scanned")?;
            }

            let text = toml::to_string(&scan)?;
            match out {
                Some(path) => fs::write(&path, text)
                    .wrap_err_with(|| format!("Could not write {}", path.display()))?,
                None => print!("{text}"),
            }
        }
        Command::Next { scan, phase } => {
            let cube = load(&scan, &config, phase.orientation())?;
            let mut session = Session::starting_at(cube, phase, phase.orientation());
            match session.next() {
                Outcome::Step(step) if step.to_string() != step.moves.to_string() => {
                    println!("{step}: {}", step.moves);
                }
                outcome => println!("{outcome}"),
            }
        }
        Command::Solve { scan, guided } => {
            let cube = load(&scan, &config, Orientation::Inverted)?;
            let mut session = Session::new(cube);
            let limit = config.max_steps_per_phase;

            let steps = if guided {
                let stdin = io::stdin();
                let mut prompt = Prompt::new(stdin.lock(), io::stdout());
                session.run(&mut prompt, limit)
            } else {
                session.run(&mut Simulated, limit)
            }
            .wrap_err_with(|| {
                format!(
                    "Gave up during the {} phase with the cube at\n{}",
                    session.phase(),
                    render::net(session.cube(), false)
                )
            })?;

            info!("Solved in {steps} steps");
            println!("Solved in {steps} steps");
            print!("{}", render::net(session.cube(), config.color));
        }
    }

    Ok(())
}

fn read_scan(path: &Path) -> eyre::Result<Cube> {
    let text =
        fs::read_to_string(path).wrap_err_with(|| format!("Could not read {}", path.display()))?;
    let scan: Scan =
        toml::from_str(&text).wrap_err_with(|| format!("Invalid scan in {}", path.display()))?;

    Ok(scan.to_cube()?)
}

/// Read a scan file, checking it if the config asks for that. `orientation` is how the cube
/// was held while it was scanned.
fn load(path: &Path, config: &Config, orientation: Orientation) -> eyre::Result<Cube> {
    let cube = read_scan(path)?;

    if config.strict {
        validate(&cube, &config.scheme, orientation)
            .wrap_err_with(|| format!("{} is not a real cube", path.display()))?;
    }

    Ok(cube)
}

fn validate(cube: &Cube, scheme: &ColorScheme, orientation: Orientation) -> eyre::Result<()> {
    let scheme = match orientation {
        Orientation::Inverted => *scheme,
        Orientation::Standard => scheme.rotated_z2(),
    };

    for face in SCAN_ORDER {
        if !scheme.center_matches(face, cube.face(face)) {
            bail!(
                "The {face} face should have a {} center but has {}",
                scheme.color_of(face),
                cube.center(face)
            );
        }
    }

    Ok(cube.check_invariants()?)
}
