//! gen-gl — regenerate the OpenGL part of the cugl headers from glad's `gl.h`.
//!
//! Takes exactly one mode word:
//!
//! - **mod**: replace the generated OpenGL section of `include/cugl/cugl.h`
//! - **gen**: write `fake_glad_load_gl.h` / `.c` with stub GL entry points
//!
//! Bad usage prints guidance and still exits successfully.

mod config;
mod model;
mod parser;
mod render;
mod splice;

use anyhow::{Context, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "Use mod or gen.";

#[derive(Parser)]
#[command(
    name = "gen-gl",
    about = "Extract the OpenGL part of glad's gl.h and generate fake GL entry points"
)]
struct Cli {
    /// Mode: `mod` (splice into cugl.h) or `gen` (write fake loader files)
    args: Vec<String>,

    /// Repository root the fixed input and output paths are resolved against
    /// (default: the current working directory)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output directory for `gen` (defaults to --root)
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Splice,
    Stubs,
}

/// Pick the mode from the positional words, or the message to print instead.
fn select_mode(args: &[String]) -> std::result::Result<Mode, String> {
    match args {
        [] => Err(format!("Too few arguments. {USAGE}")),
        [arg] => match arg.as_str() {
            "mod" => Ok(Mode::Splice),
            "gen" => Ok(Mode::Stubs),
            other => Err(format!("Unknown argument {other}. {USAGE}")),
        },
        _ => Err(format!("Too many arguments. {USAGE}")),
    }
}

/// Flag-shaped words clap does not know, e.g. `-x`, get the same treatment
/// as an unknown mode word.
fn unknown_argument(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::UnknownArgument {
        return None;
    }
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(format!("Unknown argument {arg}. {USAGE}")),
        _ => None,
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match unknown_argument(&err) {
            Some(message) => {
                println!("{message}");
                return Ok(());
            }
            None => err.exit(),
        },
    };

    let mode = match select_mode(&cli.args) {
        Ok(mode) => mode,
        Err(message) => {
            println!("{message}");
            return Ok(());
        }
    };

    let paths = config::Paths::new(&cli.root, cli.out_dir.as_deref());
    let parsed = parse_loader(&paths)?;

    match mode {
        Mode::Splice => {
            let header = render::header::compose(&parsed);
            if splice::splice_file(&paths.target_header, &header)?
                == splice::SpliceOutcome::MarkerMissing
            {
                eprintln!(
                    "Couldn't find start of gl header in {}. Aborting.",
                    paths.target_header.display()
                );
            }
        }
        Mode::Stubs => {
            let files = render::stubs::generate(&parsed);
            render::write_files(&paths.out_dir, &files)?;
        }
    }

    Ok(())
}

/// Read glad's `gl.h` and `khrplatform.h` and parse them.
fn parse_loader(paths: &config::Paths) -> Result<model::ParsedHeader> {
    let loader = fs::read_to_string(&paths.loader_header)
        .with_context(|| format!("failed to read {}", paths.loader_header.display()))?;
    let platform = fs::read_to_string(&paths.platform_header)
        .with_context(|| format!("failed to read {}", paths.platform_header.display()))?;
    log::debug!(
        "read {} and {}",
        paths.loader_header.display(),
        paths.platform_header.display()
    );

    Ok(parser::parse(&loader, &platform))
}
