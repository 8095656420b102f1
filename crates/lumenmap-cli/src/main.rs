//! lumenmap: emit the LED layout document for the standard rig.
//!
//! Usage:
//!   lumenmap                    Pretty JSON to stdout
//!   lumenmap --compact -o FILE  Compact JSON to FILE

use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use lumenmap_layout::logging::{init_logging, LoggingConfig};
use lumenmap_layout::{standard_rig, LayoutConfig, OutputStyle};

const USAGE: &str = "\
Usage: lumenmap [OPTIONS]

Options:
  --compact        Emit single-line JSON
  --config <FILE>  Load scale, spacing, and rings from a JSON file
  -o <FILE>        Write the document to FILE instead of stdout
  -h, --help       Print this help message";

#[derive(Debug, Default)]
struct Options {
    style: OutputStyle,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

#[derive(Debug)]
enum Action {
    Emit(Options),
    Help,
}

fn parse_args(args: &[String]) -> Result<Action, String> {
    let mut opts = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Action::Help),
            "--compact" => opts.style = OutputStyle::Compact,
            "--config" => {
                let path = iter.next().ok_or_else(|| format!("--config needs a path\n\n{USAGE}"))?;
                opts.config = Some(PathBuf::from(path));
            }
            "-o" => {
                let path = iter.next().ok_or_else(|| format!("-o needs a path\n\n{USAGE}"))?;
                opts.output = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument `{other}`\n\n{USAGE}")),
        }
    }
    Ok(Action::Emit(opts))
}

fn emit(opts: &Options) -> Result<()> {
    let config = match &opts.config {
        Some(path) => LayoutConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LayoutConfig::default(),
    };

    let layout = standard_rig(config).context("building standard rig")?;
    log::info!(
        "{} shapes, {} points, ring maxima ({:.4}, {:.4})",
        layout.descriptions().len(),
        layout.len(),
        layout.max_x(),
        layout.max_y()
    );

    match &opts.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            layout.write_json(&mut writer, opts.style)?;
            writeln!(writer)?;
            writer.flush()?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut writer = io::stdout().lock();
            layout.write_json(&mut writer, opts.style)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = env::args().skip(1).collect();
    match parse_args(&args) {
        Ok(Action::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Emit(opts)) => match emit(&opts) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("{err:#}");
                ExitCode::FAILURE
            }
        },
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
    }
}
