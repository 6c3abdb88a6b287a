mod adjacency_lists;
mod config;
mod errors;
mod graph_analysis;
mod reporting;
mod road_map;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Cli, Settings};
use crate::graph_analysis::BfsResult;
use crate::road_map::RoadMap;

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

/// Asks for the destination vertex. Anything that is not an integer, including
/// unreadable input, falls back to vertex 0.
fn prompt_destination<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> i64 {
    let prompt = "Input a vertex from where we will build a shortcut to the specified vertex: ";
    if let Err(err) = write!(out, "{prompt}").and_then(|()| out.flush()) {
        warn!("could not write prompt: {err}");
    }

    let mut answer = Vec::new();
    if let Err(err) = input.read_until(b'\n', &mut answer) {
        warn!("could not read destination, using vertex 0: {err}");
        return 0;
    }
    let answer = String::from_utf8_lossy(&answer); // invalid bytes become U+FFFD and fail to parse
    match answer.trim().parse() {
        Ok(destination) => destination,
        Err(_) => {
            warn!(answer = answer.trim(), "not a vertex number, using vertex 0");
            0
        }
    }
}

fn print_analysis<W: Write>(out: &mut W, road_map: &RoadMap, result: &BfsResult) -> io::Result<()> {
    reporting::write_road_map(out, road_map)?;
    writeln!(out)?;
    writeln!(out, "Shortest distances from vertex {}:", road_map.start())?;
    reporting::write_distances(out, result)?;
    writeln!(out)
}

/// Load, search, report. Only a failed load is an error; console and file
/// output are best effort.
fn run<R: BufRead, W: Write>(settings: &Settings, input: &mut R, out: &mut W) -> Result<()> {
    let road_map = road_map::load_road_map(&settings.input, settings.load)
        .context("error reading data from file")?;
    info!(
        vertices = road_map.vertex_count(),
        edges = road_map.edge_count(),
        start = road_map.start(),
        "loaded road map"
    );

    let graph = adjacency_lists::build_adjacency(&road_map);
    let result = graph_analysis::bfs(&graph, road_map.start());

    if let Err(err) = print_analysis(out, &road_map, &result) {
        warn!("could not write to the console: {err}");
    }

    match reporting::save_distances(&settings.output, &result) {
        Ok(()) => info!(path = %settings.output.display(), "wrote distances"),
        Err(err) => warn!(path = %settings.output.display(), "could not write distances: {err}"),
    }
    if let Some(path) = &settings.csv_output {
        match reporting::save_distances_csv(path, &result) {
            Ok(()) => info!(path = %path.display(), "wrote csv export"),
            Err(err) => warn!(path = %path.display(), "could not write csv export: {err}"),
        }
    }

    let destination = match settings.destination {
        Some(destination) => destination,
        None => {
            let destination = prompt_destination(input, out);
            // blank line between the answer and the path
            if let Err(err) = writeln!(out) {
                warn!("could not write to the console: {err}");
            }
            destination
        }
    };
    if let Err(err) = reporting::write_path(out, &result, destination) {
        warn!("could not write to the console: {err}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match Settings::from_cli(cli) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&settings, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
