//! TSPLIB to JSON - Command Line Interface
//!
//! Converts all the TSP instances of a source directory and saves the results
//! in an output directory.

use clap::{ArgAction, Parser};
use env_logger::Env;
use tsplib_json::config::{ConvertConfig, INCLUDE_DIST_THRESHOLD, TSP_OUT_DIR, TSP_SRC_DIR};
use tsplib_json::convert::convert_all;

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tsplib-json")]
#[command(version = "1.0")]
#[command(about = "Converts TSPLIB instances to self-contained JSON files")]
struct Cli {
    /// Directory containing the original TSP files and the `solutions` file
    #[arg(long, default_value = TSP_SRC_DIR)]
    src_directory: PathBuf,

    /// Directory where the converted JSON files are saved
    #[arg(long, default_value = TSP_OUT_DIR)]
    out_directory: PathBuf,

    /// Include the distances matrix in the output files
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    include_distances: bool,

    /// Distances are not included for instances with more nodes than this,
    /// unless the instance is explicit
    #[arg(long, default_value_t = INCLUDE_DIST_THRESHOLD)]
    inc_dist_threshold: usize,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config = ConvertConfig {
        src_dir: cli.src_directory,
        out_dir: cli.out_directory,
        include_distances: cli.include_distances,
        inc_dist_threshold: cli.inc_dist_threshold,
        pretty: cli.pretty,
        show_progress: !cli.quiet,
        ..Default::default()
    };

    if let Err(e) = convert_all(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
