use std::fmt::Display;
use std::str::FromStr;
use std::time::Instant;

use clap::ArgMatches;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    clique::{checker, CheckerResult, Clique, CliqueInstance, VertexId},
    config::SearchConfig,
    dimacs::DimacsInstance,
    error::CliqueError,
    random::RandomSource,
    search::restarts::{restarts, SearchOutcome},
};

/** installs the log subscriber of the executables: `RUST_LOG` filter (default: info), written on
stderr so that stdout only holds the results. */
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// parses an optional command line value
fn parse_arg<T>(main_args:&ArgMatches, name:&str) -> Result<Option<T>, CliqueError>
where T: FromStr, T::Err: Display {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|e|
            CliqueError::InvalidParameter(format!("unable to parse --{} {} ({})", name, s, e))
        ),
    }
}

/** reads the search parameters from the command line (iterations, randomization, seed, threads,
rule). Missing values take their default. */
pub fn read_search_config(main_args:&ArgMatches) -> Result<SearchConfig, CliqueError> {
    let default = SearchConfig::default();
    let cfg = SearchConfig {
        iterations: parse_arg(main_args, "iterations")?.unwrap_or(default.iterations),
        randomization: parse_arg(main_args, "randomization")?.unwrap_or(default.randomization),
        seed: parse_arg(main_args, "seed")?,
        threads: parse_arg(main_args, "threads")?.unwrap_or(default.threads),
        rule: parse_arg(main_args, "rule")?.unwrap_or(default.rule),
    };
    cfg.validate()?;
    Ok(cfg)
}

/** reads command line input and returns the solution_filename, stats_filename */
pub fn read_output_files(main_args:&ArgMatches) -> (Option<String>, Option<String>) {
    let sol_file: Option<String> = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    let perf_file: Option<String> = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    (sol_file, perf_file)
}


/** result of the search on one instance file */
#[derive(Debug, Clone)]
pub struct FileReport {
    /// instance file name
    pub inst_name: String,
    /// search outcome (best clique, primal list)
    pub outcome: SearchOutcome,
    /// search time (seconds), reading the instance excluded
    pub duration: f32,
    /// seed of the random source used
    pub seed: u64,
}

impl FileReport {
    /// best clique
    pub fn clique(&self) -> &Clique { &self.outcome.clique }
}

/** reads an instance, runs the restarts on it and checks the result. An invalid clique is
reported as an error. */
pub fn solve_file(
    filename:&str,
    cfg:&SearchConfig,
    rng:&mut RandomSource,
    show_statistics:bool,
) -> Result<FileReport, CliqueError> {
    info!("reading instance: {}...", filename);
    let instance = DimacsInstance::from_file(filename)?;
    if show_statistics { instance.display_statistics(); }
    let t_start = Instant::now();
    let outcome = restarts(&instance, cfg, rng)?;
    let duration = t_start.elapsed().as_secs_f32();
    check_clique(&instance, filename, outcome.clique.as_slice())?;
    Ok(FileReport { inst_name: filename.to_string(), outcome, duration, seed: rng.seed() })
}

/// checks the clique, converts a failure into an error
pub fn check_clique(inst:&dyn CliqueInstance, filename:&str, clique:&[VertexId]) -> Result<usize, CliqueError> {
    match checker(inst, clique) {
        CheckerResult::Ok(size) => Ok(size),
        reason => Err(CliqueError::InvalidClique { file: filename.to_string(), reason }),
    }
}

/// vertices of the clique, 1-based, space separated
pub fn clique_to_string(clique:&[VertexId]) -> String {
    clique.iter().map(|v| (v+1).to_string()).collect::<Vec<String>>().join(" ")
}

/// batch output block: "<filename> <size> <time>" then the vertices
pub fn batch_output(report:&FileReport) -> String {
    format!(
        "{} {} {:.3}\n{}",
        report.inst_name, report.clique().len(), report.duration, clique_to_string(report.clique())
    )
}

/// batch output block of a failed instance (reported as a clique of size 0)
pub fn failure_output(error:&CliqueError) -> String {
    format!("*** WARNING: {} ***\nOutput:\n0", error)
}

/// exports search results to files
pub fn export_results(
    report:&FileReport,
    cfg:&SearchConfig,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<(), CliqueError> {
    // export statistics
    if let Some(filename) = perf_file {
        let stats = json!({
            "primal_list": report.outcome.primal_list,
            "improvements": report.outcome.improvements,
            "time_searched": report.duration,
            "inst_name": report.inst_name,
            "seed": report.seed,
            "nb_restarts": report.outcome.nb_restarts,
            "config": cfg,
        });
        write_file(filename, stats.to_string())?;
    }
    // export solution
    if let Some(filename) = sol_file {
        write_file(filename, clique_to_string(report.clique()) + "\n")?;
    }
    Ok(())
}

/// writes a file, converts a failure into an error
fn write_file(filename:&str, content:String) -> Result<(), CliqueError> {
    std::fs::write(filename, content).map_err(|source|
        CliqueError::Export { path: filename.to_string(), source }
    )
}
