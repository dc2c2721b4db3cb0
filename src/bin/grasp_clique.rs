use clap::{App, ArgMatches, load_yaml};
use tracing::info;

use grasp_clique::error::CliqueError;
use grasp_clique::random::RandomSource;
use grasp_clique::util::{
    clique_to_string, export_results, init_logging, read_output_files, read_search_config, solve_file,
};


/** finds a large clique of an instance using the randomized greedy with restarts.
prints the clique size, then its vertices (1-based). Exits with status 1 on any error. */
pub fn main() {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("grasp_clique.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(&main_args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(main_args:&ArgMatches) -> Result<(), CliqueError> {
    let inst_filename = main_args.value_of("instance").ok_or_else(||
        CliqueError::InvalidParameter("missing instance file".to_string())
    )?;
    let cfg = read_search_config(main_args)?;
    let (sol_file, perf_file) = read_output_files(main_args);
    let mut rng = RandomSource::from_optional_seed(cfg.seed);
    info!("random seed: {}", rng.seed());

    // solve it
    let report = solve_file(inst_filename, &cfg, &mut rng, main_args.is_present("stats"))?;
    info!("search took {:.3} seconds. Clique size: {}", report.duration, report.clique().len());
    println!("{}", report.clique().len());
    println!("{}", clique_to_string(report.clique()));

    // export results
    export_results(&report, &cfg, perf_file.as_deref(), sol_file.as_deref())
}
