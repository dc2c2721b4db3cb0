use clap::{App, load_yaml};
use tracing::{info, warn};

use grasp_clique::random::RandomSource;
use grasp_clique::util::{batch_output, failure_output, init_logging, read_search_config, solve_file};


/** runs the randomized greedy clique search on every instance given.
An unreadable or malformed instance, or an invalid result, is reported as a clique of size 0 and
the batch goes on. Exits with status 1 if every instance failed. */
pub fn main() {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("clique_batch.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let cfg = match read_search_config(&main_args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };
    let files:Vec<&str> = main_args.values_of("instances").map(|v| v.collect()).unwrap_or_default();
    // one random source for the whole batch
    let mut rng = RandomSource::from_optional_seed(cfg.seed);
    info!("random seed: {}", rng.seed());

    let mut nb_failed = 0;
    for filename in &files {
        match solve_file(filename, &cfg, &mut rng, false) {
            Ok(report) => println!("\nOutput:\n{}", batch_output(&report)),
            Err(e) => {
                warn!("{}: {}", filename, e);
                nb_failed += 1;
                println!("{}", failure_output(&e));
            }
        }
    }
    info!("{} instances solved, {} failed", files.len() - nb_failed, nb_failed);
    if !files.is_empty() && nb_failed == files.len() {
        std::process::exit(1);
    }
}
