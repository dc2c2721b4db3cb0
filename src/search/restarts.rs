use rayon::prelude::*;
use tracing::{debug, info};

use crate::clique::{Clique, CliqueInstance};
use crate::config::SearchConfig;
use crate::error::CliqueError;
use crate::random::RandomSource;
use crate::search::greedy_randomized::CliqueBuilder;

/** result of a multi-restart search */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// best clique found (the first one found among the largest)
    pub clique: Clique,
    /// size of the incumbent after each improvement
    pub primal_list: Vec<usize>,
    /// restart index (0-based) of each improvement
    pub improvements: Vec<usize>,
    /// nb restarts performed
    pub nb_restarts: usize,
}

impl SearchOutcome {
    /// size of the best clique
    pub fn size(&self) -> usize { self.clique.len() }

    /// records a new clique, replaces the incumbent if strictly larger
    fn offer(&mut self, restart:usize, clique:Clique) {
        self.nb_restarts += 1;
        if clique.len() > self.clique.len() {
            debug!("restart {}: new best clique ({})", restart, clique.len());
            self.primal_list.push(clique.len());
            self.improvements.push(restart);
            self.clique = clique;
        }
    }

    /** merges the outcomes of consecutive restart ranges (given in restart order), keeping the
    first largest clique. */
    fn merge(outcomes:Vec<SearchOutcome>) -> Self {
        let mut res = Self::default();
        for outcome in outcomes {
            res.nb_restarts += outcome.nb_restarts;
            let mut best_size = res.clique.len();
            for (size, restart) in outcome.primal_list.iter().zip(outcome.improvements.iter()) {
                // records of a range are records of the whole search iff larger than what precedes
                if *size > best_size {
                    best_size = *size;
                    res.primal_list.push(*size);
                    res.improvements.push(*restart);
                }
            }
            if outcome.clique.len() > res.clique.len() {
                res.clique = outcome.clique;
            }
        }
        res
    }
}


/** runs nb_restarts constructions (numbered from first_restart) with a builder and a random
source, keeps the largest clique. */
fn run_restarts(
    inst:&dyn CliqueInstance,
    first_restart:usize,
    nb_restarts:usize,
    builder:&mut CliqueBuilder,
    rng:&mut RandomSource,
) -> SearchOutcome {
    let mut res = SearchOutcome::default();
    for restart in first_restart..first_restart+nb_restarts {
        let clique = builder.build(inst, rng);
        res.offer(restart, clique);
    }
    res
}

/** sequential multi-restart search: performs exactly `cfg.iterations` constructions, all drawing
from rng, and returns the first largest clique. `cfg.threads` is ignored. */
pub fn sequential_restarts(
    inst:&dyn CliqueInstance,
    cfg:&SearchConfig,
    rng:&mut RandomSource,
) -> Result<SearchOutcome, CliqueError> {
    cfg.validate()?;
    let mut builder = CliqueBuilder::new(cfg.randomization, cfg.rule);
    Ok(run_restarts(inst, 0, cfg.iterations, &mut builder, rng))
}

/** parallel multi-restart search.
A base generator is split from rng (advancing it) and the restarts are split into `cfg.threads`
consecutive ranges. Range k draws from `base.substream(k)` and keeps its own best clique. The
ranges are then merged in order, so the result only depends on the state of rng and the number of
threads.
*/
pub fn parallel_restarts(
    inst:&dyn CliqueInstance,
    cfg:&SearchConfig,
    rng:&mut RandomSource,
) -> Result<SearchOutcome, CliqueError> {
    cfg.validate()?;
    let base_rng = rng.split();
    let nb_ranges = cfg.threads.min(cfg.iterations);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(cfg.threads).build()?;
    let base = cfg.iterations / nb_ranges;
    let extra = cfg.iterations % nb_ranges;
    let outcomes:Vec<SearchOutcome> = pool.install(|| {
        (0..nb_ranges).into_par_iter().map(|k| {
            let first = k*base + k.min(extra);
            let size = base + if k < extra { 1 } else { 0 };
            let mut worker_rng = base_rng.substream(k as u64);
            let mut builder = CliqueBuilder::new(cfg.randomization, cfg.rule);
            run_restarts(inst, first, size, &mut builder, &mut worker_rng)
        }).collect()
    });
    Ok(SearchOutcome::merge(outcomes))
}

/** randomized greedy search with restarts. Runs sequentially if `cfg.threads` is 1, on a worker
pool otherwise. */
pub fn restarts(
    inst:&dyn CliqueInstance,
    cfg:&SearchConfig,
    rng:&mut RandomSource,
) -> Result<SearchOutcome, CliqueError> {
    let res = if cfg.threads <= 1 {
        sequential_restarts(inst, cfg, rng)?
    } else {
        parallel_restarts(inst, cfg, rng)?
    };
    info!(
        "{} restarts ({} threads, randomization {}, rule {}): best clique {}",
        res.nb_restarts, cfg.threads, cfg.randomization, cfg.rule, res.size()
    );
    Ok(res)
}
