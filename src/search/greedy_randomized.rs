use std::cmp::{min, Reverse};

use crate::clique::{Clique, CliqueInstance};
use crate::config::SelectionRule;
use crate::random::RandomSource;
use crate::search::candidates::CandidateSet;

/** randomized greedy clique construction.

One construction:
 1. all vertices are candidates, shuffle them
 2. while some candidate remains:
    - draw a position in [0, min(randomization, nb candidates) - 1], add that candidate to the clique
    - remove it and every candidate that is not one of its neighbors
    - shuffle the remaining candidates

Each step removes at least the selected vertex, so a construction performs at most n steps.
With the `Uniform` rule, the picked vertex is uniformly distributed among the candidates whatever
the randomization. `DegreeRanked` orders the shuffled candidates by decreasing degree before the
pick, so the window holds the highest degree candidates.

The builder keeps its candidate buffer between constructions.
*/
#[derive(Debug, Clone)]
pub struct CliqueBuilder {
    /// window size of the random pick
    randomization: usize,
    /// candidate ordering before the pick
    rule: SelectionRule,
    /// candidates of the current construction
    candidates: CandidateSet,
}

impl CliqueBuilder {
    /// builder with a window size (≥ 1) and a selection rule
    pub fn new(randomization:usize, rule:SelectionRule) -> Self {
        debug_assert!(randomization >= 1, "randomization should be ≥ 1");
        Self { randomization, rule, candidates: CandidateSet::default() }
    }

    /// position of the next pick among nb_candidates (> 0) candidates
    pub fn pick_position(&self, nb_candidates:usize, rng:&mut RandomSource) -> usize {
        debug_assert!(nb_candidates > 0);
        let last = nb_candidates - 1;
        rng.uniform_int(0, min(self.randomization.saturating_sub(1), last))
    }

    /// builds a clique
    pub fn build(&mut self, inst:&dyn CliqueInstance, rng:&mut RandomSource) -> Clique {
        let mut res = Clique::new();
        self.candidates.reset(inst.nb_vertices());
        self.reorder(inst, rng);
        while !self.candidates.is_empty() {
            let pos = self.pick_position(self.candidates.len(), rng);
            let current_vertex = self.candidates.swap_remove(pos);
            res.push(current_vertex);
            // remove the non neighbors of the current vertex
            self.candidates.retain(|u| inst.are_adjacent(current_vertex, u));
            self.reorder(inst, rng);
        }
        res
    }

    /// shuffles the candidates (then ranks them by degree if requested)
    fn reorder(&mut self, inst:&dyn CliqueInstance, rng:&mut RandomSource) {
        self.candidates.shuffle(rng);
        if self.rule == SelectionRule::DegreeRanked {
            // stable: equal degrees keep their random order
            self.candidates.as_mut_slice().sort_by_key(|v| Reverse(inst.degree(*v)));
        }
    }
}
