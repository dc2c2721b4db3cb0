use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CliqueError;

/** how the candidates are ordered before the windowed pick */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionRule {
    /// survivors are shuffled, the pick is uniform within the first `randomization` ones
    Uniform,
    /** survivors are shuffled, then sorted by decreasing degree: the window holds the
    `randomization` highest degree survivors (ties broken at random) */
    DegreeRanked,
}

impl Default for SelectionRule {
    fn default() -> Self { SelectionRule::Uniform }
}

impl fmt::Display for SelectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionRule::Uniform => write!(f, "uniform"),
            SelectionRule::DegreeRanked => write!(f, "degree-ranked"),
        }
    }
}

impl FromStr for SelectionRule {
    type Err = CliqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(SelectionRule::Uniform),
            "degree-ranked" | "degree" => Ok(SelectionRule::DegreeRanked),
            _ => Err(CliqueError::InvalidParameter(format!(
                "unknown selection rule {} (valid: 'uniform', 'degree-ranked')", s
            ))),
        }
    }
}

/** parameters of a randomized greedy search run */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// number of restarts (≥ 1)
    pub iterations: usize,
    /// size of the window the next vertex is drawn from (≥ 1)
    pub randomization: usize,
    /// seed of the random source (drawn from OS entropy if none)
    pub seed: Option<u64>,
    /// number of workers running restarts (1: sequential)
    pub threads: usize,
    /// candidate ordering before the pick
    pub rule: SelectionRule,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            randomization: 100_000,
            seed: None,
            threads: 1,
            rule: SelectionRule::Uniform,
        }
    }
}

impl SearchConfig {
    /// checks that the parameters are in their domain
    pub fn validate(&self) -> Result<(), CliqueError> {
        if self.iterations == 0 {
            return Err(CliqueError::InvalidParameter("iterations must be ≥ 1".to_string()));
        }
        if self.randomization == 0 {
            return Err(CliqueError::InvalidParameter("randomization must be ≥ 1".to_string()));
        }
        if self.threads == 0 {
            return Err(CliqueError::InvalidParameter("threads must be ≥ 1".to_string()));
        }
        Ok(())
    }
}
