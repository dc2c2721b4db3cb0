//! Randomized greedy search for the maximum clique problem.

/// candidate vertices of a construction
pub mod candidates;

/// randomized greedy clique construction
pub mod greedy_randomized;

/// multi-restart search (sequential and parallel)
pub mod restarts;
