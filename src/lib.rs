//! Randomized greedy heuristic for the Maximum Clique problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// clique instance base trait, cliques and checker
pub mod clique;

/// read DIMACS instances
pub mod dimacs;

/// seeded random source
pub mod random;

/// search parameters
pub mod config;

/// error types
pub mod error;

/// helper and utility methods for executables
pub mod util;

/// randomized greedy search for the clique problem
pub mod search;
