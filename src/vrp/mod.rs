//! Multi-vehicle routing representation.
//!
//! Generalizes the TSP genome to one route per vehicle: an ordered
//! sequence of disjoint, non-empty city sequences whose concatenation is
//! a permutation of `1..=n-1`. Operators work on the flattened
//! permutation and re-cut it, so the partition invariant survives
//! recombination.
//!
//! # Key Types
//!
//! - [`VrpProblem`]: city table, vehicle count, operators, and the
//!   [`crate::types::Representation`] impl
//! - [`MultiRouteGenome`]: the partitioned-permutation genome

mod problem;

pub use problem::{MultiRouteGenome, VrpProblem};
