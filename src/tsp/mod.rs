//! Travelling-salesman representation.
//!
//! Tours are permutations of city indices `1..=n-1`; city 0 is the
//! implicit depot closing the cycle. Fitness is Euclidean cycle length
//! plus a structural penalty on even cities scheduled early.
//!
//! # Key Types
//!
//! - [`TspProblem`]: city table, penalty, operators, and the
//!   [`crate::types::Representation`] impl
//! - [`TourGenome`]: the permutation genome

mod problem;

pub use problem::{TourGenome, TspProblem};
