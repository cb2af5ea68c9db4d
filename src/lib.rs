//! Genetic-algorithm operator toolkit for combinatorial search.
//!
//! Provides the full evolutionary operator set — generation, fitness,
//! mutation, crossover, selection, and population plumbing — for four
//! independent problem representations:
//!
//! - **Mixture** ([`mixture`]): compound design over a chemical-element
//!   catalog, trading price against atomic weight under a fixed 100-unit
//!   fraction budget.
//! - **Keyword** ([`keyword`]): variable-length string recovery over
//!   letters and digits.
//! - **TSP** ([`tsp`]): depot-closed tours as city permutations.
//! - **VRP** ([`vrp`]): multi-vehicle routing as partitioned permutations.
//!
//! Each representation implements the [`types::Representation`] contract:
//! generate a valid random genome, score it, perturb it while preserving
//! its structural invariant, and recombine two parents. Population-level
//! glue ([`population`]) and selection strategies ([`selection`]) are
//! generic over the genome type.
//!
//! # Scope
//!
//! This crate exposes operators only. There is no evolutionary loop,
//! termination logic, or reporting here — a driver that chains
//! selection → crossover → mutation → evaluation per generation is the
//! consumer's concern.
//!
//! # Determinism
//!
//! Every operator takes `&mut impl rand::Rng`; seed one via
//! [`random::create_rng`] for reproducible runs.

pub mod cities;
pub mod error;
pub mod keyword;
pub mod mixture;
pub mod operators;
pub mod population;
pub mod random;
pub mod selection;
pub mod tsp;
pub mod types;
pub mod vrp;

pub use error::{Error, Result};
