//! Selection operators.
//!
//! Both strategies consume a population and its precomputed fitness
//! values and return a survivor population of the same size. They are
//! representation-agnostic: tournament is generic over the fitness
//! [`Direction`], roulette over a caller-supplied fitness-to-weight
//! transform.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::error::{Error, Result};
use crate::random::sample_indices;
use rand::Rng;

/// Which end of the fitness scale is better.
///
/// Mixture design maximizes (price-heavy compounds win); keyword, TSP,
/// and VRP minimize (difference counts and path lengths).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher fitness is better.
    Maximize,
    /// Lower fitness is better.
    Minimize,
}

impl Direction {
    /// Returns `true` when `candidate` is strictly better than `incumbent`.
    pub fn better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Direction::Maximize => candidate > incumbent,
            Direction::Minimize => candidate < incumbent,
        }
    }
}

/// Tournament selection.
///
/// Runs one tournament per output slot: draws `k` distinct population
/// indices without replacement and keeps the genome whose fitness is best
/// per `direction`. Ties go to the first-drawn contestant, so a draw
/// sequence fully determines the outcome.
///
/// # Errors
/// [`Error::FitnessLengthMismatch`] if `fitness` and `population` differ
/// in length, [`Error::InvalidTournamentSize`] unless
/// `1 <= k <= population.len()`.
pub fn tournament_selection<G: Clone, R: Rng>(
    population: &[G],
    fitness: &[f64],
    k: usize,
    direction: Direction,
    rng: &mut R,
) -> Result<Vec<G>> {
    check_lengths(population.len(), fitness.len())?;
    if k == 0 || k > population.len() {
        return Err(Error::InvalidTournamentSize {
            k,
            n: population.len(),
        });
    }

    let mut survivors = Vec::with_capacity(population.len());
    for _ in 0..population.len() {
        let contestants = sample_indices(rng, population.len(), k);
        let mut winner = contestants[0];
        for &idx in &contestants[1..] {
            if direction.better(fitness[idx], fitness[winner]) {
                winner = idx;
            }
        }
        survivors.push(population[winner].clone());
    }
    Ok(survivors)
}

/// Roulette-wheel selection.
///
/// Transforms each fitness into a weight via `to_weight`, then draws
/// `population.len()` genomes independently with replacement,
/// proportionally to weight.
///
/// Weights must be finite and non-negative with a strictly positive
/// total; anything else (notably `1/0 = inf` from the inverse transform
/// applied to a perfect zero fitness) is an error rather than a silently
/// reshaped wheel.
///
/// # Errors
/// [`Error::FitnessLengthMismatch`], [`Error::InvalidWeight`].
pub fn roulette_selection<G, R, W>(
    population: &[G],
    fitness: &[f64],
    to_weight: W,
    rng: &mut R,
) -> Result<Vec<G>>
where
    G: Clone,
    R: Rng,
    W: Fn(f64) -> f64,
{
    check_lengths(population.len(), fitness.len())?;

    let weights: Vec<f64> = fitness.iter().map(|&f| to_weight(f)).collect();
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { index, weight });
        }
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(Error::InvalidWeight { index: 0, weight: total });
    }

    let mut survivors = Vec::with_capacity(population.len());
    for _ in 0..population.len() {
        let threshold = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        let mut picked = population.len() - 1; // floating-point fallback
        for (i, &w) in weights.iter().enumerate() {
            cumulative += w;
            if cumulative > threshold {
                picked = i;
                break;
            }
        }
        survivors.push(population[picked].clone());
    }
    Ok(survivors)
}

/// Weight transform that shifts fitness by a constant offset.
///
/// Mixture fitness lives in roughly `(-1, 1)`; `shifted(2.0)` keeps
/// negative scores usable as positive wheel weights.
pub fn shifted(offset: f64) -> impl Fn(f64) -> f64 {
    move |f| f + offset
}

/// Weight transform that inverts fitness, so lower raw fitness draws a
/// larger wheel slice. A fitness of exactly zero produces an infinite
/// weight, which [`roulette_selection`] rejects.
pub fn inverse(f: f64) -> f64 {
    1.0 / f
}

fn check_lengths(population: usize, fitness: usize) -> Result<()> {
    if population == 0 || population != fitness {
        return Err(Error::FitnessLengthMismatch {
            population,
            fitness,
        });
    }
    Ok(())
}
