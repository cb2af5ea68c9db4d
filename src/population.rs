//! Population-level operator plumbing.
//!
//! Two generic drivers: [`map_operator`] lifts a per-genome operator over
//! an ordered population, and [`pair_and_recombine`] runs a crossover
//! operator over adjacent pairs and reshuffles the result. Both preserve
//! population size.

use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Applies `op` to every genome, preserving order and size.
///
/// The operator receives the RNG so probabilistic per-genome mutations
/// thread their draws through a single stream.
pub fn map_operator<G, R, F>(population: &[G], rng: &mut R, mut op: F) -> Vec<G>
where
    R: Rng,
    F: FnMut(&G, &mut R) -> G,
{
    population.iter().map(|genome| op(genome, rng)).collect()
}

/// Pairs adjacent genomes, recombines each pair, and shuffles the result.
///
/// Element `2i` is paired with `2i+1`. For an odd-sized population the
/// final genome has no partner and is carried over verbatim. The
/// assembled output is shuffled before returning so the pairing order of
/// this generation does not bias which genomes meet in the next one.
///
/// # Errors
/// [`Error::PopulationTooSmall`] for populations of fewer than 2 genomes —
/// there is nothing to pair.
pub fn pair_and_recombine<G, R, F>(population: &[G], rng: &mut R, mut crossover: F) -> Result<Vec<G>>
where
    G: Clone,
    R: Rng,
    F: FnMut(&G, &G, &mut R) -> (G, G),
{
    if population.len() < 2 {
        return Err(Error::PopulationTooSmall(population.len()));
    }

    let mut next = Vec::with_capacity(population.len());
    for pair in population.chunks_exact(2) {
        let (child1, child2) = crossover(&pair[0], &pair[1], rng);
        next.push(child1);
        next.push(child2);
    }
    if population.len() % 2 == 1 {
        next.push(population[population.len() - 1].clone());
    }

    next.shuffle(rng);
    Ok(next)
}
