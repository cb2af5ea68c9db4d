//! The representation-plugin contract.
//!
//! [`Representation`] is the capability interface every problem variant
//! satisfies: build a valid random genome, score it, perturb it, and
//! recombine two parents. Problem structs own their instance data (the
//! element catalog, the target keyword, the city table) plus default
//! operator rates, so the trait surface stays uniform while the named
//! per-operator methods on each struct keep explicit rate parameters.
//!
//! Implementors: [`crate::mixture::MixtureProblem`],
//! [`crate::keyword::KeywordProblem`], [`crate::tsp::TspProblem`],
//! [`crate::vrp::VrpProblem`].

use crate::selection::Direction;
use rand::Rng;

/// A problem representation: genome shape plus its evolutionary operators.
///
/// Operators return new genome values rather than mutating in place, so a
/// caller can keep the previous generation intact. `crossover` passes the
/// parents through (as clones, structurally equal) when the gating draw
/// misses the stored rate; `mutate` applies the representation's full
/// mutation suite, each kind independently gated by its stored rate.
pub trait Representation {
    /// The genome encoding for this representation.
    type Genome: Clone + PartialEq + std::fmt::Debug;

    /// Builds one valid random genome.
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Genome;

    /// Scores a genome. Pure: no mutation, deterministic given inputs.
    fn fitness(&self, genome: &Self::Genome) -> f64;

    /// Applies the representation's mutation operators at their stored
    /// rates, preserving the genome's structural invariant.
    fn mutate<R: Rng>(&self, genome: &Self::Genome, rng: &mut R) -> Self::Genome;

    /// Recombines two parents at the stored crossover rate.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Genome,
        parent2: &Self::Genome,
        rng: &mut R,
    ) -> (Self::Genome, Self::Genome);

    /// Which fitness direction is better for this representation.
    fn direction(&self) -> Direction;
}
