//! Generic sequence recombination and perturbation primitives.
//!
//! The order-based crossover and position swap shared by the keyword,
//! TSP, and VRP representations. These operate on plain slices and are
//! agnostic to what the elements mean; rate gating and representation
//! invariants live with the callers.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use rand::Rng;

/// Order-based crossover: contiguous slice plus order-preserving fill.
///
/// Draws one index range `[start, end)` with span at least 2 over the
/// shorter parent, then builds each child as that slice of one parent
/// followed by every element of the *other* parent not already present in
/// the child, in the other parent's original order.
///
/// For permutation parents over the same domain, both children are
/// permutations of that domain. For sequences with repeated values the
/// by-value membership filter collapses duplicates in the fill — accepted
/// behavior for character genomes, where repeated symbols carry no
/// positional identity.
///
/// # Panics
/// Panics if either parent is shorter than 2. Callers gate degenerate
/// lengths before recombining.
pub fn ordered_crossover<T, R>(parent1: &[T], parent2: &[T], rng: &mut R) -> (Vec<T>, Vec<T>)
where
    T: Clone + PartialEq,
    R: Rng,
{
    let m = parent1.len().min(parent2.len());
    assert!(m >= 2, "parents must both have at least 2 elements");

    let start = rng.random_range(0..=m - 2);
    let end = rng.random_range(start + 2..=m);

    let child1 = slice_and_fill(parent1, parent2, start, end);
    let child2 = slice_and_fill(parent2, parent1, start, end);

    (child1, child2)
}

/// Build one child: `template[start..end]`, then donor elements not yet
/// present, in donor order.
fn slice_and_fill<T: Clone + PartialEq>(
    template: &[T],
    donor: &[T],
    start: usize,
    end: usize,
) -> Vec<T> {
    let mut child: Vec<T> = template[start..end].to_vec();
    for gene in donor {
        if !child.contains(gene) {
            child.push(gene.clone());
        }
    }
    child
}

/// Swaps two independently drawn positions (which may coincide).
///
/// Sequences shorter than 2 are left untouched.
pub fn swap_two<T, R: Rng>(seq: &mut [T], rng: &mut R) {
    let n = seq.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    seq.swap(i, j);
}
