//! Keyword-recovery representation: genome, generation, fitness, and
//! genetic operators.

use crate::error::{Error, Result};
use crate::operators::ordered_crossover;
use crate::selection::Direction;
use crate::types::Representation;
use rand::Rng;

/// Characters a keyword gene can take: ASCII letters, then digits.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A candidate keyword.
pub type KeywordGenome = Vec<char>;

/// Draws one gene uniformly from [`ALPHABET`].
pub fn random_gene<R: Rng>(rng: &mut R) -> char {
    let bytes = ALPHABET.as_bytes();
    bytes[rng.random_range(0..bytes.len())] as char
}

/// The keyword-recovery problem: find the hidden target string.
#[derive(Debug, Clone)]
pub struct KeywordProblem {
    target: Vec<char>,
    min_size: usize,
    max_size: usize,
    gene_mutation_rate: f64,
    size_mutation_rate: f64,
    crossover_rate: f64,
}

impl KeywordProblem {
    /// Creates a problem recovering `target`, generating initial genomes
    /// with lengths in `[min_size, max_size]`.
    ///
    /// # Errors
    /// [`Error::EmptyTarget`] for an empty target,
    /// [`Error::InvalidSizeRange`] unless `1 <= min_size <= max_size`.
    pub fn new(target: &str, min_size: usize, max_size: usize) -> Result<Self> {
        if target.is_empty() {
            return Err(Error::EmptyTarget);
        }
        if min_size == 0 || min_size > max_size {
            return Err(Error::InvalidSizeRange {
                min: min_size,
                max: max_size,
            });
        }
        Ok(Self {
            target: target.chars().collect(),
            min_size,
            max_size,
            gene_mutation_rate: 0.05,
            size_mutation_rate: 0.05,
            crossover_rate: 0.5,
        })
    }

    /// Sets the gene-mutation rate used by the [`Representation`] impl.
    pub fn with_gene_mutation_rate(mut self, rate: f64) -> Self {
        self.gene_mutation_rate = rate;
        self
    }

    /// Sets the size-mutation rate used by the [`Representation`] impl.
    pub fn with_size_mutation_rate(mut self, rate: f64) -> Self {
        self.size_mutation_rate = rate;
        self
    }

    /// Sets the crossover rate used by the [`Representation`] impl.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// The hidden target keyword.
    pub fn target(&self) -> &[char] {
        &self.target
    }

    /// Builds a random genome with length uniform in
    /// `[min_size, max_size]`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> KeywordGenome {
        let size = rng.random_range(self.min_size..=self.max_size);
        (0..size).map(|_| random_gene(rng)).collect()
    }

    /// Positional mismatches against the target over the shorter length,
    /// plus the absolute length difference. Lower is better; an exact
    /// match scores 0. Deliberately not an edit distance: a deletion in
    /// the middle shifts every later position into mismatch.
    pub fn fitness(&self, genome: &[char]) -> f64 {
        let shorter = genome.len().min(self.target.len());
        let mismatches = genome[..shorter]
            .iter()
            .zip(&self.target[..shorter])
            .filter(|(a, b)| a != b)
            .count();
        let size_difference = genome.len().abs_diff(self.target.len());
        (mismatches + size_difference) as f64
    }

    /// Gene mutation: with probability `rate`, redraw one random
    /// position.
    pub fn gene_mutation<R: Rng>(
        &self,
        genome: &[char],
        rate: f64,
        rng: &mut R,
    ) -> KeywordGenome {
        let mut next = genome.to_vec();
        if !next.is_empty() && rng.random::<f64>() < rate {
            let index = rng.random_range(0..next.len());
            next[index] = random_gene(rng);
        }
        next
    }

    /// Size mutation: with probability `rate`, redraw the length
    /// uniformly in `[1, max_size]`, appending fresh genes to grow or
    /// truncating from the end to shrink.
    pub fn size_mutation<R: Rng>(
        &self,
        genome: &[char],
        rate: f64,
        rng: &mut R,
    ) -> KeywordGenome {
        let mut next = genome.to_vec();
        if rng.random::<f64>() < rate {
            let new_size = rng.random_range(1..=self.max_size);
            while next.len() < new_size {
                next.push(random_gene(rng));
            }
            next.truncate(new_size);
        }
        next
    }

    /// Interval crossover: with probability `rate`, swap a shared-index
    /// contiguous slice between the parents and fill each child with the
    /// other parent's remaining characters in order, skipping characters
    /// already present (see [`ordered_crossover`]). Parents shorter than
    /// the minimum slice span of 2 pass through unchanged.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &[char],
        parent2: &[char],
        rate: f64,
        rng: &mut R,
    ) -> (KeywordGenome, KeywordGenome) {
        if rng.random::<f64>() < rate && parent1.len() >= 2 && parent2.len() >= 2 {
            ordered_crossover(parent1, parent2, rng)
        } else {
            (parent1.to_vec(), parent2.to_vec())
        }
    }

    /// Size-adaptive crossover: with probability `rate`, the shorter
    /// parent plus the longer parent's tail forms one child and the
    /// longer parent truncated to the shorter length forms the other.
    /// Equal-length parents pass through unchanged.
    pub fn size_crossover<R: Rng>(
        &self,
        parent1: &[char],
        parent2: &[char],
        rate: f64,
        rng: &mut R,
    ) -> (KeywordGenome, KeywordGenome) {
        if rng.random::<f64>() < rate && parent1.len() != parent2.len() {
            let (short, long) = if parent1.len() < parent2.len() {
                (parent1, parent2)
            } else {
                (parent2, parent1)
            };
            let mut extended = short.to_vec();
            extended.extend_from_slice(&long[short.len()..]);
            let truncated = long[..short.len()].to_vec();
            (extended, truncated)
        } else {
            (parent1.to_vec(), parent2.to_vec())
        }
    }
}

impl Representation for KeywordProblem {
    type Genome = KeywordGenome;

    fn generate<R: Rng>(&self, rng: &mut R) -> KeywordGenome {
        KeywordProblem::generate(self, rng)
    }

    fn fitness(&self, genome: &KeywordGenome) -> f64 {
        KeywordProblem::fitness(self, genome)
    }

    fn mutate<R: Rng>(&self, genome: &KeywordGenome, rng: &mut R) -> KeywordGenome {
        let step = self.gene_mutation(genome, self.gene_mutation_rate, rng);
        self.size_mutation(&step, self.size_mutation_rate, rng)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &KeywordGenome,
        parent2: &KeywordGenome,
        rng: &mut R,
    ) -> (KeywordGenome, KeywordGenome) {
        KeywordProblem::crossover(self, parent1, parent2, self.crossover_rate, rng)
    }

    fn direction(&self) -> Direction {
        Direction::Minimize
    }
}
