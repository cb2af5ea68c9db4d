//! Mixture-design representation: genome, generation, fitness, and
//! genetic operators.

use super::catalog::Catalog;
use crate::error::{Error, Result};
use crate::random::sample_indices;
use crate::selection::Direction;
use crate::types::Representation;
use rand::Rng;

/// A candidate compound: catalog indices paired with mass fractions.
///
/// Invariants: `components.len() == fractions.len()`, fractions sum to
/// 100 within floating tolerance, and every fraction except possibly the
/// last lies in `[5, 90]`. Component duplicates are allowed (element
/// mutation can introduce them); the generator starts from distinct ones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixtureGenome {
    /// Catalog indices of the selected elements.
    pub components: Vec<usize>,
    /// Mass fraction per component, summing to 100.
    pub fractions: Vec<f64>,
}

impl MixtureGenome {
    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// `true` for a zero-component genome (never produced here).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Sum of all mass fractions.
    pub fn fraction_sum(&self) -> f64 {
        self.fractions.iter().sum()
    }
}

/// The mixture-design problem: find the compound maximizing normalized
/// price minus normalized weight.
#[derive(Debug, Clone)]
pub struct MixtureProblem {
    catalog: Catalog,
    components: usize,
    individual_mutation_rate: f64,
    element_mutation_rate: f64,
    weight_mutation_rate: f64,
    crossover_rate: f64,
}

impl MixtureProblem {
    /// Creates a problem over `catalog` with `components` elements per
    /// genome.
    ///
    /// # Errors
    /// [`Error::InvalidComponentCount`] unless
    /// `2 <= components <= catalog.len()` — one component leaves the
    /// weight-transfer mutation nothing to transfer between, and the
    /// generator samples components without replacement.
    pub fn new(catalog: Catalog, components: usize) -> Result<Self> {
        if components < 2 || components > catalog.len() {
            return Err(Error::InvalidComponentCount {
                requested: components,
                catalog: catalog.len(),
            });
        }
        Ok(Self {
            catalog,
            components,
            individual_mutation_rate: 0.05,
            element_mutation_rate: 0.25,
            weight_mutation_rate: 0.05,
            crossover_rate: 0.5,
        })
    }

    /// Sets the rates used by the [`Representation`] impl: the
    /// whole-genome gate and the per-element gate of element mutation.
    pub fn with_element_rates(mut self, individual: f64, element: f64) -> Self {
        self.individual_mutation_rate = individual;
        self.element_mutation_rate = element;
        self
    }

    /// Sets the weight-mutation rate used by the [`Representation`] impl.
    pub fn with_weight_mutation_rate(mut self, rate: f64) -> Self {
        self.weight_mutation_rate = rate;
        self
    }

    /// Sets the crossover rate used by the [`Representation`] impl.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// The catalog this problem draws from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Builds a random genome: distinct components, fractions summing
    /// to 100.
    ///
    /// Fractions are drawn sequentially in `[5, hi]` where
    /// `hi = min(90, 95 - sum - 5·remaining)` reserves at least 5 units
    /// for every later draw and the closing fraction; the final fraction
    /// takes whatever remains (up to 95 for two components).
    pub fn generate<R: Rng>(&self, rng: &mut R) -> MixtureGenome {
        let components = sample_indices(rng, self.catalog.len(), self.components);

        let n = self.components;
        let mut fractions = Vec::with_capacity(n);
        let mut sum = 0.0;
        for draw in 0..n - 1 {
            let remaining = (n - 2 - draw) as f64;
            let hi = (95.0 - sum - 5.0 * remaining).min(90.0);
            let fraction = if hi > 5.0 {
                rng.random_range(5.0..hi)
            } else {
                5.0
            };
            fractions.push(fraction);
            sum += fraction;
        }
        fractions.push(100.0 - sum);

        MixtureGenome {
            components,
            fractions,
        }
    }

    /// Normalized price minus normalized weight; higher is better.
    pub fn fitness(&self, genome: &MixtureGenome) -> f64 {
        let mut weight = 0.0;
        let mut price = 0.0;
        for (&component, &fraction) in genome.components.iter().zip(&genome.fractions) {
            weight += self.catalog.atomic_weight(component) * fraction;
            price += self.catalog.price(component) * fraction;
        }
        price / self.catalog.max_price() - weight / self.catalog.max_weight()
    }

    /// Element mutation: with probability `individual_rate`, walk the
    /// genome and replace each component with a fresh catalog draw at
    /// probability `element_rate`. Fractions are untouched, so the sum
    /// invariant holds trivially.
    pub fn element_mutation<R: Rng>(
        &self,
        genome: &MixtureGenome,
        individual_rate: f64,
        element_rate: f64,
        rng: &mut R,
    ) -> MixtureGenome {
        let mut next = genome.clone();
        if rng.random::<f64>() < individual_rate {
            for component in &mut next.components {
                if rng.random::<f64>() < element_rate {
                    *component = rng.random_range(0..self.catalog.len());
                }
            }
        }
        next
    }

    /// Weight mutation: with probability `rate`, transfer mass between
    /// two distinct positions. The transfer is drawn uniformly from
    /// `[-bound, bound]` where `bound` is the largest magnitude keeping
    /// both fractions inside `[5, 90]`; being zero-sum it leaves the
    /// total at exactly 100. When `bound <= 0` (a fraction already above
    /// 90, possible only for a two-component genome's closing fraction)
    /// no transfer exists and the genome is returned unchanged.
    ///
    /// # Panics
    /// Panics on genomes with fewer than two fractions, which this
    /// problem never produces.
    pub fn weight_mutation<R: Rng>(
        &self,
        genome: &MixtureGenome,
        rate: f64,
        rng: &mut R,
    ) -> MixtureGenome {
        let mut next = genome.clone();
        if rng.random::<f64>() < rate {
            let picked = sample_indices(rng, next.fractions.len(), 2);
            let (i, j) = (picked[0], picked[1]);
            let bound = (90.0 - next.fractions[i])
                .min(90.0 - next.fractions[j])
                .min(next.fractions[i] - 5.0)
                .min(next.fractions[j] - 5.0);
            if bound > 0.0 {
                let transfer = rng.random_range(-bound..=bound);
                next.fractions[i] += transfer;
                next.fractions[j] -= transfer;
            }
        }
        next
    }

    /// Pair crossover: with probability `rate`, swap the whole fraction
    /// sequence of one parent onto the component sequence of the other.
    /// Fractions move verbatim, never recomputed, so both children keep
    /// the 100-unit sum.
    ///
    /// # Panics
    /// Panics if the parents' component counts differ; all genomes of
    /// one problem share a count.
    pub fn pair_crossover<R: Rng>(
        &self,
        parent1: &MixtureGenome,
        parent2: &MixtureGenome,
        rate: f64,
        rng: &mut R,
    ) -> (MixtureGenome, MixtureGenome) {
        if rng.random::<f64>() < rate {
            assert_eq!(
                parent1.len(),
                parent2.len(),
                "parents must have the same component count"
            );
            let child1 = MixtureGenome {
                components: parent1.components.clone(),
                fractions: parent2.fractions.clone(),
            };
            let child2 = MixtureGenome {
                components: parent2.components.clone(),
                fractions: parent1.fractions.clone(),
            };
            (child1, child2)
        } else {
            (parent1.clone(), parent2.clone())
        }
    }
}

impl Representation for MixtureProblem {
    type Genome = MixtureGenome;

    fn generate<R: Rng>(&self, rng: &mut R) -> MixtureGenome {
        MixtureProblem::generate(self, rng)
    }

    fn fitness(&self, genome: &MixtureGenome) -> f64 {
        MixtureProblem::fitness(self, genome)
    }

    fn mutate<R: Rng>(&self, genome: &MixtureGenome, rng: &mut R) -> MixtureGenome {
        let step = self.element_mutation(
            genome,
            self.individual_mutation_rate,
            self.element_mutation_rate,
            rng,
        );
        self.weight_mutation(&step, self.weight_mutation_rate, rng)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &MixtureGenome,
        parent2: &MixtureGenome,
        rng: &mut R,
    ) -> (MixtureGenome, MixtureGenome) {
        self.pair_crossover(parent1, parent2, self.crossover_rate, rng)
    }

    fn direction(&self) -> Direction {
        Direction::Maximize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    const SUM_TOL: f64 = 1e-6;

    fn problem(components: usize) -> MixtureProblem {
        MixtureProblem::new(Catalog::standard(), components).unwrap()
    }

    fn assert_valid(genome: &MixtureGenome, components: usize) {
        assert_eq!(genome.components.len(), components);
        assert_eq!(genome.fractions.len(), components);
        assert!(
            (genome.fraction_sum() - 100.0).abs() < SUM_TOL,
            "fractions sum to {}",
            genome.fraction_sum()
        );
        for &f in &genome.fractions[..components - 1] {
            assert!((5.0..=90.0).contains(&f), "fraction {f} out of [5, 90]");
        }
        assert!(*genome.fractions.last().unwrap() >= 5.0 - SUM_TOL);
    }

    #[test]
    fn test_generate_valid_across_sizes() {
        let mut rng = create_rng(42);
        for components in [2, 3, 5, 8, 12] {
            let problem = problem(components);
            for _ in 0..100 {
                let genome = problem.generate(&mut rng);
                assert_valid(&genome, components);
            }
        }
    }

    #[test]
    fn test_generate_distinct_components() {
        let mut rng = create_rng(42);
        let problem = problem(6);
        for _ in 0..50 {
            let genome = problem.generate(&mut rng);
            let mut sorted = genome.components.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 6);
        }
    }

    #[test]
    fn test_new_rejects_bad_component_counts() {
        let catalog = Catalog::standard();
        assert!(matches!(
            MixtureProblem::new(catalog.clone(), 1),
            Err(Error::InvalidComponentCount { requested: 1, .. })
        ));
        assert!(matches!(
            MixtureProblem::new(catalog, 93),
            Err(Error::InvalidComponentCount { requested: 93, .. })
        ));
    }

    #[test]
    fn test_fitness_maximum_price_blend() {
        let problem = problem(3);
        let catalog = problem.catalog();
        let genome = MixtureGenome {
            components: vec![
                catalog.index_of("Po").unwrap(),
                catalog.index_of("Ac").unwrap(),
                catalog.index_of("Bk").unwrap(),
            ],
            fractions: vec![90.0, 5.0, 5.0],
        };
        let mut price = 0.0;
        let mut weight = 0.0;
        for (&c, &f) in genome.components.iter().zip(&genome.fractions) {
            price += catalog.price(c) * f;
            weight += catalog.atomic_weight(c) * f;
        }
        // This genome is the price-normalization blend itself.
        assert!((price - catalog.max_price()).abs() < 1e-3);
        let expected = 1.0 - weight / catalog.max_weight();
        assert!((problem.fitness(&genome) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fitness_prefers_expensive_compounds() {
        let problem = problem(2);
        let catalog = problem.catalog();
        let cheap = MixtureGenome {
            components: vec![
                catalog.index_of("H").unwrap(),
                catalog.index_of("C").unwrap(),
            ],
            fractions: vec![50.0, 50.0],
        };
        let precious = MixtureGenome {
            components: vec![
                catalog.index_of("Po").unwrap(),
                catalog.index_of("Ac").unwrap(),
            ],
            fractions: vec![50.0, 50.0],
        };
        assert!(problem.fitness(&precious) > problem.fitness(&cheap));
    }

    #[test]
    fn test_element_mutation_rate_zero_is_noop() {
        let mut rng = create_rng(42);
        let problem = problem(4);
        let genome = problem.generate(&mut rng);
        let mutated = problem.element_mutation(&genome, 0.0, 1.0, &mut rng);
        assert_eq!(mutated, genome);
    }

    #[test]
    fn test_element_mutation_leaves_fractions() {
        let mut rng = create_rng(42);
        let problem = problem(4);
        let genome = problem.generate(&mut rng);
        let mutated = problem.element_mutation(&genome, 1.0, 1.0, &mut rng);
        assert_eq!(mutated.fractions, genome.fractions);
        assert!(mutated.components.iter().all(|&c| c < problem.catalog().len()));
    }

    #[test]
    fn test_weight_mutation_rate_zero_is_noop() {
        let mut rng = create_rng(42);
        let problem = problem(4);
        let genome = problem.generate(&mut rng);
        let mutated = problem.weight_mutation(&genome, 0.0, &mut rng);
        assert_eq!(mutated, genome);
    }

    #[test]
    fn test_weight_mutation_preserves_sum_and_bounds() {
        let mut rng = create_rng(42);
        let problem = problem(4);
        for _ in 0..200 {
            let genome = problem.generate(&mut rng);
            let mutated = problem.weight_mutation(&genome, 1.0, &mut rng);
            assert!((mutated.fraction_sum() - 100.0).abs() < SUM_TOL);
            for &f in &mutated.fractions {
                assert!((5.0 - SUM_TOL..=90.0 + SUM_TOL).contains(&f));
            }
            assert_eq!(mutated.components, genome.components);
        }
    }

    #[test]
    fn test_weight_mutation_skips_when_no_transfer_fits() {
        let mut rng = create_rng(42);
        let problem = problem(2);
        // Closing fraction above 90: any transfer would leave [5, 90].
        let genome = MixtureGenome {
            components: vec![0, 1],
            fractions: vec![6.0, 94.0],
        };
        let mutated = problem.weight_mutation(&genome, 1.0, &mut rng);
        assert_eq!(mutated.fractions, genome.fractions);
    }

    #[test]
    fn test_crossover_swaps_fraction_sequences() {
        let mut rng = create_rng(42);
        let problem = problem(3);
        let p1 = problem.generate(&mut rng);
        let p2 = problem.generate(&mut rng);
        let (c1, c2) = problem.pair_crossover(&p1, &p2, 1.0, &mut rng);
        assert_eq!(c1.components, p1.components);
        assert_eq!(c1.fractions, p2.fractions);
        assert_eq!(c2.components, p2.components);
        assert_eq!(c2.fractions, p1.fractions);
        assert!((c1.fraction_sum() - 100.0).abs() < SUM_TOL);
        assert!((c2.fraction_sum() - 100.0).abs() < SUM_TOL);
    }

    #[test]
    fn test_crossover_rate_zero_passes_through() {
        let mut rng = create_rng(42);
        let problem = problem(3);
        let p1 = problem.generate(&mut rng);
        let p2 = problem.generate(&mut rng);
        let (c1, c2) = problem.pair_crossover(&p1, &p2, 0.0, &mut rng);
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }

    #[test]
    fn test_representation_contract() {
        let mut rng = create_rng(42);
        let problem = problem(4)
            .with_element_rates(1.0, 0.5)
            .with_weight_mutation_rate(1.0)
            .with_crossover_rate(1.0);
        assert_eq!(Representation::direction(&problem), Direction::Maximize);

        let genome = Representation::generate(&problem, &mut rng);
        assert_valid(&genome, 4);

        let mutated = Representation::mutate(&problem, &genome, &mut rng);
        assert!((mutated.fraction_sum() - 100.0).abs() < SUM_TOL);

        let other = Representation::generate(&problem, &mut rng);
        let (c1, c2) = Representation::crossover(&problem, &genome, &other, &mut rng);
        assert!((c1.fraction_sum() - 100.0).abs() < SUM_TOL);
        assert!((c2.fraction_sum() - 100.0).abs() < SUM_TOL);

        assert!(Representation::fitness(&problem, &genome).is_finite());
    }
}
