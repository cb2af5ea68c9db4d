//! Multi-vehicle routing representation: partitioned-permutation
//! genome, summed route fitness, and genetic operators.

use crate::cities::{CityTable, DEPOT};
use crate::error::{Error, Result};
use crate::operators::{ordered_crossover, swap_two};
use crate::random::sample_indices;
use crate::selection::Direction;
use crate::types::Representation;
use rand::seq::SliceRandom;
use rand::Rng;

/// A routing plan: one non-empty city sequence per vehicle, jointly a
/// permutation of `1..=n-1`. Every route starts and ends its leg at the
/// depot.
pub type MultiRouteGenome = Vec<Vec<usize>>;

/// The multi-vehicle routing problem.
#[derive(Debug, Clone)]
pub struct VrpProblem {
    cities: CityTable,
    vehicles: usize,
    individual_mutation_rate: f64,
    route_mutation_rate: f64,
    partition_mutation_rate: f64,
    crossover_rate: f64,
}

impl VrpProblem {
    /// Creates a problem over `cities` with `vehicles` routes per genome.
    ///
    /// # Errors
    /// [`Error::TooManyVehicles`] unless `vehicles >= 1` and
    /// `cities.len() >= vehicles + 3`: partition mutation redraws
    /// `vehicles - 1` distinct cut points from the flat genome's open
    /// interior `1..len-2`, and that domain must be large enough. The
    /// bound also covers the generator's wider cut domain and the
    /// crossover's minimum slice span.
    pub fn new(cities: CityTable, vehicles: usize) -> Result<Self> {
        if vehicles == 0 || cities.len() < vehicles + 3 {
            return Err(Error::TooManyVehicles {
                vehicles,
                cities: cities.len(),
            });
        }
        Ok(Self {
            cities,
            vehicles,
            individual_mutation_rate: 0.05,
            route_mutation_rate: 0.25,
            partition_mutation_rate: 0.05,
            crossover_rate: 0.5,
        })
    }

    /// Sets the rates used by the [`Representation`] impl: the
    /// whole-genome gate and the per-route gate of switch mutation.
    pub fn with_switch_rates(mut self, individual: f64, route: f64) -> Self {
        self.individual_mutation_rate = individual;
        self.route_mutation_rate = route;
        self
    }

    /// Sets the partition-mutation rate used by the [`Representation`]
    /// impl.
    pub fn with_partition_mutation_rate(mut self, rate: f64) -> Self {
        self.partition_mutation_rate = rate;
        self
    }

    /// Sets the crossover rate used by the [`Representation`] impl.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// The problem's city table.
    pub fn cities(&self) -> &CityTable {
        &self.cities
    }

    /// Number of vehicles (routes per genome).
    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    /// Builds a random genome: a shuffled flat permutation of `1..=n-1`
    /// cut at `vehicles - 1` distinct interior points.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> MultiRouteGenome {
        let mut flat: Vec<usize> = (1..self.cities.len()).collect();
        flat.shuffle(rng);

        // Cuts from 1..=len-1; distinct cuts keep every segment non-empty.
        let mut cuts: Vec<usize> = sample_indices(rng, flat.len() - 1, self.vehicles - 1)
            .into_iter()
            .map(|c| c + 1)
            .collect();
        cuts.sort_unstable();
        split_at_cuts(&flat, &cuts)
    }

    /// Sum over routes of the depot-closed leg length. Lower is better;
    /// no even-city penalty applies here.
    ///
    /// # Panics
    /// Panics if a route is empty or references a city outside the
    /// table; genomes produced by this problem satisfy both.
    pub fn fitness(&self, genome: &MultiRouteGenome) -> f64 {
        let mut total = 0.0;
        for route in genome {
            total += self.cities.distance(DEPOT, route[0])
                + self.cities.distance(route[route.len() - 1], DEPOT);
            for leg in route.windows(2) {
                total += self.cities.distance(leg[0], leg[1]);
            }
        }
        total
    }

    /// Switch mutation: with probability `individual_rate`, visit every
    /// route and, at probability `route_rate` each, swap two positions
    /// inside that route only. Route boundaries never move.
    pub fn switch_mutation<R: Rng>(
        &self,
        genome: &MultiRouteGenome,
        individual_rate: f64,
        route_rate: f64,
        rng: &mut R,
    ) -> MultiRouteGenome {
        let mut next = genome.clone();
        if rng.random::<f64>() < individual_rate {
            for route in &mut next {
                if rng.random::<f64>() < route_rate {
                    swap_two(route, rng);
                }
            }
        }
        next
    }

    /// Partition mutation: with probability `rate`, keep the flattened
    /// city order but redraw the route boundaries — `vehicles - 1`
    /// distinct cuts from the narrower interior `1..len-2`, sorted.
    pub fn partition_mutation<R: Rng>(
        &self,
        genome: &MultiRouteGenome,
        rate: f64,
        rng: &mut R,
    ) -> MultiRouteGenome {
        if rng.random::<f64>() < rate {
            let (flat, _) = flatten(genome);
            let mut cuts: Vec<usize> = sample_indices(rng, flat.len() - 3, self.vehicles - 1)
                .into_iter()
                .map(|c| c + 1)
                .collect();
            cuts.sort_unstable();
            split_at_cuts(&flat, &cuts)
        } else {
            genome.clone()
        }
    }

    /// Ordered crossover: with probability `rate`, flatten both parents,
    /// recombine the flat permutations via [`ordered_crossover`], and
    /// cut each child back at its own parent's original route
    /// boundaries, so each child inherits its parent's route lengths.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &MultiRouteGenome,
        parent2: &MultiRouteGenome,
        rate: f64,
        rng: &mut R,
    ) -> (MultiRouteGenome, MultiRouteGenome) {
        if rng.random::<f64>() < rate {
            let (flat1, cuts1) = flatten(parent1);
            let (flat2, cuts2) = flatten(parent2);
            let (child1, child2) = ordered_crossover(&flat1, &flat2, rng);
            (split_at_cuts(&child1, &cuts1), split_at_cuts(&child2, &cuts2))
        } else {
            (parent1.clone(), parent2.clone())
        }
    }
}

/// Concatenates the routes and records the interior cut positions
/// (cumulative route lengths, final boundary omitted).
fn flatten(genome: &MultiRouteGenome) -> (Vec<usize>, Vec<usize>) {
    let mut flat = Vec::new();
    let mut cuts = Vec::with_capacity(genome.len().saturating_sub(1));
    for route in &genome[..genome.len() - 1] {
        flat.extend_from_slice(route);
        cuts.push(flat.len());
    }
    flat.extend_from_slice(&genome[genome.len() - 1]);
    (flat, cuts)
}

/// Splits `flat` at the strictly increasing interior `cuts`: segments
/// `[0, c₀)`, `[cᵢ₋₁, cᵢ)`, and `[c_last, len)`.
fn split_at_cuts(flat: &[usize], cuts: &[usize]) -> MultiRouteGenome {
    let mut routes = Vec::with_capacity(cuts.len() + 1);
    let mut previous = 0;
    for &cut in cuts {
        routes.push(flat[previous..cut].to_vec());
        previous = cut;
    }
    routes.push(flat[previous..].to_vec());
    routes
}

impl Representation for VrpProblem {
    type Genome = MultiRouteGenome;

    fn generate<R: Rng>(&self, rng: &mut R) -> MultiRouteGenome {
        VrpProblem::generate(self, rng)
    }

    fn fitness(&self, genome: &MultiRouteGenome) -> f64 {
        VrpProblem::fitness(self, genome)
    }

    fn mutate<R: Rng>(&self, genome: &MultiRouteGenome, rng: &mut R) -> MultiRouteGenome {
        let step = self.switch_mutation(
            genome,
            self.individual_mutation_rate,
            self.route_mutation_rate,
            rng,
        );
        self.partition_mutation(&step, self.partition_mutation_rate, rng)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &MultiRouteGenome,
        parent2: &MultiRouteGenome,
        rng: &mut R,
    ) -> (MultiRouteGenome, MultiRouteGenome) {
        VrpProblem::crossover(self, parent1, parent2, self.crossover_rate, rng)
    }

    fn direction(&self) -> Direction {
        Direction::Minimize
    }
}
