//! Travelling-salesman representation: tour genome, depot-closed
//! fitness, and genetic operators.

use crate::cities::{CityTable, DEPOT};
use crate::error::{Error, Result};
use crate::operators::{ordered_crossover, swap_two};
use crate::selection::Direction;
use crate::types::Representation;
use rand::seq::SliceRandom;
use rand::Rng;

/// A tour: permutation of city indices `1..=n-1`, depot excluded.
pub type TourGenome = Vec<usize>;

/// The travelling-salesman problem with an even-city ordering penalty.
#[derive(Debug, Clone)]
pub struct TspProblem {
    cities: CityTable,
    penalty: f64,
    switch_mutation_rate: f64,
    crossover_rate: f64,
}

impl TspProblem {
    /// Creates a problem over `cities`.
    ///
    /// # Errors
    /// [`Error::TooFewCities`] for fewer than 3 cities — tours need at
    /// least two stops for the crossover slice to exist.
    pub fn new(cities: CityTable) -> Result<Self> {
        if cities.len() < 3 {
            return Err(Error::TooFewCities(cities.len()));
        }
        Ok(Self {
            cities,
            penalty: 1.0,
            switch_mutation_rate: 0.05,
            crossover_rate: 0.5,
        })
    }

    /// Sets the per-position charge for even city indices scheduled in
    /// the first half of the tour. Exactly `0.0` disables the penalty
    /// scan entirely.
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Sets the switch-mutation rate used by the [`Representation`] impl.
    pub fn with_switch_mutation_rate(mut self, rate: f64) -> Self {
        self.switch_mutation_rate = rate;
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

    /// Builds a random tour: a shuffled permutation of `1..=n-1`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> TourGenome {
        let mut tour: Vec<usize> = (1..self.cities.len()).collect();
        tour.shuffle(rng);
        tour
    }

    /// Cycle length through the depot, the tour, and back, plus
    /// `penalty` for every even city index among the first
    /// `city_count / 2` tour positions (a scheduling constraint of the
    /// problem, not a geometric term). Lower is better.
    ///
    /// # Panics
    /// Panics if the tour references a city outside the table.
    pub fn fitness(&self, tour: &[usize]) -> f64 {
        let mut total = self.cities.distance(DEPOT, tour[0])
            + self.cities.distance(tour[tour.len() - 1], DEPOT);
        for leg in tour.windows(2) {
            total += self.cities.distance(leg[0], leg[1]);
        }

        if self.penalty != 0.0 {
            let half = self.cities.len() / 2;
            for &city in &tour[..half] {
                if city % 2 == 0 {
                    total += self.penalty;
                }
            }
        }
        total
    }

    /// Switch mutation: with probability `rate`, swap two independently
    /// drawn tour positions.
    pub fn switch_mutation<R: Rng>(&self, tour: &[usize], rate: f64, rng: &mut R) -> TourGenome {
        let mut next = tour.to_vec();
        if rng.random::<f64>() < rate {
            swap_two(&mut next, rng);
        }
        next
    }

    /// Ordered crossover: with probability `rate`, recombine via
    /// [`ordered_crossover`] — a contiguous slice of each parent plus
    /// the other parent's remaining cities in their original order.
    /// Both children stay permutations of the city domain.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        rate: f64,
        rng: &mut R,
    ) -> (TourGenome, TourGenome) {
        if rng.random::<f64>() < rate {
            ordered_crossover(parent1, parent2, rng)
        } else {
            (parent1.to_vec(), parent2.to_vec())
        }
    }
}

impl Representation for TspProblem {
    type Genome = TourGenome;

    fn generate<R: Rng>(&self, rng: &mut R) -> TourGenome {
        TspProblem::generate(self, rng)
    }

    fn fitness(&self, genome: &TourGenome) -> f64 {
        TspProblem::fitness(self, genome)
    }

    fn mutate<R: Rng>(&self, genome: &TourGenome, rng: &mut R) -> TourGenome {
        self.switch_mutation(genome, self.switch_mutation_rate, rng)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &TourGenome,
        parent2: &TourGenome,
        rng: &mut R,
    ) -> (TourGenome, TourGenome) {
        TspProblem::crossover(self, parent1, parent2, self.crossover_rate, rng)
    }

    fn direction(&self) -> Direction {
        Direction::Minimize
    }
}
