//! Crate-wide error type.
//!
//! Errors here are *degenerate configuration* failures: a caller supplied
//! inputs that would silently change search behavior if clamped (an
//! oversized tournament, a zero selection weight, too many route cuts).
//! They are surfaced immediately instead of masked. Structural invariant
//! violations (a mixture not summing to 100, a duplicated city) cannot be
//! produced by the operators in this crate and are covered by property
//! tests rather than runtime checks.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure modes of the toolkit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Pairing-based crossover needs at least two genomes.
    #[error("population of {0} is too small for pairwise crossover (need at least 2)")]
    PopulationTooSmall(usize),

    /// `fitness` must have one entry per population member.
    #[error("fitness length {fitness} does not match population length {population}")]
    FitnessLengthMismatch { population: usize, fitness: usize },

    /// Tournament size must satisfy `1 <= k <= population length`.
    #[error("tournament size {k} is invalid for a population of {n}")]
    InvalidTournamentSize { k: usize, n: usize },

    /// A selection weight was negative, non-finite, or the total was zero.
    ///
    /// Covers the inverse-fitness transform applied to a fitness of
    /// exactly zero (`1/0`), which must fail rather than skew the wheel.
    #[error("invalid selection weight {weight} at index {index}")]
    InvalidWeight { index: usize, weight: f64 },

    /// Mixture genomes need between 2 components and the catalog size.
    #[error("mixture needs 2..={catalog} components, got {requested}")]
    InvalidComponentCount { requested: usize, catalog: usize },

    /// A catalog must carry at least 3 entries to define the
    /// price/weight normalization constants.
    #[error("catalog with {0} entries is too small (need at least 3)")]
    CatalogTooSmall(usize),

    /// Keyword length bounds must satisfy `1 <= min <= max`.
    #[error("invalid keyword size range [{min}, {max}]")]
    InvalidSizeRange { min: usize, max: usize },

    /// The target keyword may not be empty.
    #[error("target keyword is empty")]
    EmptyTarget,

    /// City tables need distinct coordinates and a positive count.
    #[error("cannot build city table: {0}")]
    InvalidCities(String),

    /// Requested more distinct cities than the coordinate grid holds.
    #[error("{count} distinct cities cannot fit in a {side}x{side} grid")]
    GridExhausted { count: usize, side: u64 },

    /// Route problems need at least three cities (two tour legs).
    #[error("route problem needs at least 3 cities, got {0}")]
    TooFewCities(usize),

    /// Vehicle count incompatible with the city count: partition
    /// mutation must be able to draw `vehicles - 1` distinct interior
    /// cut points, which requires at least `vehicles + 3` cities.
    #[error("{vehicles} vehicles do not fit {cities} cities")]
    TooManyVehicles { vehicles: usize, cities: usize },
}
