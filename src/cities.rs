//! Problem-instance city tables for the routing representations.
//!
//! A [`CityTable`] is an ordered list of distinct integer coordinates.
//! Index 0 is the depot: the fixed start and end of every tour leg, never
//! part of a genome. The table is built once per problem instance and
//! read-only afterwards.

use crate::error::{Error, Result};
use rand::Rng;
use std::collections::HashSet;

/// Index of the implicit depot city.
pub const DEPOT: usize = 0;

/// Distinct integer city coordinates; index 0 is the depot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityTable {
    coords: Vec<(i64, i64)>,
}

impl CityTable {
    /// Builds a table from explicit coordinates.
    ///
    /// # Errors
    /// [`Error::InvalidCities`] on an empty list or duplicate coordinates.
    pub fn from_coords(coords: Vec<(i64, i64)>) -> Result<Self> {
        if coords.is_empty() {
            return Err(Error::InvalidCities("no cities given".into()));
        }
        let distinct: HashSet<(i64, i64)> = coords.iter().copied().collect();
        if distinct.len() != coords.len() {
            return Err(Error::InvalidCities("duplicate city coordinates".into()));
        }
        Ok(Self { coords })
    }

    /// Generates `count` distinct cities by rejection sampling of integer
    /// coordinate pairs in `[0, max_coordinate]²`.
    ///
    /// # Errors
    /// [`Error::InvalidCities`] for `count == 0`;
    /// [`Error::GridExhausted`] when the grid cannot hold `count`
    /// distinct points (the sampling loop would never terminate).
    pub fn generate<R: Rng>(count: usize, max_coordinate: u32, rng: &mut R) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidCities("no cities requested".into()));
        }
        let side = u64::from(max_coordinate) + 1;
        if (count as u64) > side.saturating_mul(side) {
            return Err(Error::GridExhausted { count, side });
        }

        let mut coords = Vec::with_capacity(count);
        let mut seen = HashSet::with_capacity(count);
        while coords.len() < count {
            let city = (
                i64::from(rng.random_range(0..=max_coordinate)),
                i64::from(rng.random_range(0..=max_coordinate)),
            );
            if seen.insert(city) {
                coords.push(city);
            }
        }
        Ok(Self { coords })
    }

    /// Number of cities, including the depot.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// `true` when the table holds no cities. Never observable through
    /// the constructors, which reject empty tables.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates of city `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn coord(&self, index: usize) -> (i64, i64) {
        self.coords[index]
    }

    /// Euclidean distance between cities `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        let (ax, ay) = self.coords[a];
        let (bx, by) = self.coords[b];
        let dx = (ax - bx) as f64;
        let dy = (ay - by) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}
