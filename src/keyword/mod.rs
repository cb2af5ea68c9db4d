//! Keyword-recovery representation.
//!
//! Searches for a hidden string over letters and digits. Genomes are
//! variable-length character sequences; fitness counts positional
//! mismatches plus the length error, so both content and size evolve.
//!
//! # Key Types
//!
//! - [`KeywordProblem`]: target string, size bounds, operators, and the
//!   [`crate::types::Representation`] impl
//! - [`KeywordGenome`]: the character-sequence genome
//! - [`ALPHABET`] / [`random_gene`]: the gene pool

mod problem;

pub use problem::{random_gene, KeywordGenome, KeywordProblem, ALPHABET};
