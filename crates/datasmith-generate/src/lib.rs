//! Deterministic synthetic-data generation engine for Datasmith.
//!
//! Given an ordered list of typed fields, a row count and a seed, the engine
//! produces a reproducible table of rows without touching the network.
//! Every value is a pure function of the base seed, the field id and the row
//! index, drawn through a [`SeededValues`] provider.

pub mod anchor;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod params;
pub mod provider;
pub mod references;
pub mod row;
pub mod seed;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use generators::{GeneratedValue, Generator, ResolvedGenerator};
pub use model::{DEFAULT_MAX_ROWS, GenerateOptions, GenerationReport};
pub use output::{ExportFormat, write_rows};
pub use provider::{FakerValues, SeededValues};
pub use row::Row;
pub use seed::{SeedContext, SeedKey};
