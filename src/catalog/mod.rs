//! Catalogue transforms.
//!
//! Pure functions over the loaded sheets:
//!
//! - [`position`] - raw position parsing, lenient and digit-only
//! - [`variant`] - SNP / MNP / indel classification and position expansion
//! - [`intervals`] - run-length compression of positions into BED intervals
//! - [`resistance`] - variant → drug aggregation keyed by position
//!
//! Nothing here touches the filesystem; see [`crate::pipeline`] for the run
//! that ties these to storage and writers.

pub mod intervals;
pub mod position;
pub mod resistance;
pub mod variant;

pub use intervals::compress_positions;
pub use position::{NormalizedRecord, Normalized, ParsedPosition, normalize, parse_digit_position, parse_position};
pub use resistance::{Resistance, VariantDrugMap, aggregate, is_resistance_grading};
pub use variant::{VariantKind, occupied_positions};
