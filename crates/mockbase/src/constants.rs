//! Constants for reserved field names and defaults used throughout Mockbase.

/// Name of the reserved identifier field carried by every record.
pub const ID_FIELD: &str = "id";

/// Default path of the backing JSON document.
pub const DEFAULT_DATA_FILE: &str = "./data.json";

/// Identifier assigned to the first record of an empty or absent collection.
pub const FIRST_RECORD_ID: f64 = 1.0;

/// Largest integer an `f64` represents exactly (2^53). Integral identifiers up to
/// this bound are written back as JSON integers.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;
