//! Hard caps enforced by the parser and tree API.

/// Maximum nesting depth of combined objects/arrays a parse will accept.
pub const MAX_NESTING: u32 = 19;

/// Maximum number of elements a single array may hold.
pub const ARRAY_MAX_CAPACITY: usize = 122_880;

/// Maximum number of entries a single object may hold.
pub const OBJECT_MAX_CAPACITY: usize = 960;

/// Absolute difference below which two `Number` values are considered equal.
pub const NUMBER_EPSILON: f64 = 1e-6;
