/// Numeric value representation.
///
/// Defines the `Number` type produced by evaluation: an exact integer for
/// expressions without division, or a real once a `/` has been applied.
pub mod core;
