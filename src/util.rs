/// Numeric helpers.
///
/// Guards floating-point results so that an infinite or NaN value is
/// reported as an error instead of being returned.
pub mod num;
