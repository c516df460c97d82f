/// Core evaluation definitions.
///
/// Holds the result type shared by every evaluation routine.
pub mod core;

/// Binary operator evaluation.
///
/// Combines two numbers with one of the four arithmetic operators, checking
/// for overflow and division by zero.
pub mod scalar;
