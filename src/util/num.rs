/// Accepts a floating-point result only if it is finite.
///
/// ## Errors
/// Returns `Err(error)` for infinities and NaN.
///
/// ## Example
/// ```
/// use calc::util::num::finite_or;
///
/// assert_eq!(finite_or(1.5, ()), Ok(1.5));
/// assert_eq!(finite_or(f64::INFINITY, ()), Err(()));
/// assert_eq!(finite_or(f64::NAN, "nan"), Err("nan"));
/// ```
pub fn finite_or<E>(value: f64, error: E) -> Result<f64, E> {
    if value.is_finite() { Ok(value) } else { Err(error) }
}
