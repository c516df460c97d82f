/// The result of evaluating an expression.
///
/// Integer inputs combined with `+`, `-` and `*` stay exact. Division always
/// yields a real, and a real operand turns every later result real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// Integers are rounded to the nearest representable `f64`, so every
    /// `i64` converts to a finite value.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Integer(10).to_real(), 10.0);
    /// assert_eq!(Number::Integer(9_007_199_254_740_993).to_real(), 9_007_199_254_740_992.0);
    /// assert_eq!(Number::Real(2.5).to_real(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_real(self) -> f64 {
        match self {
            Self::Real(r) => r,
            Self::Integer(n) => n as f64,
        }
    }

    /// Returns `true` if the number is an exact integer.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

/// Reals keep a fractional part when printed, so `6 / 2` shows as `3.0`.
impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
