//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// Long division by the zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// Coefficient-wise division met zero divisors at the listed exponents
    #[error("Cannot divide by a zero coefficient at exponent(s) {exponents:?}")]
    ZeroCoefficientDivisor { exponents: Vec<usize> },

    /// Fewer coefficients than `degree + 1` were supplied
    #[error("A polynomial of degree {degree} needs {expected} coefficients, got {found}")]
    InsufficientCoefficients {
        degree: usize,
        expected: usize,
        found: usize,
    },

    /// A polynomial always has at least the constant slot
    #[error("Invalid polynomial: coefficient vector is empty")]
    EmptyCoefficients,

    /// The token stream ended before the polynomial was complete
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    #[error("Parse error: invalid degree '{token}'")]
    InvalidDegree { token: String },

    #[error("Parse error: invalid coefficient #{index} '{token}'")]
    InvalidCoefficient { index: usize, token: String },

    /// Extra tokens after a complete polynomial
    #[error("Parse error: unexpected trailing input '{token}'")]
    TrailingInput { token: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
