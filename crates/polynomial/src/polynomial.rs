//! Polynomial arithmetic implementation.

pub use crate::errors::PolynomialError;
use itertools::{EitherOrBoth, Itertools};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dense univariate polynomial with `f64` coefficients in ascending order of degree.
///
/// The polynomial is represented as:
/// `c_0 + c_1 * x + ... + c_n * x^n`
///
/// where `coefficients[i]` holds `c_i`. The vector is never empty, so the degree is
/// always `coefficients.len() - 1`. High-order zero slots are kept: the degree of
/// `Polynomial::zero(3)` is 3.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<f64>", into = "Vec<f64>"))]
pub struct Polynomial {
    /// Coefficients in ascending order (constant term first).
    pub(crate) coefficients: Vec<f64>,
}

impl Clone for Polynomial {
    fn clone(&self) -> Self {
        Self {
            coefficients: self.coefficients.clone(),
        }
    }

    /// Reuses the existing allocation when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.coefficients.clone_from(&source.coefficients);
    }
}

impl fmt::Display for Polynomial {
    /// Formats every term from the highest exponent down, always signed with two
    /// decimals, e.g. `+3.00x^2 +2.00x^1 +1.00`. Zero terms are not skipped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_terms(f, 2)
    }
}

/// Result of [`Polynomial::div_coefficientwise`].
///
/// Zero divisors do not abort the division: their slots are left at `0.0` and the
/// offending exponents are recorded so the caller can decide what to do.
#[derive(Clone, Debug, PartialEq)]
pub struct CoefficientQuotient {
    quotient: Polynomial,
    zero_divisors: Vec<usize>,
}

impl CoefficientQuotient {
    /// The (possibly partial) quotient.
    pub fn quotient(&self) -> &Polynomial {
        &self.quotient
    }

    /// Exponents whose divisor coefficient was zero, in ascending order.
    pub fn zero_divisors(&self) -> &[usize] {
        &self.zero_divisors
    }

    /// Returns `true` if every shared exponent was divided.
    pub fn is_complete(&self) -> bool {
        self.zero_divisors.is_empty()
    }

    /// Returns the quotient, partial or not.
    pub fn into_quotient(self) -> Polynomial {
        self.quotient
    }

    /// Returns the quotient if complete.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::ZeroCoefficientDivisor` listing the zero divisor exponents.
    pub fn into_result(self) -> Result<Polynomial, PolynomialError> {
        if self.zero_divisors.is_empty() {
            Ok(self.quotient)
        } else {
            Err(PolynomialError::ZeroCoefficientDivisor {
                exponents: self.zero_divisors,
            })
        }
    }
}

impl Polynomial {
    /// Creates a polynomial of the given degree from the first `degree + 1` values.
    ///
    /// Extra values are ignored; the polynomial owns an independent copy.
    ///
    /// # Arguments
    ///
    /// * `degree` - The degree of the new polynomial.
    /// * `coefficients` - Coefficients in ascending order of degree.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InsufficientCoefficients` if fewer than `degree + 1`
    /// values are supplied.
    pub fn new(degree: usize, coefficients: &[f64]) -> Result<Self, PolynomialError> {
        let expected = degree.saturating_add(1);
        if coefficients.len() < expected {
            return Err(PolynomialError::InsufficientCoefficients {
                degree,
                expected,
                found: coefficients.len(),
            });
        }

        Ok(Self {
            coefficients: coefficients[..expected].to_vec(),
        })
    }

    /// Creates a polynomial that takes ownership of `coefficients`.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Coefficients in ascending order of degree.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::EmptyCoefficients` if the vector is empty.
    pub fn from_coefficients(coefficients: Vec<f64>) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }
        Ok(Self { coefficients })
    }

    /// Creates a zero polynomial of specified degree.
    ///
    /// # Arguments
    ///
    /// * `degree` - The degree of the zero polynomial.
    ///
    /// # Panics
    ///
    /// Panics if `degree` is `usize::MAX`, since `degree + 1` coefficients
    /// cannot be counted.
    pub fn zero(degree: usize) -> Self {
        let len = degree
            .checked_add(1)
            .expect("polynomial degree overflows the coefficient count");
        Self {
            coefficients: vec![0.0; len],
        }
    }

    /// Creates a constant polynomial.
    ///
    /// # Arguments
    ///
    /// * `constant` - The constant value.
    pub fn constant(constant: f64) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// Returns the coefficients of the polynomial, constant term first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the coefficient of `x^exponent`, or `None` past the degree.
    pub fn coefficient(&self, exponent: usize) -> Option<f64> {
        self.coefficients.get(exponent).copied()
    }

    /// Returns the degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the coefficient of the highest slot, which may be zero.
    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[self.degree()]
    }

    /// Returns the highest exponent with a non-zero coefficient, or `None` for the
    /// zero polynomial.
    pub fn effective_degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| *c != 0.0)
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0.0)
    }

    /// Removes zero coefficients above the effective degree. The constant slot is
    /// always kept.
    pub fn trim_leading_zeros(mut self) -> Self {
        let len = self.effective_degree().map_or(1, |d| d + 1);
        self.coefficients.truncate(len);
        self
    }

    /// Adds two polynomials together.
    ///
    /// The result has degree `max(self.degree(), other.degree())`. Terms beyond the
    /// shorter operand are taken from the longer one.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .zip_longest(&other.coefficients)
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a + b,
                EitherOrBoth::Left(a) => *a,
                EitherOrBoth::Right(b) => *b,
            })
            .collect();

        Polynomial { coefficients }
    }

    /// Subtracts one polynomial from another.
    ///
    /// Terms of `other` beyond the degree of `self` appear negated in the result.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to subtract from `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the difference.
    pub fn sub(&self, other: &Self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .zip_longest(&other.coefficients)
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a - b,
                EitherOrBoth::Left(a) => *a,
                EitherOrBoth::Right(b) => -b,
            })
            .collect();

        Polynomial { coefficients }
    }

    /// Negates all coefficients of the polynomial.
    ///
    /// # Returns
    ///
    /// A new polynomial with all coefficients negated.
    pub fn neg(&self) -> Self {
        Polynomial {
            coefficients: self.coefficients.iter().map(|x| -x).collect(),
        }
    }

    /// Multiplies two polynomials using the naive algorithm.
    ///
    /// The result has degree `self.degree() + other.degree()`, including when either
    /// operand is zero.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the product.
    pub fn mul(&self, other: &Self) -> Self {
        let product_len = self.coefficients.len() + other.coefficients.len() - 1;
        let mut product = vec![0.0; product_len];

        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                product[i + j] += a * b;
            }
        }

        Polynomial {
            coefficients: product,
        }
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    ///
    /// # Arguments
    ///
    /// * `scalar` - The factor applied to every coefficient.
    pub fn scale(&self, scalar: f64) -> Self {
        Polynomial {
            coefficients: self.coefficients.iter().map(|x| x * scalar).collect(),
        }
    }

    /// Divides coefficient by coefficient, truncating each quotient toward zero.
    ///
    /// This is not polynomial division, see [`Polynomial::div_rem`] for that. The
    /// result has degree `max(self.degree(), divisor.degree())`; exponents present in
    /// only one operand are copied from it unchanged. A zero divisor coefficient
    /// leaves its slot at `0.0` and is reported through
    /// [`CoefficientQuotient::zero_divisors`].
    ///
    /// # Arguments
    ///
    /// * `divisor` - A reference to the divisor polynomial.
    pub fn div_coefficientwise(&self, divisor: &Self) -> CoefficientQuotient {
        let mut zero_divisors = Vec::new();
        let coefficients = self
            .coefficients
            .iter()
            .zip_longest(&divisor.coefficients)
            .enumerate()
            .map(|(exponent, pair)| match pair {
                EitherOrBoth::Both(_, b) if *b == 0.0 => {
                    warn!(exponent, "cannot divide by a zero coefficient");
                    zero_divisors.push(exponent);
                    0.0
                }
                EitherOrBoth::Both(a, b) => (a / b).trunc(),
                EitherOrBoth::Left(a) => *a,
                EitherOrBoth::Right(b) => *b,
            })
            .collect();

        CoefficientQuotient {
            quotient: Polynomial { coefficients },
            zero_divisors,
        }
    }

    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// Performs long division so that `self = quotient * divisor + remainder`. Zero
    /// slots above the divisor's effective degree `m` are ignored. When
    /// `self.degree() >= m` the quotient has degree `self.degree() - m` and the
    /// remainder degree `m - 1` (degree 0 for a constant divisor); otherwise the
    /// quotient is zero and the remainder is `self`.
    ///
    /// # Arguments
    ///
    /// * `divisor` - A reference to the divisor polynomial.
    ///
    /// # Returns
    ///
    /// A result containing a tuple of (quotient, remainder) or an error.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolynomialError> {
        let Some(m) = divisor.effective_degree() else {
            return Err(PolynomialError::DivisionByZero);
        };

        let n = self.degree();
        if n < m {
            return Ok((Polynomial::zero(0), self.clone()));
        }

        let lead = divisor.coefficients[m];
        let mut quotient = vec![0.0; n - m + 1];
        let mut remainder = self.coefficients.clone();

        for k in (0..=n - m).rev() {
            let coeff = remainder[k + m] / lead;
            quotient[k] = coeff;

            for (j, d) in divisor.coefficients[..m].iter().enumerate() {
                remainder[k + j] -= coeff * d;
            }
            // Rounding can leave a residue in the eliminated slot.
            remainder[k + m] = 0.0;
        }

        remainder.truncate(m.max(1));
        debug!(
            dividend_degree = n,
            divisor_degree = m,
            "long division finished"
        );

        Ok((
            Polynomial {
                coefficients: quotient,
            },
            Polynomial {
                coefficients: remainder,
            },
        ))
    }

    /// Returns the formal derivative.
    ///
    /// The derivative of a constant is the zero polynomial of degree 0.
    pub fn derive(&self) -> Self {
        if self.degree() == 0 {
            return Polynomial::zero(0);
        }

        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * i as f64)
            .collect();

        Polynomial { coefficients }
    }

    /// Returns the antiderivative with a zero constant of integration.
    pub fn antiderivative(&self) -> Self {
        let coefficients = std::iter::once(0.0)
            .chain(
                self.coefficients
                    .iter()
                    .enumerate()
                    .map(|(i, c)| c / (i + 1) as f64),
            )
            .collect();

        Polynomial { coefficients }
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    ///
    /// # Returns
    ///
    /// The value of the polynomial at the given point.
    pub fn evaluate(&self, x: f64) -> f64 {
        // Seeding with the leading term keeps `0 * inf` out of the fold.
        let mut terms = self.coefficients.iter().rev();
        let leading = terms.next().copied().unwrap_or(0.0);
        terms.fold(leading, |acc, coeff| acc * x + coeff)
    }

    /// Returns the definite integral over `[start, end]`.
    ///
    /// Swapping the bounds negates the result.
    pub fn integrate(&self, start: f64, end: f64) -> f64 {
        let antiderivative = self.antiderivative();
        antiderivative.evaluate(end) - antiderivative.evaluate(start)
    }

    /// Compares with a per-coefficient absolute tolerance.
    ///
    /// Like `==`, polynomials of different degree are never equal.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.coefficients.len() == other.coefficients.len()
            && self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Same layout as `Display` with `precision` decimals per coefficient.
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_terms(&mut out, precision);
        out
    }

    fn write_terms<W: fmt::Write>(&self, f: &mut W, precision: usize) -> fmt::Result {
        for (i, coeff) in self.coefficients.iter().enumerate().skip(1).rev() {
            write!(f, "{coeff:+.precision$}x^{i} ")?;
        }
        write!(f, "{:+.precision$}", self.coefficients[0])
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = PolynomialError;

    fn try_from(coefficients: Vec<f64>) -> Result<Self, Self::Error> {
        Polynomial::from_coefficients(coefficients)
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(poly: Polynomial) -> Self {
        poly.coefficients
    }
}

// Operators are only provided on references so `p.add(&q)` keeps resolving to the
// borrowing inherent methods above.
impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Polynomial {
        Polynomial::sub(self, rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        Polynomial::mul(self, rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}
