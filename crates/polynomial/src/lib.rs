// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! A dense univariate polynomial value type with `f64` coefficients.
//!
//! ## Features
//!
//! - Arithmetic: Addition, subtraction, negation, multiplication and scaling.
//! - Division: Polynomial long division with remainder, plus a truncating coefficient-wise quotient.
//! - Calculus: Formal derivative, antiderivative and definite integrals.
//! - Evaluation: Horner's method.
//! - Text format: `<degree> <c_0> ... <c_degree>` with read/write over any `BufRead`/`Write`.
//! - Serialization: Optional serde support for polynomial serialization with bincode integration.
//!
//! ## Representation
//!
//! Coefficients are stored in ascending order of degree, so `coefficients()[i]` is the
//! coefficient of `x^i`. Polynomials are dense: zero coefficients in the highest slots
//! still count toward the degree.
//!
//! ```
//! use dp_polynomial::Polynomial;
//!
//! let p: Polynomial = "2 1 2 3".parse().unwrap(); // 3x^2 + 2x + 1
//! let q = Polynomial::new(1, &[1.0, 1.0]).unwrap(); // x + 1
//!
//! assert_eq!(p.add(&q).coefficients(), &[2.0, 3.0, 3.0]);
//! assert_eq!(p.evaluate(2.0), 17.0);
//! assert_eq!(p.to_string(), "+3.00x^2 +2.00x^1 +1.00");
//! ```

pub mod codec;
mod errors;
pub mod polynomial;

pub use codec::Tokens;
pub use polynomial::{CoefficientQuotient, Polynomial, PolynomialError};
