// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Whitespace-delimited text format.
//!
//! A polynomial is written as its degree followed by every coefficient from
//! the constant term upwards:
//!
//! ```text
//! <degree> <c_0> <c_1> ... <c_degree>
//! ```
//!
//! Tokens may be spread over any number of lines, and several polynomials can
//! follow one another in the same stream.

use crate::errors::PolynomialError;
use crate::polynomial::Polynomial;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::trace;

/// Splits a buffered reader into whitespace-separated tokens, one line at a time.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>, PolynomialError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn expect_token(&mut self, expected: impl Into<String>) -> Result<String, PolynomialError> {
        self.next_token()?
            .ok_or_else(|| PolynomialError::UnexpectedEndOfInput {
                expected: expected.into(),
            })
    }

    /// Gives back the underlying reader. Tokens already split off the current
    /// line are dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<'a> Tokens<&'a [u8]> {
    /// Tokenizes an in-memory string.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl Polynomial {
    /// Writes the polynomial in the text format.
    ///
    /// Coefficients use Rust's shortest round-trip float formatting, so reading
    /// the output back yields bit-identical coefficients.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::IoError` if the sink fails.
    pub fn write<W: Write>(&self, output: &mut W) -> Result<(), PolynomialError> {
        write!(output, "{}", self.degree())?;
        for coeff in &self.coefficients {
            write!(output, " {coeff}")?;
        }
        Ok(())
    }

    /// Returns the text format as a `String`.
    pub fn to_text(&self) -> String {
        let mut text = self.degree().to_string();
        for coeff in &self.coefficients {
            text.push(' ');
            text.push_str(&coeff.to_string());
        }
        text
    }

    /// Reads a polynomial from `input` into `self`.
    ///
    /// The whole polynomial is parsed before `self` is touched: on any error
    /// `self` keeps its previous degree and coefficients. When the parsed
    /// degree matches the current one the existing buffer is reused.
    ///
    /// # Errors
    ///
    /// * `PolynomialError::UnexpectedEndOfInput` if the stream ends early.
    /// * `PolynomialError::InvalidDegree` / `InvalidCoefficient` on a bad token.
    /// * `PolynomialError::IoError` if the reader fails.
    pub fn read<R: BufRead>(&mut self, input: &mut Tokens<R>) -> Result<(), PolynomialError> {
        let parsed = Self::read_coefficients(input)?;

        if parsed.len() == self.coefficients.len() {
            self.coefficients.copy_from_slice(&parsed);
        } else {
            self.coefficients = parsed;
        }
        Ok(())
    }

    /// Reads the next polynomial from `input`.
    pub fn read_from<R: BufRead>(input: &mut Tokens<R>) -> Result<Self, PolynomialError> {
        let coefficients = Self::read_coefficients(input)?;
        Ok(Self { coefficients })
    }

    fn read_coefficients<R: BufRead>(input: &mut Tokens<R>) -> Result<Vec<f64>, PolynomialError> {
        let token = input.expect_token("degree")?;
        let degree: usize = token
            .parse()
            .map_err(|_| PolynomialError::InvalidDegree {
                token: token.clone(),
            })?;
        trace!(degree, "reading polynomial");

        // The declared degree is untrusted until its tokens have been read.
        let mut coefficients = Vec::with_capacity(degree.saturating_add(1).min(1024));
        for index in 0..=degree {
            let token = input.expect_token(format!("coefficient #{index}"))?;
            let coeff: f64 = token
                .parse()
                .map_err(|_| PolynomialError::InvalidCoefficient { index, token })?;
            coefficients.push(coeff);
        }

        Ok(coefficients)
    }
}

impl FromStr for Polynomial {
    type Err = PolynomialError;

    /// Parses exactly one polynomial; trailing tokens are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::from_text(s);
        let poly = Self::read_from(&mut tokens)?;
        match tokens.next_token()? {
            Some(token) => Err(PolynomialError::TrailingInput { token }),
            None => Ok(poly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_format() {
        let poly = Polynomial::from_coefficients(vec![1.0, -2.5, 3.0]).unwrap();
        let mut out = Vec::new();
        poly.write(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2 1 -2.5 3");
        assert_eq!(poly.to_text(), "2 1 -2.5 3");
    }

    #[test]
    fn test_write_then_read_is_exact() {
        let poly = Polynomial::from_coefficients(vec![0.1, -1.0 / 3.0, 1e-300, 6.02e23]).unwrap();
        let mut out = Vec::new();
        poly.write(&mut out).unwrap();

        let mut tokens = Tokens::new(Cursor::new(out));
        let mut fresh = Polynomial::zero(0);
        fresh.read(&mut tokens).unwrap();
        assert_eq!(fresh, poly);
    }

    #[test]
    fn test_read_tokens_across_lines() {
        let mut tokens = Tokens::from_text("2\n 1.5\n\n -2 \t 3\n");
        let poly = Polynomial::read_from(&mut tokens).unwrap();
        assert_eq!(poly.coefficients(), &[1.5, -2.0, 3.0]);
    }

    #[test]
    fn test_read_sequence_from_one_stream() {
        let mut tokens = Tokens::from_text("1 4 9 0 7\n2 1 2 3");
        let first = Polynomial::read_from(&mut tokens).unwrap();
        let second = Polynomial::read_from(&mut tokens).unwrap();
        let third = Polynomial::read_from(&mut tokens).unwrap();
        assert_eq!(first.coefficients(), &[4.0, 9.0]);
        assert_eq!(second.coefficients(), &[7.0]);
        assert_eq!(third.coefficients(), &[1.0, 2.0, 3.0]);
        assert!(tokens.next_token().unwrap().is_none());
    }

    #[test]
    fn test_read_same_degree_reuses_buffer() {
        let mut poly = Polynomial::from_coefficients(vec![1.0, 1.0, 1.0]).unwrap();
        let before = poly.coefficients().as_ptr();
        poly.read(&mut Tokens::from_text("2 5 6 7")).unwrap();
        assert_eq!(poly.coefficients(), &[5.0, 6.0, 7.0]);
        assert_eq!(poly.coefficients().as_ptr(), before);
    }

    #[test]
    fn test_read_different_degree_replaces() {
        let mut poly = Polynomial::zero(4);
        poly.read(&mut Tokens::from_text("1 8 9")).unwrap();
        assert_eq!(poly.degree(), 1);
        assert_eq!(poly.coefficients(), &[8.0, 9.0]);
    }

    #[test]
    fn test_read_failure_leaves_target_unchanged() {
        let original = Polynomial::from_coefficients(vec![1.0, 2.0]).unwrap();

        let mut poly = original.clone();
        let err = poly.read(&mut Tokens::from_text("3 1 2 oops 4")).unwrap_err();
        assert!(matches!(
            err,
            PolynomialError::InvalidCoefficient { index: 2, ref token } if token == "oops"
        ));
        assert_eq!(poly, original);

        let err = poly.read(&mut Tokens::from_text("2 1 2")).unwrap_err();
        assert!(matches!(err, PolynomialError::UnexpectedEndOfInput { .. }));
        assert_eq!(poly, original);

        let err = poly.read(&mut Tokens::from_text("-1 2")).unwrap_err();
        assert!(matches!(err, PolynomialError::InvalidDegree { .. }));
        assert_eq!(poly, original);

        let err = poly.read(&mut Tokens::from_text("")).unwrap_err();
        assert!(matches!(err, PolynomialError::UnexpectedEndOfInput { .. }));
        assert_eq!(poly, original);
    }

    #[test]
    fn test_from_str() {
        let poly: Polynomial = "2 1 2 3".parse().unwrap();
        assert_eq!(poly.coefficients(), &[1.0, 2.0, 3.0]);

        let err = "1 1 2 3".parse::<Polynomial>().unwrap_err();
        assert!(matches!(err, PolynomialError::TrailingInput { ref token } if token == "3"));
    }
}
