// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use dp_polynomial::{Polynomial, Tokens};
use std::io::BufRead;
use tracing::trace;

/// The operand name that reads the next polynomial from the input stream.
pub const STDIN_OPERAND: &str = "-";

/// Turns command line operands into polynomials.
///
/// Operands are either inline text (`"2 1 2 3"`) or `-`, which takes the next
/// polynomial from the shared input stream so several `-` operands read in order.
pub struct Operands<R> {
    input: Tokens<R>,
}

impl<R: BufRead> Operands<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: Tokens::new(input),
        }
    }

    pub fn parse(&mut self, operand: &str) -> Result<Polynomial> {
        let poly = if operand == STDIN_OPERAND {
            Polynomial::read_from(&mut self.input)
                .context("Could not read polynomial from input")?
        } else {
            operand
                .parse::<Polynomial>()
                .with_context(|| format!("Invalid polynomial '{operand}'"))?
        };
        trace!(degree = poly.degree(), "parsed operand");
        Ok(poly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_and_stream_operands() {
        let mut operands = Operands::new("1 4 9\n0 2".as_bytes());

        let inline = operands.parse("2 1 2 3").unwrap();
        assert_eq!(inline.coefficients(), &[1.0, 2.0, 3.0]);

        let first = operands.parse(STDIN_OPERAND).unwrap();
        let second = operands.parse(STDIN_OPERAND).unwrap();
        assert_eq!(first.coefficients(), &[4.0, 9.0]);
        assert_eq!(second.coefficients(), &[2.0]);

        assert!(operands.parse(STDIN_OPERAND).is_err());
    }

    #[test]
    fn test_invalid_operand_reports_text() {
        let mut operands = Operands::new(std::io::empty());
        let err = operands.parse("2 1 x 3").unwrap_err();
        assert!(err.to_string().contains("2 1 x 3"));
    }
}
