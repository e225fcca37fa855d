// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use dp_polynomial::Polynomial;
use std::io::Write;

/// Renders results either in display form or in the text format (`--raw`).
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pub precision: usize,
    pub raw: bool,
}

impl Printer {
    pub fn render(&self, poly: &Polynomial) -> String {
        if self.raw {
            poly.to_text()
        } else {
            poly.to_string_with_precision(self.precision)
        }
    }

    pub fn polynomial(&self, out: &mut impl Write, poly: &Polynomial) -> Result<()> {
        writeln!(out, "{}", self.render(poly))?;
        Ok(())
    }

    pub fn labelled(&self, out: &mut impl Write, label: &str, poly: &Polynomial) -> Result<()> {
        if self.raw {
            // Raw output stays machine readable: one polynomial per line, no labels.
            return self.polynomial(out, poly);
        }
        writeln!(out, "{label}: {}", self.render(poly))?;
        Ok(())
    }

    pub fn value(&self, out: &mut impl Write, value: f64) -> Result<()> {
        if self.raw {
            writeln!(out, "{value}")?;
        } else {
            writeln!(out, "{value:.precision$}", precision = self.precision)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_modes() {
        let poly: Polynomial = "1 0.5 -2".parse().unwrap();

        let pretty = Printer {
            precision: 1,
            raw: false,
        };
        assert_eq!(pretty.render(&poly), "-2.0x^1 +0.5");

        let raw = Printer {
            precision: 1,
            raw: true,
        };
        assert_eq!(raw.render(&poly), "1 0.5 -2");

        let mut out = Vec::new();
        pretty.labelled(&mut out, "quotient", &poly).unwrap();
        raw.labelled(&mut out, "quotient", &poly).unwrap();
        pretty.value(&mut out, 1.0 / 3.0).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "quotient: -2.0x^1 +0.5\n1 0.5 -2\n0.3\n"
        );
    }
}
