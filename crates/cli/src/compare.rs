// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::operands::Operands;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Prints `true` or `false`. A zero tolerance means exact comparison.
pub fn eq<R: BufRead>(
    operands: &mut Operands<R>,
    out: &mut impl Write,
    lhs: &str,
    rhs: &str,
    tolerance: f64,
) -> Result<()> {
    let lhs = operands.parse(lhs)?;
    let rhs = operands.parse(rhs)?;

    let equal = if tolerance > 0.0 {
        lhs.approx_eq(&rhs, tolerance)
    } else {
        lhs == rhs
    };
    debug!(tolerance, equal, "compared polynomials");

    writeln!(out, "{equal}")?;
    Ok(())
}
