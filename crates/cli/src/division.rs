// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::{operands::Operands, output::Printer};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::warn;

pub fn long<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    dividend: &str,
    divisor: &str,
) -> Result<()> {
    let dividend = operands.parse(dividend)?;
    let divisor = operands.parse(divisor)?;
    let (quotient, remainder) = dividend
        .div_rem(&divisor)
        .context("Polynomial division failed")?;

    printer.labelled(out, "quotient", &quotient)?;
    printer.labelled(out, "remainder", &remainder)
}

/// Prints the quotient even when some slots could not be divided, then fails.
pub fn coefficientwise<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    dividend: &str,
    divisor: &str,
) -> Result<()> {
    let dividend = operands.parse(dividend)?;
    let divisor = operands.parse(divisor)?;
    let result = dividend.div_coefficientwise(&divisor);

    printer.polynomial(out, result.quotient())?;
    if !result.is_complete() {
        warn!(
            exponents = ?result.zero_divisors(),
            "quotient is partial, zero divisor slots were left at 0"
        );
    }
    result
        .into_result()
        .context("Coefficient-wise division incomplete")?;
    Ok(())
}
