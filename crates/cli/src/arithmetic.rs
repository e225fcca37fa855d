// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::{operands::Operands, output::Printer};
use anyhow::Result;
use std::io::{BufRead, Write};

pub fn show<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    poly: &str,
) -> Result<()> {
    let poly = operands.parse(poly)?;
    printer.polynomial(out, &poly)
}

pub fn add<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    lhs: &str,
    rhs: &str,
) -> Result<()> {
    let lhs = operands.parse(lhs)?;
    let rhs = operands.parse(rhs)?;
    printer.polynomial(out, &lhs.add(&rhs))
}

pub fn sub<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    lhs: &str,
    rhs: &str,
) -> Result<()> {
    let lhs = operands.parse(lhs)?;
    let rhs = operands.parse(rhs)?;
    printer.polynomial(out, &lhs.sub(&rhs))
}

pub fn neg<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    poly: &str,
) -> Result<()> {
    let poly = operands.parse(poly)?;
    printer.polynomial(out, &poly.neg())
}

pub fn mul<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    lhs: &str,
    rhs: &str,
) -> Result<()> {
    let lhs = operands.parse(lhs)?;
    let rhs = operands.parse(rhs)?;
    printer.polynomial(out, &lhs.mul(&rhs))
}
