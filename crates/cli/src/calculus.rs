// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::{operands::Operands, output::Printer};
use anyhow::Result;
use std::io::{BufRead, Write};

pub fn derive<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    poly: &str,
) -> Result<()> {
    let poly = operands.parse(poly)?;
    printer.polynomial(out, &poly.derive())
}

pub fn antiderive<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    poly: &str,
) -> Result<()> {
    let poly = operands.parse(poly)?;
    printer.polynomial(out, &poly.antiderivative())
}

pub fn evaluate<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    poly: &str,
    x: f64,
) -> Result<()> {
    let poly = operands.parse(poly)?;
    printer.value(out, poly.evaluate(x))
}

pub fn integrate<R: BufRead>(
    operands: &mut Operands<R>,
    printer: &Printer,
    out: &mut impl Write,
    poly: &str,
    start: f64,
    end: f64,
) -> Result<()> {
    let poly = operands.parse(poly)?;
    printer.value(out, poly.integrate(start, end))
}
