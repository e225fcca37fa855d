// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{load_config, DpolyConfig};
use crate::helpers::operands::Operands;
use crate::helpers::output::Printer;
use crate::{arithmetic, calculus, compare, division};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "dpoly")]
#[command(about = "Arithmetic, calculus and formatting for dense polynomials. Polynomials are written as `<degree> <c_0> <c_1> ... <c_degree>`; use `-` to read one from stdin", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `dpoly -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,

    /// Print polynomials in the text format instead of the display format
    #[arg(long, global = true)]
    raw: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    pub fn load_config(&self) -> Result<DpolyConfig> {
        load_config(self.config.clone())
    }

    #[instrument(skip_all)]
    pub fn execute<R: BufRead, W: Write>(
        self,
        config: &DpolyConfig,
        input: R,
        out: &mut W,
    ) -> Result<()> {
        let printer = Printer {
            precision: config.precision,
            raw: self.raw,
        };
        let mut operands = Operands::new(input);
        info!(command = ?self.command, "executing");

        match self.command {
            Commands::Show { poly } => arithmetic::show(&mut operands, &printer, out, &poly)?,
            Commands::Add { lhs, rhs } => {
                arithmetic::add(&mut operands, &printer, out, &lhs, &rhs)?
            }
            Commands::Sub { lhs, rhs } => {
                arithmetic::sub(&mut operands, &printer, out, &lhs, &rhs)?
            }
            Commands::Neg { poly } => arithmetic::neg(&mut operands, &printer, out, &poly)?,
            Commands::Mul { lhs, rhs } => {
                arithmetic::mul(&mut operands, &printer, out, &lhs, &rhs)?
            }
            Commands::Div { dividend, divisor } => {
                division::long(&mut operands, &printer, out, &dividend, &divisor)?
            }
            Commands::DivCoeff { dividend, divisor } => {
                division::coefficientwise(&mut operands, &printer, out, &dividend, &divisor)?
            }
            Commands::Derive { poly } => calculus::derive(&mut operands, &printer, out, &poly)?,
            Commands::Antiderive { poly } => {
                calculus::antiderive(&mut operands, &printer, out, &poly)?
            }
            Commands::Eval { poly, at } => {
                calculus::evaluate(&mut operands, &printer, out, &poly, at)?
            }
            Commands::Integrate { poly, from, to } => {
                calculus::integrate(&mut operands, &printer, out, &poly, from, to)?
            }
            Commands::Eq { lhs, rhs } => {
                compare::eq(&mut operands, out, &lhs, &rhs, config.tolerance)?
            }
        }

        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a polynomial
    Show { poly: String },

    /// Sum of two polynomials
    Add { lhs: String, rhs: String },

    /// Difference of two polynomials
    Sub { lhs: String, rhs: String },

    /// Negate every coefficient
    Neg { poly: String },

    /// Product of two polynomials
    Mul { lhs: String, rhs: String },

    /// Polynomial long division, prints the quotient and the remainder
    Div { dividend: String, divisor: String },

    /// Divide coefficient by coefficient, truncating toward zero
    DivCoeff { dividend: String, divisor: String },

    /// Formal derivative
    Derive { poly: String },

    /// Antiderivative with a zero constant term
    Antiderive { poly: String },

    /// Evaluate at a point
    Eval {
        poly: String,

        /// The value of x
        #[arg(long, allow_negative_numbers = true)]
        at: f64,
    },

    /// Definite integral between two bounds
    Integrate {
        poly: String,

        /// Lower bound
        #[arg(long, allow_negative_numbers = true)]
        from: f64,

        /// Upper bound
        #[arg(long, allow_negative_numbers = true)]
        to: f64,
    },

    /// Compare two polynomials, using the configured tolerance
    Eq { lhs: String, rhs: String },
}
