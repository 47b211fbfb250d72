/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use clap::{Args, Parser, Subcommand};
use matrix::index;
use std::io::Write;

/// The shape of the symmetric matrix being indexed
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// The number of rows (and columns) of the matrix
    #[clap(short = 'n')]
    pub n: usize,

    /// The diagonal of the matrix is not stored
    #[clap(short = 'd', long = "no-diagonal")]
    pub no_diagonal: bool,
}

impl Shape {
    /// Checks whether the diagonal is stored
    pub fn with_diagonal(&self) -> bool {
        !self.no_diagonal
    }
}

/// What to calculate
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prints the offset at which element (X, Y) is stored
    Forward {
        #[clap(flatten)]
        #[allow(missing_docs)]
        shape: Shape,

        /// The row
        x: usize,

        /// The column
        y: usize,
    },

    /// Prints the coordinates `x y` of the element stored at OFFSET
    Inverse {
        #[clap(flatten)]
        #[allow(missing_docs)]
        shape: Shape,

        /// The position within the compact storage
        offset: usize,
    },

    /// Prints every stored element as `x y offset`, in storage order
    Table {
        #[clap(flatten)]
        #[allow(missing_docs)]
        shape: Shape,
    },
}

impl Command {
    /// Gets the name of the command, for error messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::Forward { .. } => "forward",
            Command::Inverse { .. } => "inverse",
            Command::Table { .. } => "table",
        }
    }
}

/// A program mapping coordinates of a compact symmetric matrix into
/// storage offsets, and back
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct SymIdxOptions {
    /// What to calculate
    #[clap(subcommand)]
    pub command: Command,
}

/// Runs a command, writing the results into `out`
pub fn run<W: Write>(options: &SymIdxOptions, mut out: W) -> Result<(), String> {
    log::debug!("Running {:?}", options.command);
    match &options.command {
        Command::Forward { shape, x, y } => {
            let i = index::forward(*x, *y, shape.n, shape.with_diagonal())
                .map_err(|e| e.to_string())?;
            writeln!(out, "{}", i).map_err(|e| e.to_string())
        }
        Command::Inverse { shape, offset } => {
            let (x, y) =
                index::inverse(*offset, shape.n, shape.with_diagonal()).map_err(|e| e.to_string())?;
            writeln!(out, "{} {}", x, y).map_err(|e| e.to_string())
        }
        Command::Table { shape } => {
            let total =
                index::n_entries(shape.n, shape.with_diagonal()).map_err(|e| e.to_string())?;
            for i in 0..total {
                let (x, y) =
                    index::inverse(i, shape.n, shape.with_diagonal()).map_err(|e| e.to_string())?;
                writeln!(out, "{} {} {}", x, y, i).map_err(|e| e.to_string())?;
            }
            Ok(())
        }
    }
}
