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

use thiserror::Error;

/// The things that can go wrong when addressing a compact symmetric matrix.
///
/// All of these are precondition violations. They are reported before
/// anything is read or written, so a failed call never leaves a matrix
/// half-modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymmetricError {
    /// A row or column lies outside of `[0, n)`
    #[error("Coordinate ({x}, {y}) is out of bounds for a {n} by {n} symmetric matrix")]
    InvalidCoordinate {
        /// The requested row
        x: usize,
        /// The requested column
        y: usize,
        /// The dimension of the matrix
        n: usize,
    },

    /// A diagonal element was requested from a matrix that does not store
    /// its diagonal
    #[error("Element ({index}, {index}) is on the diagonal, which is not stored in this matrix")]
    DiagonalAccessDisallowed {
        /// The row (and column) that was requested
        index: usize,
    },

    /// An offset lies outside of the backing storage
    #[error("Offset {offset} is out of bounds for a matrix storing {n_entries} elements")]
    InvalidOffset {
        /// The requested offset
        offset: usize,
        /// The number of elements actually stored
        n_entries: usize,
    },

    /// A label that was never registered in a named matrix
    #[error("Unknown variable '{0}'")]
    UnknownVariable(String),

    /// The same label was given twice when building a named matrix
    #[error("Variable '{0}' was registered more than once")]
    DuplicateVariable(String),

    /// The dimension is zero, or so large that the number of stored
    /// elements does not fit in a `usize`
    #[error("Cannot build a symmetric matrix of dimension {n}")]
    InvalidDimension {
        /// The requested dimension
        n: usize,
    },

    /// The data handed to a matrix does not have one element per stored cell
    #[error("Expecting {expected} elements in the data of a symmetric matrix... found {found}")]
    DataLengthMismatch {
        /// The number of elements the matrix stores
        expected: usize,
        /// The length of the data that was given
        found: usize,
    },
}

/// A shorthand for results returned by this crate
pub type SymmetricResult<T> = Result<T, SymmetricError>;
