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

#![deny(missing_docs)]

//! A Library for compact Symmetric Matrices.
//!
//! A symmetric matrix satisfies `M[x,y] == M[y,x]`, so only its upper
//! triangle (optionally including the diagonal) needs to be stored. This
//! crate stores that triangle in a flat array and provides the mapping
//! between `(x, y)` coordinates and positions within that array
//! (see [`index`]), in both directions.
//!
//! It is built generically (i.e., `GenericSymmetricMatrix<T: Numberish>`) so
//! that the same library can be used for defining Matrices over `usize`,
//! `i32`, `f32` and so on.

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// The errors returned by this crate
pub mod error;
pub use error::{SymmetricError, SymmetricResult};

/// Mapping between coordinates and storage offsets
pub mod index;

/// The traits that the elements of a matrix need to implement
pub mod traits;
pub use traits::{Numberish, Zero};

/// The compact symmetric matrix itself
pub mod symmetric_matrix;
pub use symmetric_matrix::GenericSymmetricMatrix;

/// A symmetric matrix with named rows and columns
pub mod named_symmetric_matrix;
pub use named_symmetric_matrix::NamedSymmetricMatrix;

/// A shorthand for `GenericSymmetricMatrix<Float>`; i.e., a normal
/// symmetric matrix. Note that `Float` is defined as `f32` if the feature `float`
/// is utilized; otherwise, it defauts to `f64`.
pub type SymmetricMatrix = GenericSymmetricMatrix<Float>;

/// A shorthand for `NamedSymmetricMatrix<Float>`
pub type NamedMatrix = NamedSymmetricMatrix<Float>;
