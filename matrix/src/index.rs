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

//! The mapping between the `(x, y)` coordinates of a symmetric matrix and the
//! position of that element within a flat array containing only the upper
//! triangle.
//!
//! Elements are enumerated row by row, from top to bottom, and within each row
//! from left to right, starting at the diagonal (or just after it, when
//! the diagonal is not stored). For a 4 by 4 matrix:
//!
//! ```text
//!  with diagonal        without diagonal
//! | 0 1 2 3 |          | - 0 1 2 |
//! | . 4 5 6 |          | . - 3 4 |
//! | . . 7 8 |          | . . - 5 |
//! | . . . 9 |          | . . . - |
//! ```
//!
//! Since `(x, y)` and `(y, x)` are the same element, the pair is always
//! sorted before computing the offset.

use crate::error::{SymmetricError, SymmetricResult};

/// Calculates `k*(k+1)/2`, returning `None` if the result does not
/// fit in a `usize`
fn triangle(k: usize) -> Option<usize> {
    // Halve whichever factor is even, so the intermediate
    // product is never larger than the result.
    if k % 2 == 0 {
        (k / 2).checked_mul(k + 1)
    } else {
        k.checked_mul((k + 1) / 2)
    }
}

/// Calculates the largest integer whose square is not larger than `v`.
fn isqrt(v: u128) -> u128 {
    let mut root = (v as f64).sqrt() as u128;
    while root * root > v {
        root -= 1;
        log::trace!("Square root estimate of {v} was too large, corrected to {root}");
    }
    while (root + 1) * (root + 1) <= v {
        root += 1;
        log::trace!("Square root estimate of {v} was too small, corrected to {root}");
    }
    root
}

/// Finds the smallest `i` such that `i*(i+1)/2 >= r`.
///
/// In a triangle with `m` rows whose lengths go down by one, `i` is the
/// position (counted from the bottom, starting at 1) of the row containing the
/// element that sits `r` elements away from the end of the storage.
fn rows_from_bottom(r: usize) -> usize {
    // 8*tri(k) + 1 = (2k+1)^2, so tri(k) <= r iff 2k+1 <= isqrt(8r+1)
    let s = isqrt(8 * r as u128 + 1);
    let k = ((s - 1) / 2) as usize;
    if triangle(k) == Some(r) {
        k
    } else {
        k + 1
    }
}

/// Number of elements stored by an `n` by `n` symmetric matrix.
///
/// This is `n*(n+1)/2` when the diagonal is stored and `n*(n-1)/2`
/// otherwise. Fails with [`SymmetricError::InvalidDimension`] if that
/// number does not fit in a `usize`.
pub fn n_entries(n: usize, with_diagonal: bool) -> SymmetricResult<usize> {
    let side = if with_diagonal { n } else { n.saturating_sub(1) };
    triangle(side).ok_or(SymmetricError::InvalidDimension { n })
}

/// Gets the offset of element `(x, y)` within the compact storage of an
/// `n` by `n` symmetric matrix.
///
/// `forward(x, y, ...)` and `forward(y, x, ...)` are always equal.
///
/// # Errors
/// * [`SymmetricError::InvalidCoordinate`] if `x` or `y` are not smaller than `n`
/// * [`SymmetricError::DiagonalAccessDisallowed`] if `x == y` and the
///   diagonal is not stored
///
/// ```
/// use matrix::index::forward;
/// assert_eq!(forward(1, 2, 4, true), Ok(5));
/// assert_eq!(forward(2, 1, 4, false), Ok(3));
/// ```
pub fn forward(x: usize, y: usize, n: usize, with_diagonal: bool) -> SymmetricResult<usize> {
    if x >= n || y >= n {
        return Err(SymmetricError::InvalidCoordinate { x, y, n });
    }
    let (x, mut y) = if x > y { (y, x) } else { (x, y) };

    // Without the diagonal, this is the same problem as a matrix
    // one row smaller that does store its diagonal.
    let mut n_eff = n;
    if !with_diagonal {
        if x == y {
            return Err(SymmetricError::DiagonalAccessDisallowed { index: x });
        }
        n_eff -= 1;
        y -= 1;
    }

    // x < n_eff, so this never goes below n_eff
    let row_factor = n_eff
        .checked_mul(2)
        .map(|v| v - x - 1)
        .ok_or(SymmetricError::InvalidDimension { n })?;
    // One of x and (2*n_eff - x - 1) is always even. Halve that one before
    // multiplying, so the product never exceeds the offset itself.
    debug_assert!(
        x % 2 == 0 || row_factor % 2 == 0,
        "odd numerator when indexing ({}, {})",
        x,
        y
    );
    let half = if x % 2 == 0 {
        (x / 2).checked_mul(row_factor)
    } else {
        x.checked_mul(row_factor / 2)
    }
    .ok_or(SymmetricError::InvalidDimension { n })?;

    Ok(half + y)
}

/// Recovers the coordinates `(x, y)`, with `x <= y`, of the element stored
/// at `offset` in the compact storage of an `n` by `n` symmetric matrix.
/// When the diagonal is not stored, `x < y`.
///
/// This is the exact inverse of [`forward`]. The row is located using
/// integer arithmetic only, so the result does not depend on floating point
/// rounding close to the start or end of a row.
///
/// # Errors
/// * [`SymmetricError::InvalidOffset`] if `offset` is not smaller than the
///   number of stored elements
///
/// ```
/// use matrix::index::inverse;
/// assert_eq!(inverse(5, 4, true), Ok((1, 2)));
/// assert_eq!(inverse(3, 4, false), Ok((1, 2)));
/// ```
pub fn inverse(offset: usize, n: usize, with_diagonal: bool) -> SymmetricResult<(usize, usize)> {
    let total = n_entries(n, with_diagonal)?;
    if offset >= total {
        return Err(SymmetricError::InvalidOffset {
            offset,
            n_entries: total,
        });
    }
    // total > 0 here, so n >= 1 (or n >= 2 without diagonal)
    let n_eff = if with_diagonal { n } else { n - 1 };

    let i = rows_from_bottom(total - offset);
    // i <= n_eff, so this cannot overflow
    let rows_below = triangle(i).ok_or(SymmetricError::InvalidDimension { n })?;
    let x = n_eff - i;
    let mut y = offset - (total - rows_below) + x;
    if !with_diagonal {
        y += 1;
    }
    Ok((x, y))
}

/// Gets the offset of the first element stored in row `x`; that is,
/// `(x, x)` or, if the diagonal is not stored, `(x, x + 1)`.
pub fn row_start(x: usize, n: usize, with_diagonal: bool) -> SymmetricResult<usize> {
    let y = if with_diagonal { x } else { x.saturating_add(1) };
    forward(x, y, n, with_diagonal)
}
