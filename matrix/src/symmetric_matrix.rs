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

use crate::error::{SymmetricError, SymmetricResult};
use crate::index;
use crate::traits::Numberish;
use serde::{Deserialize, Deserializer, Serialize};
use std::marker::PhantomData;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A square matrix where `M[x,y] == M[y,x]`, of which only the upper
/// triangle (optionally including the diagonal) is stored.
///
/// The storage `S` is anything that dereferences into a slice of `T`. It
/// defaults to an owned `Vec<T>`, but a `Box<[T]>` or a `&mut [T]` borrowed
/// from somewhere else work too, which allows wrapping data computed
/// elsewhere without copying it.
///
/// This type does no internal synchronization. Sharing a buffer across
/// threads requires the caller to synchronize access to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericSymmetricMatrix<T: Numberish, S = Vec<T>> {
    pub(crate) n: usize,
    pub(crate) with_diagonal: bool,

    // The upper triangle, ordered by row (top to bottom)
    // and then by column (left to right).
    pub(crate) data: S,

    #[serde(skip)]
    phantom: PhantomData<T>,
}

impl<T: Numberish, S: AsRef<[T]>> std::fmt::Display for GenericSymmetricMatrix<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..self.n {
            write!(f, "\n\t")?;
            for y in 0..self.n {
                // Only the missing diagonal fails here
                let v = self.get(x, y).unwrap_or_else(|_| T::zero());
                write!(f, "{}, ", v)?;
            }
        }
        Ok(())
    }
}

impl<T: Numberish> GenericSymmetricMatrix<T> {
    /// Creates an `n` by `n` symmetric matrix full of zeroes.
    ///
    /// Fails if `n` is zero.
    pub fn new(n: usize, with_diagonal: bool) -> SymmetricResult<Self> {
        let len = Self::checked_len(n, with_diagonal)?;
        log::debug!(
            "Creating a {n} by {n} symmetric matrix (with_diagonal = {with_diagonal}) storing {len} elements"
        );
        Ok(Self {
            n,
            with_diagonal,
            data: vec![T::zero(); len],
            phantom: PhantomData,
        })
    }

    /// Creates an `n` by `n` symmetric matrix where each stored element
    /// `(x, y)`, with `x <= y`, is `f(x, y)`.
    pub fn from_fn<F>(n: usize, with_diagonal: bool, mut f: F) -> SymmetricResult<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let len = Self::checked_len(n, with_diagonal)?;
        let mut data = Vec::with_capacity(len);
        for x in 0..n {
            let first = if with_diagonal { x } else { x + 1 };
            for y in first..n {
                data.push(f(x, y));
            }
        }
        debug_assert_eq!(data.len(), len);
        Self::from_data(n, with_diagonal, data)
    }

    /// Same as [`GenericSymmetricMatrix::from_fn`], but the rows are
    /// filled in parallel
    #[cfg(feature = "parallel")]
    pub fn par_from_fn<F>(n: usize, with_diagonal: bool, f: F) -> SymmetricResult<Self>
    where
        F: Fn(usize, usize) -> T + Sync,
    {
        Self::checked_len(n, with_diagonal)?;
        let f = &f;
        let data: Vec<T> = (0..n)
            .into_par_iter()
            .flat_map_iter(|x| {
                let first = if with_diagonal { x } else { x + 1 };
                (first..n).map(move |y| f(x, y))
            })
            .collect();
        Self::from_data(n, with_diagonal, data)
    }
}

impl<T: Numberish, S: AsRef<[T]>> GenericSymmetricMatrix<T, S> {
    fn checked_len(n: usize, with_diagonal: bool) -> SymmetricResult<usize> {
        if n == 0 {
            return Err(SymmetricError::InvalidDimension { n });
        }
        index::n_entries(n, with_diagonal)
    }

    /// Wraps `data`, which must contain the upper triangle of an `n` by `n`
    /// symmetric matrix ordered by row and then by column. No data is
    /// copied: the matrix takes `data` as it is, whether owned or borrowed.
    ///
    /// Fails if `n` is zero or if the length of `data` does not match the
    /// number of stored elements.
    pub fn from_data(n: usize, with_diagonal: bool, data: S) -> SymmetricResult<Self> {
        let expected = Self::checked_len(n, with_diagonal)?;
        let found = data.as_ref().len();
        if expected != found {
            return Err(SymmetricError::DataLengthMismatch { expected, found });
        }
        Ok(Self {
            n,
            with_diagonal,
            data,
            phantom: PhantomData,
        })
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    /// Returns the number of elements actually stored
    pub fn n_entries(&self) -> usize {
        self.data.as_ref().len()
    }

    /// Checks whether the diagonal is stored
    pub fn with_diagonal(&self) -> bool {
        self.with_diagonal
    }

    /// Borrows the compact storage
    pub fn as_slice(&self) -> &[T] {
        self.data.as_ref()
    }

    /// Consumes the matrix, returning its storage
    pub fn into_data(self) -> S {
        self.data
    }

    /// Gets the position of element `(x, y)` within the storage.
    ///
    /// This offset can be kept and later passed to [`Self::get_by_offset`]
    /// and [`Self::set_by_offset`], avoiding recalculating it.
    pub fn offset(&self, x: usize, y: usize) -> SymmetricResult<usize> {
        index::forward(x, y, self.n, self.with_diagonal)
    }

    /// Gets the coordinates `(x, y)`, with `x <= y`, of the element
    /// stored at `offset`
    pub fn coordinates(&self, offset: usize) -> SymmetricResult<(usize, usize)> {
        index::inverse(offset, self.n, self.with_diagonal)
    }

    /// Gets an element from the matrix
    pub fn get(&self, x: usize, y: usize) -> SymmetricResult<T> {
        let i = self.offset(x, y)?;
        self.get_by_offset(i)
    }

    /// Gets the element stored at `offset`
    pub fn get_by_offset(&self, offset: usize) -> SymmetricResult<T> {
        let data = self.data.as_ref();
        data.get(offset)
            .copied()
            .ok_or(SymmetricError::InvalidOffset {
                offset,
                n_entries: data.len(),
            })
    }

    /// Iterates over the stored elements in storage order, yielding their
    /// coordinates `(x, y)`, with `x <= y`, and their value.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        let n = self.n;
        let with_diagonal = self.with_diagonal;
        (0..n)
            .flat_map(move |x| {
                let first = if with_diagonal { x } else { x + 1 };
                (first..n).map(move |y| (x, y))
            })
            .zip(self.data.as_ref().iter().copied())
    }
}

impl<T: Numberish, S: AsRef<[T]> + AsMut<[T]>> GenericSymmetricMatrix<T, S> {
    /// Sets an element into the matrix. Elements `(x, y)` and `(y, x)` are
    /// the same one, so both are affected.
    pub fn set(&mut self, x: usize, y: usize, v: T) -> SymmetricResult<T> {
        let i = self.offset(x, y)?;
        self.set_by_offset(i, v)
    }

    /// Sets the element stored at `offset`
    pub fn set_by_offset(&mut self, offset: usize, v: T) -> SymmetricResult<T> {
        let data = self.data.as_mut();
        let n_entries = data.len();
        match data.get_mut(offset) {
            Some(e) => {
                *e = v;
                Ok(v)
            }
            None => Err(SymmetricError::InvalidOffset { offset, n_entries }),
        }
    }

    /// Adds `v` to the element in position `x,y`.
    pub fn add_to_element(&mut self, x: usize, y: usize, v: T) -> SymmetricResult<()> {
        let i = self.offset(x, y)?;
        // offset() only returns indices within the storage
        self.data.as_mut()[i] += v;
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawSymmetricMatrix<T> {
    n: usize,
    with_diagonal: bool,
    data: Vec<T>,
}

impl<'de, T: Numberish + Deserialize<'de>> Deserialize<'de> for GenericSymmetricMatrix<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSymmetricMatrix::<T>::deserialize(deserializer)?;
        Self::from_data(raw.n, raw.with_diagonal, raw.data).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Float, GenericSymmetricMatrix, SymmetricError, SymmetricMatrix, SymmetricResult};

    #[test]
    fn test_serde() -> Result<(), String> {
        let mut m = SymmetricMatrix::new(3, true).map_err(|e| e.to_string())?;
        m.set(0, 2, 1.5).map_err(|e| e.to_string())?;
        let json = serde_json::to_string(&m).map_err(|e| e.to_string())?;
        println!("{}", json);

        let m2: SymmetricMatrix = serde_json::from_str(&json).map_err(|e| e.to_string())?;
        assert_eq!(m, m2);
        println!("{}", &m2);

        Ok(())
    }

    #[test]
    fn test_serde_wrong_length() {
        let json = r#"{"n":3,"with_diagonal":false,"data":[1.0,2.0]}"#;
        let m: Result<SymmetricMatrix, _> = serde_json::from_str(json);
        assert!(m.is_err());
    }

    #[test]
    fn test_display() -> SymmetricResult<()> {
        let m = GenericSymmetricMatrix::<i32>::from_fn(3, false, |x, y| (x + y) as i32)?;
        let s = format!("{}", m);
        assert_eq!(s, "\n\t0, 1, 2, \n\t1, 0, 3, \n\t2, 3, 0, ");
        Ok(())
    }

    #[test]
    fn test_new() -> SymmetricResult<()> {
        let m = SymmetricMatrix::new(5, true)?;
        assert_eq!(m.size(), (5, 5));
        assert_eq!(m.n_entries(), 15);
        assert!(m.with_diagonal());
        assert!(m.as_slice().iter().all(|v| *v == 0.0));

        let m = GenericSymmetricMatrix::<u8>::new(5, false)?;
        assert_eq!(m.n_entries(), 10);
        assert!(!m.with_diagonal());
        assert!(m.as_slice().iter().all(|v| *v == 0));

        // A single element, which is on the diagonal
        let m = SymmetricMatrix::new(1, false)?;
        assert_eq!(m.n_entries(), 0);
        assert_eq!(
            m.get(0, 0),
            Err(SymmetricError::DiagonalAccessDisallowed { index: 0 })
        );

        assert_eq!(
            SymmetricMatrix::new(0, true),
            Err(SymmetricError::InvalidDimension { n: 0 })
        );
        Ok(())
    }

    #[test]
    fn test_from_data() -> SymmetricResult<()> {
        let m = GenericSymmetricMatrix::<Float>::from_data(3, true, vec![0., 1., 2., 3., 4., 5.])?;
        assert_eq!(m.get(0, 0)?, 0.);
        assert_eq!(m.get(2, 0)?, 2.);
        assert_eq!(m.get(1, 2)?, 4.);
        assert_eq!(m.get(2, 2)?, 5.);
        assert_eq!(m.into_data(), vec![0., 1., 2., 3., 4., 5.]);

        let wrong = GenericSymmetricMatrix::<Float>::from_data(3, false, vec![0.; 6]);
        assert_eq!(
            wrong,
            Err(SymmetricError::DataLengthMismatch {
                expected: 3,
                found: 6
            })
        );
        Ok(())
    }

    #[test]
    fn test_from_borrowed_data() -> SymmetricResult<()> {
        let mut buffer = vec![0i64; 6];
        {
            let mut m =
                GenericSymmetricMatrix::<i64, _>::from_data(4, false, buffer.as_mut_slice())?;
            m.set(3, 1, 7)?;
            m.set(0, 1, -2)?;
            assert_eq!(m.get(1, 3)?, 7);
        }
        // The writes went straight into the caller's buffer
        assert_eq!(buffer, vec![-2, 0, 0, 0, 7, 0]);

        let m = GenericSymmetricMatrix::<i64, _>::from_data(4, false, &buffer[..])?;
        assert_eq!(m.get(0, 1)?, -2);
        Ok(())
    }

    #[test]
    fn test_from_fn() -> SymmetricResult<()> {
        let m = GenericSymmetricMatrix::<usize>::from_fn(6, true, |x, y| 10 * x + y)?;
        for x in 0..6 {
            for y in 0..6 {
                assert_eq!(m.get(x, y)?, 10 * x.min(y) + x.max(y));
            }
        }
        Ok(())
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_from_fn() -> SymmetricResult<()> {
        for with_diagonal in [true, false] {
            let a = GenericSymmetricMatrix::<usize>::from_fn(40, with_diagonal, |x, y| x * y + y)?;
            let b =
                GenericSymmetricMatrix::<usize>::par_from_fn(40, with_diagonal, |x, y| x * y + y)?;
            assert_eq!(a, b);
        }
        Ok(())
    }

    #[test]
    fn test_get_set() -> SymmetricResult<()> {
        let mut m = GenericSymmetricMatrix::<i32>::new(4, true)?;
        assert_eq!(m.set(1, 3, 12)?, 12);
        assert_eq!(m.get(1, 3)?, 12);
        assert_eq!(m.get(3, 1)?, 12);
        m.set(3, 1, -1)?;
        assert_eq!(m.get(1, 3)?, -1);

        assert_eq!(
            m.get(4, 1),
            Err(SymmetricError::InvalidCoordinate { x: 4, y: 1, n: 4 })
        );
        assert_eq!(
            m.set(1, 4, 2),
            Err(SymmetricError::InvalidCoordinate { x: 1, y: 4, n: 4 })
        );
        Ok(())
    }

    #[test]
    fn test_no_diagonal_access() -> SymmetricResult<()> {
        let mut m = GenericSymmetricMatrix::<i32>::new(4, false)?;
        for i in 0..4 {
            assert_eq!(
                m.get(i, i),
                Err(SymmetricError::DiagonalAccessDisallowed { index: i })
            );
            assert_eq!(
                m.set(i, i, 1),
                Err(SymmetricError::DiagonalAccessDisallowed { index: i })
            );
        }
        // Nothing was written
        assert!(m.as_slice().iter().all(|v| *v == 0));
        Ok(())
    }

    #[test]
    fn test_by_offset() -> SymmetricResult<()> {
        let mut m = GenericSymmetricMatrix::<i32>::new(4, true)?;
        let i = m.offset(2, 1)?;
        assert_eq!(i, 5);
        assert_eq!(m.coordinates(i)?, (1, 2));

        m.set_by_offset(i, 3)?;
        assert_eq!(m.get(1, 2)?, 3);
        assert_eq!(m.get_by_offset(i)?, 3);
        assert_eq!(m.get_by_offset(i + 1)?, 0);

        assert_eq!(
            m.get_by_offset(10),
            Err(SymmetricError::InvalidOffset {
                offset: 10,
                n_entries: 10
            })
        );
        assert_eq!(
            m.set_by_offset(10, 1),
            Err(SymmetricError::InvalidOffset {
                offset: 10,
                n_entries: 10
            })
        );
        Ok(())
    }

    #[test]
    fn test_add_to_element() -> SymmetricResult<()> {
        let mut m = SymmetricMatrix::new(3, true)?;
        m.add_to_element(0, 2, 1.0)?;
        m.add_to_element(2, 0, 2.5)?;
        assert_eq!(m.get(0, 2)?, 3.5);
        assert!(m.add_to_element(3, 0, 1.0).is_err());
        Ok(())
    }

    #[test]
    fn test_iter() -> SymmetricResult<()> {
        for with_diagonal in [true, false] {
            let m = GenericSymmetricMatrix::<usize>::from_fn(7, with_diagonal, |x, y| 100 * x + y)?;
            let mut count = 0;
            for (i, ((x, y), v)) in m.iter().enumerate() {
                assert_eq!(m.coordinates(i)?, (x, y));
                assert_eq!(v, 100 * x + y);
                count += 1;
            }
            assert_eq!(count, m.n_entries());
        }
        Ok(())
    }
}
