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
use crate::symmetric_matrix::GenericSymmetricMatrix;
use crate::traits::Numberish;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A [`GenericSymmetricMatrix`] whose rows and columns are addressed by
/// name instead of by number.
///
/// Names are given once, when the matrix is created. The position of a
/// name in that list is the row (and column) it refers to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSymmetricMatrix<T: Numberish, S = Vec<T>> {
    names: Vec<String>,

    #[serde(skip)]
    vars: HashMap<String, usize>,

    matrix: GenericSymmetricMatrix<T, S>,
}

/// Builds the table from names into indices, checking that none is repeated
fn build_table<I, N>(names: I) -> SymmetricResult<(Vec<String>, HashMap<String, usize>)>
where
    I: IntoIterator<Item = N>,
    N: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    let mut vars = HashMap::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if vars.insert(name.clone(), i).is_some() {
            return Err(SymmetricError::DuplicateVariable(name.clone()));
        }
    }
    Ok((names, vars))
}

impl<T: Numberish> NamedSymmetricMatrix<T> {
    /// Creates a matrix full of zeroes, with one row and one column per name
    ///
    /// ```
    /// use matrix::NamedSymmetricMatrix;
    ///
    /// let mut m = NamedSymmetricMatrix::<i32>::new(["a", "b", "c"], true).unwrap();
    /// m.set("c", "a", 3).unwrap();
    /// assert_eq!(m.get("a", "c").unwrap(), 3);
    /// ```
    pub fn new<I, N>(names: I, with_diagonal: bool) -> SymmetricResult<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let (names, vars) = build_table(names)?;
        let matrix = GenericSymmetricMatrix::new(names.len(), with_diagonal)?;
        Ok(Self {
            names,
            vars,
            matrix,
        })
    }
}

impl<T: Numberish, S: AsRef<[T]>> NamedSymmetricMatrix<T, S> {
    /// Wraps `data` (see [`GenericSymmetricMatrix::from_data`]), naming
    /// its rows and columns
    pub fn from_data<I, N>(names: I, with_diagonal: bool, data: S) -> SymmetricResult<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let (names, vars) = build_table(names)?;
        let matrix = GenericSymmetricMatrix::from_data(names.len(), with_diagonal, data)?;
        Ok(Self {
            names,
            vars,
            matrix,
        })
    }

    /// Gets the row (or column) corresponding to `name`
    pub fn index_of(&self, name: &str) -> SymmetricResult<usize> {
        self.vars
            .get(name)
            .copied()
            .ok_or_else(|| SymmetricError::UnknownVariable(name.to_string()))
    }

    /// The names of the rows and columns, in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Borrows the underlying matrix
    pub fn matrix(&self) -> &GenericSymmetricMatrix<T, S> {
        &self.matrix
    }

    /// Consumes `self`, returning the underlying matrix
    pub fn into_matrix(self) -> GenericSymmetricMatrix<T, S> {
        self.matrix
    }

    /// Gets the position within the storage of the element at
    /// `(name_x, name_y)`.
    ///
    /// Keeping it and then calling [`Self::get_by_offset`] or
    /// [`Self::set_by_offset`] avoids looking up the names again.
    pub fn get_offset(&self, name_x: &str, name_y: &str) -> SymmetricResult<usize> {
        let (x, y) = (self.index_of(name_x)?, self.index_of(name_y)?);
        self.matrix.offset(x, y)
    }

    /// Gets the names of the row and column of the element stored at `offset`
    pub fn labels_at(&self, offset: usize) -> SymmetricResult<(&str, &str)> {
        let (x, y) = self.matrix.coordinates(offset)?;
        Ok((self.names[x].as_str(), self.names[y].as_str()))
    }

    /// Gets an element from the matrix
    pub fn get(&self, name_x: &str, name_y: &str) -> SymmetricResult<T> {
        let (x, y) = (self.index_of(name_x)?, self.index_of(name_y)?);
        self.matrix.get(x, y)
    }

    /// Gets the element stored at `offset`
    pub fn get_by_offset(&self, offset: usize) -> SymmetricResult<T> {
        self.matrix.get_by_offset(offset)
    }
}

impl<T: Numberish, S: AsRef<[T]> + AsMut<[T]>> NamedSymmetricMatrix<T, S> {
    /// Sets an element into the matrix
    pub fn set(&mut self, name_x: &str, name_y: &str, v: T) -> SymmetricResult<T> {
        let (x, y) = (self.index_of(name_x)?, self.index_of(name_y)?);
        self.matrix.set(x, y, v)
    }

    /// Sets the element stored at `offset`
    pub fn set_by_offset(&mut self, offset: usize, v: T) -> SymmetricResult<T> {
        self.matrix.set_by_offset(offset, v)
    }
}

#[derive(Deserialize)]
struct RawNamedSymmetricMatrix<T: Numberish> {
    names: Vec<String>,
    matrix: GenericSymmetricMatrix<T>,
}

impl<'de, T: Numberish + Deserialize<'de>> Deserialize<'de> for NamedSymmetricMatrix<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawNamedSymmetricMatrix::<T>::deserialize(deserializer)?;
        let (x, _) = raw.matrix.size();
        if x != raw.names.len() {
            return Err(serde::de::Error::custom(format!(
                "Found {} names for a {} by {} matrix",
                raw.names.len(),
                x,
                x
            )));
        }
        let (names, vars) = build_table(raw.names).map_err(serde::de::Error::custom)?;
        Ok(Self {
            names,
            vars,
            matrix: raw.matrix,
        })
    }
}
