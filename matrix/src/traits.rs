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

use serde::Serialize;

/// A simple trait required for initializing matrices (i.e., filling
/// the storage with zeroes)
pub trait Zero {
    /// Returns an element considered to be 0.
    fn zero() -> Self;
}

macro_rules! impl_zero {
    ( $zero : expr; $( $t : ty ),* ) => {
        $(
            impl Zero for $t {
                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_zero!(0.; f32, f64);
impl_zero!(0; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Define the basic requirements for the elements of a symmetric matrix
pub trait Numberish:
    Copy
    + Clone
    + Zero
    + PartialEq
    + Sized
    + std::fmt::Display
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::AddAssign
    + Sync
    + Send
    + Serialize
{
}
impl<
        T: Zero
            + Copy
            + Clone
            + PartialEq
            + Sized
            + std::fmt::Display
            + std::fmt::Debug
            + std::ops::Add<Output = Self>
            + std::ops::AddAssign
            + Sync
            + Send
            + Serialize,
    > Numberish for T
{
}
