// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use thiserror::Error;

/// The operation has no meaningful value, not even an infinite one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UndefinedResult {
    #[error("summing infinite values of different signs yields an undefined result")]
    OppositeInfinities,

    #[error("dividing infinity by infinity yields an undefined result")]
    InfiniteQuotient,

    #[error("multiplying infinity by zero yields an undefined result")]
    InfiniteTimesZero,

    #[error("dividing zero by zero yields an undefined result")]
    ZeroByZero,

    #[error("the remainder of a division by zero is undefined")]
    RemainderByZero,
}

pub type Result<T> = std::result::Result<T, UndefinedResult>;
