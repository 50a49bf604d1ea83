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
use crate::Result;

// Fallible arithmetic. The `std::ops` operators on every type in this crate are
// thin wrappers over these and panic on `Err`, the same way integer division
// by zero panics.

pub trait TryAdd<Rhs = Self> {
    type Output;
    fn try_add(self, rhs: Rhs) -> Result<Self::Output>;
}

pub trait TrySub<Rhs = Self> {
    type Output;
    fn try_sub(self, rhs: Rhs) -> Result<Self::Output>;
}

pub trait TryMul<Rhs = Self> {
    type Output;
    fn try_mul(self, rhs: Rhs) -> Result<Self::Output>;
}

pub trait TryDiv<Rhs = Self> {
    type Output;
    fn try_div(self, rhs: Rhs) -> Result<Self::Output>;
}

pub trait TryRem<Rhs = Self> {
    type Output;
    fn try_rem(self, rhs: Rhs) -> Result<Self::Output>;
}
