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

//! Physical quantities over saturating 64 bit integers.
//!
//! Every quantity is a whole number of some fixed, fine base unit (nanometers,
//! millijoules, microwatts, ...). Arithmetic never wraps: values that leave the
//! 64 bit range become signed infinities, and derived quantities (power from
//! energy and time, area from two distances, ...) keep as much precision as
//! fits rather than overflowing early.
//!
//! ```
//! use alchemist::{joules, seconds, watts};
//!
//! assert_eq!(joules!(10) / seconds!(5), watts!(2));
//! assert_eq!(joules!(12_345).to_string(), "12.345kJ");
//! ```
//!
//! The unit macros take an `i64`. Integer literals of either width infer to
//! it directly; a 32 bit value is widened losslessly with `i64::from`.
//!
//! ```
//! use alchemist::meters;
//!
//! let laps: i32 = 4;
//! assert_eq!(meters!(i64::from(laps) * 400), meters!(1_600));
//! assert_eq!(meters!(5_000_000_000).to_string(), "5.0Gm");
//! ```

pub(crate) mod acceleration;
pub(crate) mod area;
pub(crate) mod derived;
pub(crate) mod distance;
pub(crate) mod energy;
pub(crate) mod error;
pub(crate) mod force;
pub(crate) mod generic;
pub(crate) mod mass;
pub(crate) mod ops;
pub(crate) mod power;
pub(crate) mod saturating;
pub(crate) mod temperature;
pub(crate) mod time;
pub(crate) mod unit;
pub(crate) mod velocity;
pub(crate) mod volume;

pub use crate::{
    acceleration::Acceleration,
    area::Area,
    distance::Distance,
    energy::Energy,
    error::{Result, UndefinedResult},
    force::Force,
    mass::Mass,
    ops::{TryAdd, TryDiv, TryMul, TryRem, TrySub},
    power::Power,
    saturating::SaturatingInteger,
    temperature::Temperature,
    time::Duration,
    unit::{
        acceleration::AccelerationUnit, area::AreaUnit, distance::DistanceUnit,
        energy::EnergyUnit, force::ForceUnit, mass::MassUnit, power::PowerUnit,
        temperature::TemperatureUnit, time::TimeUnit, velocity::VelocityUnit,
        volume::VolumeUnit, LinearUnit, Unit,
    },
    velocity::Velocity,
    volume::Volume,
};

pub use approx;
