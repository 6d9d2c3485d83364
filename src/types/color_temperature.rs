// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! White color temperature in Kelvin.

use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// Color temperature in Kelvin (2000-9000).
///
/// Lower values are warmer (more orange), higher values are cooler (bluer).
///
/// # Examples
///
/// ```
/// use govee_lib::types::ColorTemperature;
///
/// let neutral = ColorTemperature::new(4000).unwrap();
/// assert_eq!(neutral.kelvin(), 4000);
///
/// assert!(ColorTemperature::new(1999).is_err());
/// assert!(ColorTemperature::new(9001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorTemperature(u16);

impl ColorTemperature {
    /// Warmest accepted value.
    pub const MIN_KELVIN: u16 = 2000;

    /// Coolest accepted value.
    pub const MAX_KELVIN: u16 = 9000;

    /// Candlelight.
    pub const WARM: Self = Self(2700);

    /// Neutral white.
    pub const NEUTRAL: Self = Self(4000);

    /// Cool daylight.
    pub const DAYLIGHT: Self = Self(6500);

    /// Creates a new color temperature.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `kelvin` is outside [2000, 9000].
    pub fn new(kelvin: i64) -> Result<Self, ValueError> {
        let min = i64::from(Self::MIN_KELVIN);
        let max = i64::from(Self::MAX_KELVIN);
        if !(min..=max).contains(&kelvin) {
            return Err(ValueError::OutOfRange {
                field: "colorTem",
                min,
                max,
                actual: kelvin,
            });
        }
        // Range checked above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let kelvin = kelvin as u16;
        Ok(Self(kelvin))
    }

    /// Returns the temperature in Kelvin.
    #[must_use]
    pub const fn kelvin(&self) -> u16 {
        self.0
    }
}

impl Default for ColorTemperature {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

impl TryFrom<i64> for ColorTemperature {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
