// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for light control.

use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// Brightness level as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use govee_lib::types::Brightness;
///
/// let half = Brightness::new(50).unwrap();
/// assert_eq!(half.value(), 50);
///
/// assert_eq!(Brightness::MIN.value(), 0);
/// assert_eq!(Brightness::MAX.value(), 100);
///
/// assert!(Brightness::new(101).is_err());
/// assert!(Brightness::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Brightness(u8);

impl Brightness {
    /// Lowest accepted level.
    pub const MIN: Self = Self(0);

    /// Highest accepted level.
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [0, 100].
    pub fn new(value: i64) -> Result<Self, ValueError> {
        if !(0..=100).contains(&value) {
            return Err(ValueError::OutOfRange {
                field: "brightness",
                min: 0,
                max: 100,
                actual: value,
            });
        }
        // Range checked above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let level = value as u8;
        Ok(Self(level))
    }

    /// Returns the brightness percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<i64> for Brightness {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_level_in_range() {
        for v in 0..=100 {
            assert_eq!(i64::from(Brightness::new(v).unwrap().value()), v);
        }
    }

    #[test]
    fn rejects_levels_outside_range() {
        for v in [-100, -1, 101, 150, i64::MAX, i64::MIN] {
            let err = Brightness::new(v).unwrap_err();
            assert_eq!(
                err,
                ValueError::OutOfRange {
                    field: "brightness",
                    min: 0,
                    max: 100,
                    actual: v,
                }
            );
        }
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_value(Brightness::new(75).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!(75));
    }

    #[test]
    fn display() {
        assert_eq!(Brightness::new(75).unwrap().to_string(), "75%");
    }
}
