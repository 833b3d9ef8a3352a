// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Coordinate value types. Unlike most astronomy code, all units here are in
//! degrees.

use serde::{Deserialize, Serialize};

/// A struct containing an Altitude and Azimuth (horizon coordinates). All units
/// are in degrees. Nothing is validated; an altitude of 100° is converted just
/// as happily as one of 10°.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AltAz {
    /// Altitude \[degrees\]
    pub alt: f64,
    /// Azimuth, measured eastward from north \[degrees\]
    pub az: f64,
}

impl AltAz {
    /// Make a new [`AltAz`] struct from values in degrees.
    pub fn from_degrees(alt: f64, az: f64) -> AltAz {
        Self { alt, az }
    }

    /// Convert the horizon coordinates to equatorial coordinates (Hour Angle
    /// and Declination), given the local latitude on Earth \[degrees\].
    pub fn to_hadec(self, latitude_deg: f64) -> HADec {
        let (ha, dec) = super::alt_az_to_hour_angle_dec(self.alt, self.az, latitude_deg);
        HADec { ha, dec }
    }
}

impl From<(f64, f64)> for AltAz {
    /// The tuple is (altitude, azimuth).
    fn from((alt, az): (f64, f64)) -> Self {
        Self { alt, az }
    }
}

impl std::fmt::Display for AltAz {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.4}°, {:.4}°)", self.alt, self.az)
    }
}

/// A struct containing an Hour Angle and Declination. All units are in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub struct HADec {
    /// Hour angle, in [0, 360) \[degrees\]
    pub ha: f64,
    /// Declination, in [-90, 90] \[degrees\]
    pub dec: f64,
}

impl From<HADec> for (f64, f64) {
    fn from(hadec: HADec) -> Self {
        (hadec.ha, hadec.dec)
    }
}

impl std::fmt::Display for HADec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}°, {}°)", self.ha, self.dec)
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for HADec {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.ha, &other.ha, epsilon)
            && f64::abs_diff_eq(&self.dec, &other.dec, epsilon)
    }
}

/// One conversion, with its inputs. This is what gets written out by the
/// command-line interface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Altitude \[degrees\]
    pub alt: f64,
    /// Azimuth \[degrees\]
    pub az: f64,
    /// Observer latitude \[degrees\]
    pub lat: f64,
    /// Hour angle \[degrees\]
    pub ha: f64,
    /// Declination \[degrees\]
    pub dec: f64,
}
