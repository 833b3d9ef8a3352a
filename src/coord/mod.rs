// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversion of horizon coordinates (altitude, azimuth) into equatorial
//! coordinates (hour angle, declination), given an observer's latitude.
//!
//! Everything goes in and comes out in degrees. The hour angle is computed with
//! a two-argument arctangent, so the quadrant is preserved and observers at the
//! poles (latitude ±90°) don't cause a division by zero; the result there is
//! degenerate, but defined.
//!
//! There are three ways in:
//! - [`alt_az_to_hour_angle_dec`] for a single set of scalars;
//! - [`horizon_to_hour_angle_dec`] for an (altitude, azimuth) pair and a
//!   latitude (also available as [`AltAz::to_hadec`]);
//! - [`alt_az_to_hour_angle_dec_array`] for equal-length slices.
//!
//! [`alt_az_to_hour_angle_dec_broadcast`] allows scalars to be mixed with
//! slices.

mod error;
mod types;

pub use error::CoordError;
pub use types::{AltAz, Conversion, HADec};

use std::borrow::Cow;

use log::trace;
use rayon::prelude::*;

use crate::math::{asin, atan2, cos, sin, wrap_degrees};

/// Convert an altitude and azimuth into an hour angle and declination, given
/// the observer's latitude. All arguments are in degrees, as are the returned
/// (hour angle, declination). The hour angle is in [0, 360) and the declination
/// is in [-90, 90].
///
/// No input validation is performed. If rounding pushes the sine of the
/// declination fractionally outside [-1, 1], the declination is NaN.
pub fn alt_az_to_hour_angle_dec(alt: f64, az: f64, lat: f64) -> (f64, f64) {
    let alt = alt.to_radians();
    let az = az.to_radians();
    let lat = lat.to_radians();
    let (s_alt, c_alt) = (sin(alt), cos(alt));
    let (s_az, c_az) = (sin(az), cos(az));
    let (s_lat, c_lat) = (sin(lat), cos(lat));

    let ha = atan2(-s_az * c_alt, -c_az * s_lat * c_alt + s_alt * c_lat);
    let ha = wrap_degrees(ha.to_degrees());

    let s_dec = s_lat * s_alt + c_lat * c_alt * c_az;
    let dec = asin(s_dec).to_degrees();

    (ha, dec)
}

/// Convert a packaged (altitude, azimuth) pair into an hour angle and
/// declination. Identical to [`alt_az_to_hour_angle_dec`].
pub fn horizon_to_hour_angle_dec(horizon: (f64, f64), lat: f64) -> (f64, f64) {
    let (alt, az) = horizon;
    alt_az_to_hour_angle_dec(alt, az, lat)
}

/// Convert many altitudes and azimuths into hour angles and declinations. All
/// three slices must be the same length; each index is converted independently
/// with [`alt_az_to_hour_angle_dec`], and the results are in the same order as
/// the inputs. Work is done in parallel.
///
/// Any element type that losslessly converts to `f64` is accepted (e.g. `i32`
/// or `f32`); outputs are always `f64`.
pub fn alt_az_to_hour_angle_dec_array<T>(
    alt: &[T],
    az: &[T],
    lat: &[T],
) -> Result<(Vec<f64>, Vec<f64>), CoordError>
where
    T: Copy + Into<f64> + Sync,
{
    if alt.len() != az.len() || alt.len() != lat.len() {
        return Err(CoordError::LengthMismatch {
            alt: alt.len(),
            az: az.len(),
            lat: lat.len(),
        });
    }
    trace!("Converting {} horizon coordinates", alt.len());

    let (ha, dec): (Vec<f64>, Vec<f64>) = alt
        .par_iter()
        .zip(az.par_iter())
        .zip(lat.par_iter())
        .map(|((&alt, &az), &lat)| alt_az_to_hour_angle_dec(alt.into(), az.into(), lat.into()))
        .unzip();
    Ok((ha, dec))
}

/// Either a single angle or a slice of them \[degrees\].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleValues<'a> {
    Scalar(f64),
    Array(&'a [f64]),
}

impl<'a> AngleValues<'a> {
    /// The number of values, if this isn't a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            AngleValues::Scalar(_) => None,
            AngleValues::Array(a) => Some(a.len()),
        }
    }

    /// Repeat a scalar `n` times, or hand back the slice as it is.
    fn broadcast(self, n: usize) -> Cow<'a, [f64]> {
        match self {
            AngleValues::Scalar(v) => Cow::Owned(vec![v; n]),
            AngleValues::Array(a) => Cow::Borrowed(a),
        }
    }
}

impl From<f64> for AngleValues<'_> {
    fn from(v: f64) -> Self {
        AngleValues::Scalar(v)
    }
}

impl<'a> From<&'a [f64]> for AngleValues<'a> {
    fn from(a: &'a [f64]) -> Self {
        AngleValues::Array(a)
    }
}

/// Like [`alt_az_to_hour_angle_dec_array`], but any of the arguments may be a
/// scalar, in which case it is repeated to match the length of the slices. All
/// slices must be the same length. If every argument is a scalar, the outputs
/// have a length of 1.
pub fn alt_az_to_hour_angle_dec_broadcast(
    alt: AngleValues,
    az: AngleValues,
    lat: AngleValues,
) -> Result<(Vec<f64>, Vec<f64>), CoordError> {
    let n = [alt, az, lat]
        .iter()
        .find_map(AngleValues::len)
        .unwrap_or(1);
    let lens = [alt, az, lat].map(|v| v.len().unwrap_or(n));
    if lens.iter().any(|&l| l != n) {
        return Err(CoordError::LengthMismatch {
            alt: lens[0],
            az: lens[1],
            lat: lens[2],
        });
    }

    let alt = alt.broadcast(n);
    let az = az.broadcast(n);
    let lat = lat.broadcast(n);
    alt_az_to_hour_angle_dec_array::<f64>(&alt, &az, &lat)
}
