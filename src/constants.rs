// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. All angles handed to and returned
from this crate are in degrees; radians only exist inside the trigonometry.
 */

pub use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// The number of degrees in a full circle. Hour angles are always wrapped into
/// [0, `FULL_CIRCLE_DEG`).
pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// The number of arcminutes in a degree.
pub const ARCMIN_PER_DEG: f64 = 60.0;

/// The number of arcseconds in a degree.
pub const ARCSEC_PER_DEG: f64 = 3600.0;
