// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Convert horizon coordinates (altitude and azimuth) observed at a latitude into
equatorial coordinates (hour angle and declination). All angles are in degrees.
 */

mod cli;
pub mod constants;
pub mod coord;
pub(crate) mod math;
pub mod unit_parsing;

// Re-exports.
pub use cli::{Altaz2Hadec, Altaz2HadecError};
pub use coord::{
    alt_az_to_hour_angle_dec, alt_az_to_hour_angle_dec_array, alt_az_to_hour_angle_dec_broadcast,
    horizon_to_hour_angle_dec, AltAz, AngleValues, Conversion, CoordError, HADec,
};
pub use unit_parsing::{parse_angle, AngleFormat, UnitParseError};
