// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("The altitude, azimuth and latitude inputs must have the same length, but got {alt}, {az} and {lat}")]
    LengthMismatch { alt: usize, az: usize, lat: usize },
}
