// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all altaz2hadec-related errors. This should be the *only*
//! error enum that is publicly visible from the command-line interface.

use thiserror::Error;

use super::convert::ConvertArgsError;
use crate::{coord::CoordError, unit_parsing::UnitParseError};

/// The *only* publicly visible error from the altaz2hadec binary.
#[derive(Error, Debug)]
pub enum Altaz2HadecError {
    /// An error related to the coordinate conversion itself.
    #[error("{0}")]
    Coord(String),

    /// An error related to parsing angles.
    #[error("{0}\n\nAngles may be decimal degrees (e.g. 59.086), have a unit (e.g. 1.03rad, 59.086deg) or be sexagesimal (e.g. 59:05:10, 59d05m10s)")]
    AngleParse(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// The supplied arguments don't make sense together.
    #[error("{0}")]
    InvalidArgs(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<ConvertArgsError> for Altaz2HadecError {
    fn from(e: ConvertArgsError) -> Self {
        match e {
            ConvertArgsError::NoAltitudes
            | ConvertArgsError::NoAzimuths
            | ConvertArgsError::NoLatitudes
            | ConvertArgsError::InputAndCoordinates
            | ConvertArgsError::EmptyInput(_)
            | ConvertArgsError::BadRow { .. }
            | ConvertArgsError::RowNeedsLatitude { .. }
            | ConvertArgsError::OutputFileExtension(_) => Self::InvalidArgs(e.to_string()),
            ConvertArgsError::RowAngle { .. } => Self::AngleParse(e.to_string()),
            ConvertArgsError::Parse(e) => Self::from(e),
            ConvertArgsError::IO(e) => Self::from(e),
        }
    }
}

impl From<CoordError> for Altaz2HadecError {
    fn from(e: CoordError) -> Self {
        Self::Coord(e.to_string())
    }
}

impl From<UnitParseError> for Altaz2HadecError {
    fn from(e: UnitParseError) -> Self {
        Self::AngleParse(e.to_string())
    }
}

impl From<std::io::Error> for Altaz2HadecError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<serde_json::Error> for Altaz2HadecError {
    fn from(e: serde_json::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<toml::ser::Error> for Altaz2HadecError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
