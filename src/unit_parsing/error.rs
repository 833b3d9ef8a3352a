// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitParseError {
    #[error("Successfully parsed an angle unit ({unit}), but could not parse the numerical component of '{input}'")]
    GotUnitButCantParse { input: String, unit: &'static str },

    #[error("Sexagesimal angle '{input}' has arcminutes or arcseconds outside of [0, 60)")]
    SexagesimalOutOfRange { input: String },

    #[error("Could not parse '{input}' as an angle")]
    Unknown { input: String },
}
