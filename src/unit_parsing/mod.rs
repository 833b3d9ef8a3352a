// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse strings into angles. The result is always in degrees.

mod error;

pub use error::UnitParseError;

use std::str::FromStr;

use regex::Regex;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::constants::{ARCMIN_PER_DEG, ARCSEC_PER_DEG};

lazy_static::lazy_static! {
    /// Degrees, arcminutes and arcseconds, e.g. "-59:05:10.5", "59d05m10s",
    /// "59°05'10\"". The sign applies to the whole angle.
    static ref DMS_REGEX: Regex = Regex::new(
        r#"^(?P<sign>[+-])?\s*(?P<deg>[0-9]+)\s*[:d°]\s*(?P<min>[0-9]+)\s*[:m'′]\s*(?P<sec>[0-9]+(?:\.[0-9]*)?)\s*(?:s|"|''|″)?$"#
    ).expect("DMS regex is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum AngleFormat {
    /// Degrees
    #[strum(to_string = "deg", serialize = "d", serialize = "°", serialize = "degrees")]
    Deg,

    /// Radians
    #[strum(to_string = "rad", serialize = "radians")]
    Rad,

    /// Sexagesimal degrees, arcminutes and arcseconds
    #[strum(to_string = "dms")]
    Dms,

    #[strum(to_string = "no unit")]
    NoUnit,
}

/// Parse a string that may be an angle with a unit attached to it, or in
/// sexagesimal (DMS) notation. Naked numbers are treated as degrees. The
/// returned angle is in degrees.
pub fn parse_angle(s: &str) -> Result<(f64, AngleFormat), UnitParseError> {
    let s = s.trim();

    // Try to parse a naked number.
    let maybe_number: Option<f64> = s.parse().ok();
    if let Some(number) = maybe_number {
        return Ok((number, AngleFormat::NoUnit));
    };

    if let Some(caps) = DMS_REGEX.captures(s) {
        let get = |name: &str| -> Result<f64, UnitParseError> {
            caps.name(name)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(|| UnitParseError::Unknown {
                    input: s.to_string(),
                })
        };
        let (deg, min, sec) = (get("deg")?, get("min")?, get("sec")?);
        if min >= 60.0 || sec >= 60.0 {
            return Err(UnitParseError::SexagesimalOutOfRange {
                input: s.to_string(),
            });
        }
        let magnitude = deg + min / ARCMIN_PER_DEG + sec / ARCSEC_PER_DEG;
        let angle = match caps.name("sign").map(|m| m.as_str()) {
            Some("-") => -magnitude,
            _ => magnitude,
        };
        return Ok((angle, AngleFormat::Dms));
    }

    // That didn't work; let's see if there's a unit on the end.
    let suffix = s
        .trim_start_matches(|c| char::is_numeric(c) || matches!(c, '.' | '-' | '+'))
        .trim();
    // Only explicit units may be a suffix.
    if let Ok(angle_format @ (AngleFormat::Deg | AngleFormat::Rad)) = AngleFormat::from_str(suffix) {
        let unit: &'static str = angle_format.into();
        let prefix = s[..s.len() - suffix.len()].trim();
        let number: f64 = match prefix.parse() {
            Ok(n) => n,
            Err(_) => {
                return Err(UnitParseError::GotUnitButCantParse {
                    input: s.to_string(),
                    unit,
                })
            }
        };
        let degrees = match angle_format {
            AngleFormat::Rad => number.to_degrees(),
            _ => number,
        };
        return Ok((degrees, angle_format));
    }

    // If we made it this far, we don't know how to parse the string.
    Err(UnitParseError::Unknown {
        input: s.to_string(),
    })
}

/// Parse many strings with [`parse_angle`], discarding the formats.
pub fn parse_angles<S: AsRef<str>>(strings: &[S]) -> Result<Vec<f64>, UnitParseError> {
    strings
        .iter()
        .map(|s| parse_angle(s.as_ref()).map(|(angle, _)| angle))
        .collect()
}
