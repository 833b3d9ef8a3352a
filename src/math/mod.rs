// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.


use crate::constants::FULL_CIRCLE_DEG;

// Make traditional trigonometry possible.
/// Sine.
///
/// # Examples
///
/// `assert_abs_diff_eq!(sin(FRAC_PI_6), 0.5);`
#[inline]
pub(crate) fn sin(x: f64) -> f64 {
    x.sin()
}

/// Cosine.
///
/// # Examples
///
/// `assert_abs_diff_eq!(cos(FRAC_PI_3), 0.5);`
#[inline]
pub(crate) fn cos(x: f64) -> f64 {
    x.cos()
}

/// Inverse sine. Arguments outside [-1, 1] produce NaN; nothing is clamped.
///
/// # Examples
///
/// `assert_abs_diff_eq!(asin(0.5), FRAC_PI_6);`
#[inline]
pub(crate) fn asin(x: f64) -> f64 {
    x.asin()
}

/// Inverse tangent. y comes before x, like the C function.
///
/// # Examples
///
/// `assert_abs_diff_eq!(atan2(1, -1), 3.0 / 4.0 * PI);`
// I don't like Rust's atan2. This fn helps me sleep at night knowing I'm using
// it correctly.
#[inline]
pub(crate) fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

/// Wrap an angle [degrees] into [0, 360). Negative zero comes out as positive
/// zero.
///
/// A negative angle has a full circle added first, and then the result is
/// reduced modulo 360. For anything that came out of `atan2` the modulo only
/// matters when adding 360 rounds up to exactly 360, but it also keeps wider
/// inputs in range.
#[inline]
pub(crate) fn wrap_degrees(mut angle: f64) -> f64 {
    if angle < 0.0 {
        angle += FULL_CIRCLE_DEG;
    }
    // Adding zero turns -0 into +0.
    angle % FULL_CIRCLE_DEG + 0.0
}
