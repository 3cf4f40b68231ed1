// This file is part of the softf32 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rounding to integers

use crate::tmp::TmpFloat;
use crate::F32;

/// Ceiling of a positive normal value
fn ceil_magnitude(x: TmpFloat) -> TmpFloat {
    match x.trunc_fract() {
        (integer, TmpFloat::Normal { .. }) => integer + TmpFloat::ONE,
        (integer, _) => integer,
    }
}

/// Floor of a positive normal value
fn floor_magnitude(x: TmpFloat) -> TmpFloat {
    x.trunc_fract().0
}

impl F32 {
    /// Round a normal number through its magnitude
    ///
    /// Positive numbers go to `up` and negative numbers to `down`, since
    /// rounding a negative number up rounds its magnitude down.  Zeros,
    /// infinities, and NaNs are returned as is.
    fn round_magnitude(
        self,
        up: fn(TmpFloat) -> TmpFloat,
        down: fn(TmpFloat) -> TmpFloat,
    ) -> Self {
        match self.load() {
            x @ TmpFloat::Normal { sign, .. } => {
                let y = if sign { down(x.abs()) } else { up(x.abs()) };
                Self::store(y.with_sign(sign))
            }
            _ => self,
        }
    }

    /// Smallest integer not less than `self`
    #[must_use]
    pub fn ceil(self) -> Self {
        self.round_magnitude(ceil_magnitude, floor_magnitude)
    }

    /// Largest integer not greater than `self`
    #[must_use]
    pub fn floor(self) -> Self {
        self.round_magnitude(floor_magnitude, ceil_magnitude)
    }

    /// Integer part, rounded toward zero
    #[must_use]
    pub fn trunc(self) -> Self {
        self.round_magnitude(floor_magnitude, floor_magnitude)
    }

    /// Fractional part with the sign of `self`
    ///
    /// Infinities yield zeros of the same sign, and NaN stays NaN.
    #[must_use]
    pub fn fract(self) -> Self {
        Self::store(self.load().trunc_fract().1)
    }
}
