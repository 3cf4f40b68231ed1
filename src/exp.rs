// This file is part of the softf32 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Exponential functions

use crate::tmp::{TmpFloat, ONE};
use crate::F32;

/// 2<sup>`t`</sup> overflows binary32 for every `t` above 149
const OVERFLOW: TmpFloat = TmpFloat::normal(false, 0x4A80_0000, 7);

/// log<sub>2</sub> e = 1 / ln 2
const LOG2_E: TmpFloat = TmpFloat::normal(false, 0x5C55_1D95, 0);

/// log<sub>2</sub> 10 = 3.32192809488736
const LOG2_10: TmpFloat = TmpFloat::normal(false, 0x6A4D_3C26, 1);

/// Minimax polynomial for 2<sup>`x`</sup> on [1, 2), highest degree first
///
/// 2.8872197873078e-7 x⁹ - 1.4763563218824e-7 x⁸ + 2.15261904753069e-5 x⁷
/// + 1.37098404058219e-4 x⁶ + 1.36403623995336e-3 x⁵ + 9.58011887214725e-3 x⁴
/// + 5.55360129552747e-2 x³ + 0.240209112897704 x² + 0.693152748608248 x
/// + 0.999999204745762
const EXP2_POLY: [TmpFloat; 10] = [
    TmpFloat::normal(false, 0x4D80_D2C4, -22),
    TmpFloat::normal(true, 0x4F42_E304, -23),
    TmpFloat::normal(false, 0x5A49_922F, -16),
    TmpFloat::normal(false, 0x47E1_094B, -13),
    TmpFloat::normal(false, 0x5964_BB0B, -10),
    TmpFloat::normal(false, 0x4E7A_F728, -7),
    TmpFloat::normal(false, 0x71BC_DD7B, -5),
    TmpFloat::normal(false, 0x7AFC_B058, -3),
    TmpFloat::normal(false, 0x58B9_3AB1, -1),
    TmpFloat::normal(false, 0x7FFF_F954, -1),
];

/// 2<sup>`t`</sup> for `t` that is infinite, NaN, or zero
///
/// # Panics
///
/// Panics if `t` is normal, which belongs to [`exp2_normal`].
#[must_use]
pub(crate) fn exp2_special(t: TmpFloat) -> F32 {
    match t {
        TmpFloat::Infinite { sign: true } => F32::ZERO,
        TmpFloat::Infinite { sign: false } => F32::INFINITY,
        TmpFloat::Nan { .. } => F32::NAN,
        TmpFloat::Zero { .. } => F32::ONE,
        TmpFloat::Normal { .. } => panic!("normal exponent {t:?} has no special power of 2"),
    }
}

/// 2<sup>`t`</sup> for positive normal `t`
///
/// Writing `t = m 2^e` with `m` in [1, 2), the result is `(2^m)^(2^e)`.  The
/// polynomial handles `2^m`, and the outer power is `e` squarings, or `-e`
/// square roots for negative `e`.  An infinite result is returned as soon as
/// it appears.
///
/// # Panics
///
/// Panics if `t` is not normal or is negative.  [`exp2_normal`] and the
/// public entry points never pass such values.
#[must_use]
pub(crate) fn exp2_kernel(t: TmpFloat) -> TmpFloat {
    let TmpFloat::Normal { sign: false, mantissa, exponent } = t else {
        panic!("exp2 kernel requires a positive normal exponent, got {t:?}");
    };

    if t > OVERFLOW {
        return TmpFloat::Infinite { sign: false };
    }

    let mut y = if mantissa == ONE {
        TmpFloat::TWO
    } else {
        TmpFloat::normal(false, mantissa, 0).horner(&EXP2_POLY)
    };

    for _ in 0..exponent.unsigned_abs() {
        if !y.is_normal() {
            break;
        }
        y = if exponent > 0 { y * y } else { y.sqrt() };
    }
    y
}

/// 2<sup>`t`</sup> for normal `t` of either sign
///
/// Negative exponents go through 2<sup>-t</sup> = 1 / 2<sup>t</sup>.
#[must_use]
pub(crate) fn exp2_normal(t: TmpFloat) -> TmpFloat {
    if t.sign() {
        exp2_kernel(-t).recip()
    } else {
        exp2_kernel(t)
    }
}

/// Raise 2 to `x * scale`, where `scale` is a positive constant
///
/// A finite binary32 `x` times either constant stays normal in the working
/// range, so the product goes straight to [`exp2_normal`].
fn exp2_scaled(x: F32, scale: Option<TmpFloat>) -> F32 {
    match x.load() {
        t @ TmpFloat::Normal { .. } => F32::store(exp2_normal(scale.map_or(t, |s| t * s))),
        t => exp2_special(t),
    }
}

impl F32 {
    /// 2<sup>`self`</sup>
    ///
    /// Exponents below -149 flush to zero, including those in (-150, -149)
    /// whose exact power would round up to the smallest subnormal.
    #[must_use]
    pub fn exp2(self) -> Self {
        exp2_scaled(self, None)
    }

    /// e<sup>`self`</sup>
    #[must_use]
    pub fn exp(self) -> Self {
        exp2_scaled(self, Some(LOG2_E))
    }

    /// 10<sup>`self`</sup>
    #[must_use]
    pub fn exp10(self) -> Self {
        exp2_scaled(self, Some(LOG2_10))
    }
}
