// This file is part of the softf32 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Implementation details
//!
//! Conversion between binary32 bit patterns and [`TmpFloat`].  This module is
//! not considered part of the public API.

use crate::tmp::{TmpFloat, ONE};

/// Exponent bias of binary32
const BIAS: i32 = 127;

/// Explicit mantissa bits of binary32
const MANTISSA_BITS: u32 = 23;

/// Bits of the working mantissa dropped when packing a normal number
const EXCESS: u32 = ONE.trailing_zeros() - MANTISSA_BITS;

/// Load binary32 bits into the working representation
#[must_use]
pub fn decode(bits: u32) -> TmpFloat {
    let sign = bits >> 31 != 0;
    let field = (bits >> MANTISSA_BITS) & 0xFF;
    let fraction = bits & ((1 << MANTISSA_BITS) - 1);

    match (field, fraction) {
        (0, 0) => TmpFloat::Zero { sign },
        (0, _) => TmpFloat::from_wide(sign, fraction.into(), MANTISSA_BITS, 1 - BIAS),
        (0xFF, 0) => TmpFloat::Infinite { sign },
        (0xFF, _) => TmpFloat::Nan { sign },
        #[allow(clippy::cast_possible_wrap)]
        _ => TmpFloat::Normal {
            sign,
            mantissa: (fraction | (1 << MANTISSA_BITS)) << EXCESS,
            exponent: field as i32 - BIAS,
        },
    }
}

/// Store a working value as binary32 bits, rounding to nearest even
///
/// Results too large for binary32 become infinite, and tiny results
/// gradually underflow through subnormals to zero.  NaN is canonicalized
/// with its sign kept.
#[must_use]
pub fn encode(x: TmpFloat) -> u32 {
    let sign = u32::from(x.sign()) << 31;

    match x {
        TmpFloat::Zero { .. } => sign,
        TmpFloat::Infinite { .. } => sign | 0x7F80_0000,
        TmpFloat::Nan { .. } => sign | 0x7FC0_0000,
        TmpFloat::Normal { mantissa, exponent, .. } => {
            let biased = exponent + BIAS;

            if biased >= 0xFF {
                return sign | 0x7F80_0000;
            }

            #[allow(clippy::cast_sign_loss)]
            let shift = EXCESS + (1 - biased).max(0) as u32;

            if shift > 31 {
                return sign;
            }

            let kept = mantissa >> shift;
            let rest = mantissa & ((1 << shift) - 1);
            let half = 1 << (shift - 1);
            let rounded = kept + u32::from(rest > half || (rest == half && kept & 1 != 0));

            // A carry out of the mantissa bumps the exponent field, possibly
            // to infinity, which is exactly what rounding demands.
            #[allow(clippy::cast_sign_loss)]
            let field = (biased - 1).max(0) as u32;
            sign | ((field << MANTISSA_BITS) + rounded)
        }
    }
}
