// This file is part of the softf32 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Single-precision exponentials and rounding without an FPU
//!
//! [`F32`] holds the bits of an IEEE 754 binary32 number.  Every operation
//! on it is carried out with integer arithmetic on an unpacked working
//! value, [`TmpFloat`], so the results do not depend on the host's
//! floating-point hardware, or lack thereof.
//!
//! ```
//! use softf32::F32;
//!
//! assert_eq!(F32::from_f32(1.0).exp2().to_f32(), 2.0);
//! assert_eq!(F32::from_f32(-2.3).floor().to_f32(), -3.0);
//! ```
#![no_std]

pub mod detail;
mod exp;
mod round;
pub mod tmp;

pub use tmp::TmpFloat;

use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// IEEE 754 binary32 number stored as its bit pattern
///
/// Arithmetic operators and [`F32::sqrt`] round to nearest even, matching
/// native `f32`.
#[derive(Debug, Clone, Copy)]
pub struct F32(u32);

impl F32 {
    pub const RADIX: u32 = 2;
    pub const MANTISSA_DIGITS: u32 = 24;
    pub const MAX_EXP: i32 = 128;
    pub const MIN_EXP: i32 = -125;

    pub const ZERO: Self = Self(0);
    pub const NEG_ZERO: Self = Self(0x8000_0000);
    pub const ONE: Self = Self(0x3F80_0000);
    pub const INFINITY: Self = Self(0x7F80_0000);
    pub const NEG_INFINITY: Self = Self(0xFF80_0000);
    pub const NAN: Self = Self(0x7FC0_0000);

    #[must_use]
    pub const fn from_bits(v: u32) -> Self {
        Self(v)
    }

    #[must_use]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Reinterpret a native `f32`, no arithmetic involved
    #[must_use]
    pub const fn from_f32(x: f32) -> Self {
        Self(x.to_bits())
    }

    #[must_use]
    pub const fn to_f32(self) -> f32 {
        f32::from_bits(self.0)
    }

    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.0 & 0x7FFF_FFFF > 0x7F80_0000
    }

    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.0 & 0x7FFF_FFFF == 0x7F80_0000
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0 & 0x7FFF_FFFF < 0x7F80_0000
    }

    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.0 >> 31 != 0
    }

    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0 & 0x7FFF_FFFF)
    }

    /// Unpack into the working representation
    #[must_use]
    pub fn load(self) -> TmpFloat {
        detail::decode(self.0)
    }

    /// Pack a working value, rounding to nearest even
    #[must_use]
    pub fn store(x: TmpFloat) -> Self {
        Self(detail::encode(x))
    }

    /// Correctly rounded 1 / `self`
    #[must_use]
    pub fn recip(self) -> Self {
        Self::store(self.load().recip())
    }

    /// Correctly rounded square root, NaN for negative numbers except -0
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self::store(self.load().sqrt())
    }
}

impl From<f32> for F32 {
    fn from(x: f32) -> Self {
        Self::from_f32(x)
    }
}

impl From<F32> for f32 {
    fn from(x: F32) -> Self {
        x.to_f32()
    }
}

impl PartialEq for F32 {
    fn eq(&self, other: &Self) -> bool {
        self.load() == other.load()
    }
}

impl PartialOrd for F32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.load().partial_cmp(&other.load())
    }
}

impl Neg for F32 {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0 ^ 0x8000_0000)
    }
}

impl Add for F32 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::store(self.load() + other.load())
    }
}

impl Sub for F32 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::store(self.load() - other.load())
    }
}

impl Mul for F32 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::store(self.load() * other.load())
    }
}

impl Div for F32 {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Self::store(self.load() / other.load())
    }
}

impl num_traits::Zero for F32 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 & 0x7FFF_FFFF == 0
    }
}

impl num_traits::One for F32 {
    fn one() -> Self {
        Self::ONE
    }
}

impl num_traits::Inv for F32 {
    type Output = Self;

    fn inv(self) -> Self {
        self.recip()
    }
}
