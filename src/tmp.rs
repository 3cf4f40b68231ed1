// This file is part of the softf32 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Working representation for intermediate results
//!
//! A [`TmpFloat`] carries 31 significant bits and a wide exponent, so chains
//! of operations lose less than the packed format would.  Every operation
//! here is integer-only.

use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Fixed-point position of 1.0 in a normal mantissa
pub const ONE: u32 = 1 << 30;

/// Largest exponent of a normal working value
pub const MAX_EXP: i32 = 0x3FFF;

/// Smallest exponent of a normal working value
pub const MIN_EXP: i32 = -0x3FFF;

/// Unpacked floating-point value
///
/// A normal value is `mantissa / ONE * 2^exponent` with `mantissa` in
/// `[ONE, 2 * ONE)`, negated if `sign` is set.
#[derive(Debug, Clone, Copy)]
pub enum TmpFloat {
    Normal { sign: bool, mantissa: u32, exponent: i32 },
    Infinite { sign: bool },
    Nan { sign: bool },
    Zero { sign: bool },
}

impl TmpFloat {
    /// 1.0
    pub const ONE: Self = Self::normal(false, ONE, 0);

    /// 2.0
    pub const TWO: Self = Self::normal(false, ONE, 1);

    /// Initialize a normal value from its components
    ///
    /// # Panics
    ///
    /// Panics if `mantissa` is not normalized.
    #[must_use]
    pub const fn normal(sign: bool, mantissa: u32, exponent: i32) -> Self {
        assert!(mantissa >= ONE && mantissa < ONE << 1, "unnormalized mantissa");
        Self::Normal { sign, mantissa, exponent }
    }

    /// Normalize `wide / 2^point * 2^exponent`, rounding to odd
    ///
    /// Discarded bits are folded into the lowest mantissa bit, so a later
    /// rounding to 29 or fewer bits is as correct as if done directly on
    /// `wide`.  Exponents outside the working range saturate to zero or
    /// infinity.
    #[must_use]
    pub fn from_wide(sign: bool, wide: u64, point: u32, exponent: i32) -> Self {
        if wide == 0 {
            return Self::Zero { sign };
        }

        let msb = 63 - wide.leading_zeros();
        #[allow(clippy::cast_possible_wrap)]
        let exponent = exponent + msb as i32 - point as i32;

        #[allow(clippy::cast_possible_truncation)]
        let mantissa = match msb.checked_sub(30) {
            Some(shift) => {
                let sticky = wide & ((1 << shift) - 1) != 0;
                (wide >> shift) as u32 | u32::from(sticky)
            }
            None => (wide << (30 - msb)) as u32,
        };

        if exponent > MAX_EXP {
            Self::Infinite { sign }
        } else if exponent < MIN_EXP {
            Self::Zero { sign }
        } else {
            Self::Normal { sign, mantissa, exponent }
        }
    }

    #[must_use]
    pub const fn sign(self) -> bool {
        match self {
            Self::Normal { sign, .. }
            | Self::Infinite { sign }
            | Self::Nan { sign }
            | Self::Zero { sign } => sign,
        }
    }

    /// Replace the sign, keeping the classification and magnitude
    #[must_use]
    pub const fn with_sign(self, sign: bool) -> Self {
        match self {
            Self::Normal { mantissa, exponent, .. } => Self::Normal { sign, mantissa, exponent },
            Self::Infinite { .. } => Self::Infinite { sign },
            Self::Nan { .. } => Self::Nan { sign },
            Self::Zero { .. } => Self::Zero { sign },
        }
    }

    #[must_use]
    pub const fn abs(self) -> Self {
        self.with_sign(false)
    }

    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Normal { .. })
    }

    #[must_use]
    pub const fn is_nan(self) -> bool {
        matches!(self, Self::Nan { .. })
    }

    /// Multiplicative inverse
    #[must_use]
    pub fn recip(self) -> Self {
        Self::ONE / self
    }

    /// Square root, NaN for negative numbers except -0
    #[must_use]
    pub fn sqrt(self) -> Self {
        match self {
            Self::Nan { .. } | Self::Zero { .. } | Self::Infinite { sign: false } => self,
            Self::Infinite { sign: true } | Self::Normal { sign: true, .. } => Self::Nan { sign: false },
            Self::Normal { sign: false, mantissa, exponent } => {
                #[allow(clippy::cast_sign_loss)]
                let odd = exponent.rem_euclid(2) as u32;
                let square = u64::from(mantissa) << (32 + odd);
                let root = square.isqrt();
                let wide = (root << 1) | u64::from(root * root != square);
                #[allow(clippy::cast_possible_wrap)]
                let exponent = (exponent - odd as i32) / 2;
                Self::from_wide(false, wide, 32, exponent)
            }
        }
    }

    /// Split into the integer part truncated toward zero and the remainder
    ///
    /// Both parts carry the sign of `self`.  The remainder is `Zero` exactly
    /// when `self` is already integral.
    #[must_use]
    pub fn trunc_fract(self) -> (Self, Self) {
        match self {
            Self::Normal { sign, exponent, .. } if exponent < 0 => (Self::Zero { sign }, self),
            Self::Normal { sign, exponent: 30.., .. } => (self, Self::Zero { sign }),
            Self::Normal { sign, mantissa, exponent } => {
                #[allow(clippy::cast_sign_loss)]
                let mask = (1 << (30 - exponent as u32)) - 1;
                let integer = Self::Normal { sign, mantissa: mantissa & !mask, exponent };
                (integer, Self::from_wide(sign, u64::from(mantissa & mask), 30, exponent))
            }
            Self::Infinite { sign } => (self, Self::Zero { sign }),
            Self::Nan { .. } | Self::Zero { .. } => (self, self),
        }
    }

    /// Evaluate a polynomial at `self` with Horner's scheme
    ///
    /// Coefficients are ordered from the highest degree down to the constant
    /// term.  An empty slice is the zero polynomial.
    #[must_use]
    pub fn horner(self, coefficients: &[Self]) -> Self {
        coefficients.split_first().map_or(Self::Zero { sign: false }, |(&first, rest)| {
            rest.iter().fold(first, |acc, &c| acc * self + c)
        })
    }

    /// Magnitude ordering of non-NaN values
    fn cmp_magnitude(self, other: Self) -> Ordering {
        const fn rank(x: TmpFloat) -> u8 {
            match x {
                TmpFloat::Zero { .. } => 0,
                TmpFloat::Normal { .. } => 1,
                TmpFloat::Infinite { .. } | TmpFloat::Nan { .. } => 2,
            }
        }

        match (self, other) {
            (
                Self::Normal { mantissa: m, exponent: e, .. },
                Self::Normal { mantissa: n, exponent: f, .. },
            ) => e.cmp(&f).then(m.cmp(&n)),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl Neg for TmpFloat {
    type Output = Self;

    fn neg(self) -> Self {
        self.with_sign(!self.sign())
    }
}

impl Mul for TmpFloat {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let sign = self.sign() ^ other.sign();

        match (self, other) {
            (Self::Nan { .. }, _) => self,
            (_, Self::Nan { .. }) => other,
            (Self::Infinite { .. }, Self::Zero { .. }) | (Self::Zero { .. }, Self::Infinite { .. }) => {
                Self::Nan { sign }
            }
            (Self::Infinite { .. }, _) | (_, Self::Infinite { .. }) => Self::Infinite { sign },
            (Self::Zero { .. }, _) | (_, Self::Zero { .. }) => Self::Zero { sign },
            (
                Self::Normal { mantissa: m, exponent: e, .. },
                Self::Normal { mantissa: n, exponent: f, .. },
            ) => Self::from_wide(sign, u64::from(m) * u64::from(n), 60, e + f),
        }
    }
}

impl Div for TmpFloat {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        let sign = self.sign() ^ other.sign();

        match (self, other) {
            (Self::Nan { .. }, _) => self,
            (_, Self::Nan { .. }) => other,
            (Self::Infinite { .. }, Self::Infinite { .. }) | (Self::Zero { .. }, Self::Zero { .. }) => {
                Self::Nan { sign }
            }
            (Self::Infinite { .. }, _) | (_, Self::Zero { .. }) => Self::Infinite { sign },
            (Self::Zero { .. }, _) | (_, Self::Infinite { .. }) => Self::Zero { sign },
            (
                Self::Normal { mantissa: m, exponent: e, .. },
                Self::Normal { mantissa: n, exponent: f, .. },
            ) => {
                // At least 33 quotient bits, the lowest one sticky
                let dividend = u64::from(m) << 33;
                let divisor = u64::from(n);
                let wide = ((dividend / divisor) << 1) | u64::from(dividend % divisor != 0);
                Self::from_wide(sign, wide, 34, e - f)
            }
        }
    }
}

impl Add for TmpFloat {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Nan { .. }, _) => self,
            (_, Self::Nan { .. }) => other,
            (Self::Infinite { sign: s }, Self::Infinite { sign: t }) if s != t => Self::Nan { sign: false },
            (Self::Infinite { .. }, _) => self,
            (_, Self::Infinite { .. }) => other,
            (Self::Zero { sign: s }, Self::Zero { sign: t }) => Self::Zero { sign: s && t },
            (Self::Zero { .. }, _) => other,
            (_, Self::Zero { .. }) => self,
            (
                Self::Normal { sign: s, mantissa: m, exponent: e },
                Self::Normal { sign: t, mantissa: n, exponent: f },
            ) => {
                let ((sign, m, e), (t, n, f)) = if (e, m) >= (f, n) {
                    ((s, m, e), (t, n, f))
                } else {
                    ((t, n, f), (s, m, e))
                };

                // 32 guard bits, the lowest one sticky
                #[allow(clippy::cast_sign_loss)]
                let shift = (e - f) as u32;
                let hi = u64::from(m) << 32;
                let lo = u64::from(n) << 32;
                let lo = if shift < 64 {
                    let kept = lo >> shift;
                    kept | u64::from(kept << shift != lo)
                } else {
                    1
                };

                match if sign == t { hi + lo } else { hi - lo } {
                    0 => Self::Zero { sign: false },
                    wide => Self::from_wide(sign, wide, 62, e),
                }
            }
        }
    }
}

impl Sub for TmpFloat {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + -other
    }
}

impl PartialEq for TmpFloat {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for TmpFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Nan { .. }, _) | (_, Self::Nan { .. }) => None,
            (Self::Zero { .. }, Self::Zero { .. }) => Some(Ordering::Equal),
            (x, y) => Some(match (x.sign(), y.sign()) {
                (false, false) => x.cmp_magnitude(y),
                (true, true) => y.cmp_magnitude(x),
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
            }),
        }
    }
}
