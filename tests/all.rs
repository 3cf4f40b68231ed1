// This file is part of the softf32 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use softf32::F32;

/// Test floating-point identity like Object.is in JavaScript
///
/// NaNs are considered identical to each other, while +0 and -0 are
/// considered different.
const fn same_f32(x: f32, y: f32) -> bool {
    x.to_bits() == y.to_bits() || x.is_nan() && y.is_nan()
}

/// Distance in units in the last place between numbers of the same sign
fn ulps(x: f32, y: f32) -> u32 {
    x.to_bits().abs_diff(y.to_bits())
}

/// Hundredths in `range`, sampled every `step`
fn hundredths(range: core::ops::Range<i32>, step: usize) -> impl Iterator<Item = f32> {
    range.step_by(step).map(|i| i as f32 / 100.0)
}

/// Interesting finite inputs for rounding
fn finite_samples() -> impl Iterator<Item = f32> {
    let bits = (0..0x7F80_0000).step_by(0x1_0001);
    let edges = [0.5, 1.0, 1.5, 2.5, 8_388_607.5, 8_388_608.0, 1e-40, f32::MAX];
    bits.map(f32::from_bits).chain(edges).chain(hundredths(-1000..1000, 3))
}

fn check_accuracy(f: fn(F32) -> F32, reference: fn(f64) -> f64, xs: impl Iterator<Item = f32>) {
    for x in xs {
        let expected = reference(f64::from(x)) as f32;
        let actual = f(F32::from_f32(x)).to_f32();
        assert!(ulps(actual, expected) <= 3, "f({x}) = {actual}, expected {expected}");
    }
}

/// Random finite number, often with an exponent near `near`
fn random_finite(rng: &mut SmallRng, near: Option<f32>) -> f32 {
    loop {
        let mut bits: u32 = rng.gen();

        if let Some(x) = near.filter(|_| rng.gen()) {
            let field = ((x.to_bits() >> 23) & 0xFF) + rng.gen_range(0..4);
            bits = (bits & 0x807F_FFFF) | (field.saturating_sub(2).min(0xFE) << 23);
        }

        let x = f32::from_bits(bits);

        if x.is_finite() {
            return x;
        }
    }
}

#[test]
fn test_arithmetic_matches_native() {
    let mut rng = SmallRng::seed_from_u64(0x5EED_F32);

    for _ in 0..200_000 {
        let x = random_finite(&mut rng, None);
        let y = random_finite(&mut rng, Some(x));
        let (a, b) = (F32::from_f32(x), F32::from_f32(y));

        assert!(same_f32((a + b).to_f32(), x + y), "{x} + {y}");
        assert!(same_f32((a - b).to_f32(), x - y), "{x} - {y}");
        assert!(same_f32((a * b).to_f32(), x * y), "{x} * {y}");
        assert!(same_f32((a / b).to_f32(), x / y), "{x} / {y}");
        assert!(same_f32(a.sqrt().to_f32(), x.sqrt()), "sqrt({x})");
        assert!(same_f32(b.recip().to_f32(), 1.0 / y), "1 / {y}");
    }
}

#[test]
fn test_special_exponents() {
    for f in [F32::exp2, F32::exp, F32::exp10] {
        assert!(same_f32(f(F32::ZERO).to_f32(), 1.0));
        assert!(same_f32(f(F32::NEG_ZERO).to_f32(), 1.0));
        assert!(same_f32(f(F32::INFINITY).to_f32(), f32::INFINITY));
        assert!(same_f32(f(F32::NEG_INFINITY).to_f32(), 0.0));
        assert!(f(F32::NAN).is_nan());
        assert!(f(F32::from_bits(0xFF80_0001)).is_nan());
    }
}

#[test]
fn test_exp2_accuracy() {
    check_accuracy(F32::exp2, libm::exp2, hundredths(-14900..12800, 7));
}

#[test]
fn test_exp_accuracy() {
    check_accuracy(F32::exp, libm::exp, hundredths(-10300..8870, 7));
}

#[test]
fn test_exp10_accuracy() {
    check_accuracy(F32::exp10, libm::exp10, hundredths(-4480..3850, 3));
}

#[test]
fn test_exp2_monotonic() {
    let values: Vec<_> = hundredths(-15000..13000, 1).map(|x| F32::from_f32(x).exp2().to_f32()).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));

    let values: Vec<_> = (-400..=400).map(|i| F32::from_f32(i as f32 / 4.0).exp2().to_f32()).collect();
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_reciprocal_symmetry() {
    for t in hundredths(-6000..6000, 1) {
        let t = F32::from_f32(t);
        let product = (t.exp2() * (-t).exp2()).to_f32();
        assert!(ulps(product, 1.0) <= 1, "2^{t:?} 2^-{t:?} = {product}");
    }
}

#[test]
fn test_rounding_matches_libm() {
    for x in finite_samples().flat_map(|x| [x, -x]) {
        let y = F32::from_f32(x);
        assert!(same_f32(y.ceil().to_f32(), libm::ceilf(x)), "ceil({x})");
        assert!(same_f32(y.floor().to_f32(), libm::floorf(x)), "floor({x})");
        assert!(same_f32(y.trunc().to_f32(), libm::truncf(x)), "trunc({x})");
        assert_eq!(y.fract().to_f32(), x - libm::truncf(x), "fract({x})");
    }
}

#[test]
fn test_rounding_properties() {
    for x in finite_samples().flat_map(|x| [x, -x]).map(F32::from_f32) {
        let (ceil, floor) = (x.ceil(), x.floor());

        assert!(same_f32(ceil.ceil().to_f32(), ceil.to_f32()));
        assert!(same_f32(floor.floor().to_f32(), floor.to_f32()));
        assert!(same_f32((-x).ceil().to_f32(), (-floor).to_f32()));
        assert!(same_f32((-x).floor().to_f32(), (-ceil).to_f32()));
        assert!(same_f32(ceil.floor().to_f32(), ceil.to_f32()));
        assert!(same_f32(floor.ceil().to_f32(), floor.to_f32()));
    }
}

#[test]
fn test_rounding_passthrough() {
    for bits in [0, 0x8000_0000, 0x7F80_0000, 0xFF80_0000, 0x7FC0_0000, 0xFFA0_1234] {
        let x = F32::from_bits(bits);
        assert_eq!(x.ceil().to_bits(), bits);
        assert_eq!(x.floor().to_bits(), bits);
        assert_eq!(x.trunc().to_bits(), bits);
    }
}
