/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::math::mla;
use num_traits::{AsPrimitive, MulAdd};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Mitchell–Netravali cubic family, zero outside of `|x| < 2`.
#[inline(always)]
pub(crate) fn bc_spline<
    V: Copy
        + Add<Output = V>
        + Mul<Output = V>
        + Sub<Output = V>
        + Div<Output = V>
        + MulAdd<V, Output = V>
        + 'static
        + PartialOrd
        + Neg<Output = V>,
>(
    d: V,
    b: V,
    c: V,
) -> V
where
    f64: AsPrimitive<V>,
{
    let mut x = d;
    if x < 0f64.as_() {
        x = -x;
    }
    let dp = x * x;
    let tp = dp * x;
    let sixth: V = 1f64.as_() / 6f64.as_();
    if x < 1f64.as_() {
        let p3 = 12f64.as_() - 9f64.as_() * b - 6f64.as_() * c;
        let p2 = (-18f64).as_() + 12f64.as_() * b + 6f64.as_() * c;
        let p0 = 6f64.as_() - 2f64.as_() * b;
        return mla(p3, tp, mla(p2, dp, p0)) * sixth;
    } else if x < 2f64.as_() {
        let q3 = -b - 6f64.as_() * c;
        let q2 = 6f64.as_() * b + 30f64.as_() * c;
        let q1 = (-12f64).as_() * b - 48f64.as_() * c;
        let q0 = 8f64.as_() * b + 24f64.as_() * c;
        return mla(q3, tp, mla(q2, dp, mla(q1, x, q0))) * sixth;
    }
    0f64.as_()
}

macro_rules! bc_kernel {
    ($name:ident, $b:expr, $c:expr) => {
        #[inline(always)]
        pub(crate) fn $name<
            V: Copy
                + Add<Output = V>
                + Mul<Output = V>
                + Sub<Output = V>
                + Div<Output = V>
                + MulAdd<V, Output = V>
                + 'static
                + PartialOrd
                + Neg<Output = V>,
        >(
            x: V,
            _: V,
        ) -> V
        where
            f64: AsPrimitive<V>,
        {
            let b: f64 = $b;
            let c: f64 = $c;
            bc_spline(x, b.as_(), c.as_())
        }
    };
}

bc_kernel!(hermite_spline, 0., 0.);
bc_kernel!(b_spline, 1., 0.);
bc_kernel!(catmull_rom, 0., 0.5);
bc_kernel!(mitchell_netravalli, 1. / 3., 1. / 3.);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hermite_matches_closed_form() {
        for i in -20..=20 {
            let x = i as f64 * 0.05;
            let ax = x.abs();
            let expected = (2.0 * ax - 3.0) * ax * ax + 1.0;
            assert!((hermite_spline(x, 1.0) - expected).abs() < 1e-12, "x = {x}");
        }
        assert_eq!(hermite_spline(1.5f64, 1.0), 0.0);
    }

    #[test]
    fn catrom_interpolates_samples() {
        assert!((catmull_rom(0f64, 2.0) - 1.0).abs() < 1e-12);
        assert!(catmull_rom(1f64, 2.0).abs() < 1e-12);
        assert!(catmull_rom(-1f64, 2.0).abs() < 1e-12);
        assert_eq!(catmull_rom(2f64, 2.0), 0.0);
        assert!(catmull_rom(1.5f64, 2.0) < 0.0);
    }

    #[test]
    fn b_spline_is_smoothing() {
        assert!((b_spline(0f64, 2.0) - 4.0 / 6.0).abs() < 1e-12);
        assert!((b_spline(1f64, 2.0) - 1.0 / 6.0).abs() < 1e-12);
        assert!((b_spline(-1.5f64, 2.0) - 0.125 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn mitchell_partition_of_unity() {
        for i in 0..10 {
            let t = i as f64 * 0.1;
            let sum = mitchell_netravalli(t - 2.0, 2.0)
                + mitchell_netravalli(t - 1.0, 2.0)
                + mitchell_netravalli(t, 2.0)
                + mitchell_netravalli(t + 1.0, 2.0);
            assert!((sum - 1.0).abs() < 1e-12, "t = {t}, sum = {sum}");
        }
    }
}
