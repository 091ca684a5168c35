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
use num_traits::{AsPrimitive, MulAdd, Signed};
use std::ops::{Add, Mul, Neg, Sub};

pub(crate) fn quadric<
    V: Copy
        + Mul<Output = V>
        + Signed
        + Sub<Output = V>
        + 'static
        + PartialOrd
        + Add<V, Output = V>
        + MulAdd<V, Output = V>
        + Neg<Output = V>,
>(
    x: V,
    _: V,
) -> V
where
    f64: AsPrimitive<V>,
{
    let x = x.abs();
    if x < 0.5f64.as_() {
        return mla(-x, x, 0.75f64.as_());
    } else if x < 1.5f64.as_() {
        let t = x - 1.5f64.as_();
        return 0.5f64.as_() * t * t;
    }
    0f64.as_()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadric_is_continuous_at_knots() {
        let left = quadric(0.5f64 - 1e-9, 1.5);
        let right = quadric(0.5f64, 1.5);
        assert!((left - right).abs() < 1e-8);
        assert_eq!(quadric(0f64, 1.5), 0.75);
        assert_eq!(quadric(1.5f64, 1.5), 0.0);
        assert_eq!(quadric(-1.0f64, 1.5), 0.125);
    }
}
