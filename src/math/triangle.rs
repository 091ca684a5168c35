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
use num_traits::AsPrimitive;
use std::ops::{Add, Sub};

/// Unit box on `[-0.5, 0.5)`
#[inline(always)]
pub(crate) fn box_filter<V: Copy + PartialOrd + 'static>(x: V, _: V) -> V
where
    f64: AsPrimitive<V>,
{
    if x >= (-0.5f64).as_() && x < 0.5f64.as_() {
        1f64.as_()
    } else {
        0f64.as_()
    }
}

#[inline(always)]
pub(crate) fn triangle<V: Copy + PartialOrd + Add<Output = V> + Sub<Output = V> + 'static>(
    x: V,
    _: V,
) -> V
where
    f64: AsPrimitive<V>,
{
    if x < (-1f64).as_() {
        0f64.as_()
    } else if x < 0f64.as_() {
        1f64.as_() + x
    } else if x < 1f64.as_() {
        1f64.as_() - x
    } else {
        0f64.as_()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_is_half_open() {
        assert_eq!(box_filter(-0.5f64, 0.5), 1.0);
        assert_eq!(box_filter(0.49f64, 0.5), 1.0);
        assert_eq!(box_filter(0.5f64, 0.5), 0.0);
        assert_eq!(box_filter(-0.51f64, 0.5), 0.0);
    }

    #[test]
    fn triangle_peaks_at_zero() {
        assert_eq!(triangle(0f64, 1.), 1.0);
        assert_eq!(triangle(0.25f64, 1.), 0.75);
        assert_eq!(triangle(-0.25f64, 1.), 0.75);
        assert_eq!(triangle(1f64, 1.), 0.0);
        assert_eq!(triangle(-1.5f32, 1.), 0.0);
    }
}
