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
use crate::math::sinc::Trigonometry;
use num_traits::{AsPrimitive, Float};

#[inline(always)]
pub(crate) fn hanning<V: Copy + Float + Trigonometry + 'static>(x: V, support: V) -> V
where
    f64: AsPrimitive<V>,
{
    if x.abs() > support {
        return 0f64.as_();
    }
    0.5f64.as_() + 0.5f64.as_() * x.f_cospi()
}

#[inline(always)]
pub(crate) fn hamming<V: Copy + Float + Trigonometry + 'static>(x: V, support: V) -> V
where
    f64: AsPrimitive<V>,
{
    if x.abs() > support {
        return 0f64.as_();
    }
    0.54f64.as_() + 0.46f64.as_() * x.f_cospi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raised_cosines() {
        assert!((hanning(0f64, 1.) - 1.0).abs() < 1e-15);
        assert!(hanning(1f64, 1.).abs() < 1e-15);
        assert!((hanning(0.5f64, 1.) - 0.5).abs() < 1e-15);
        assert!((hamming(0f64, 1.) - 1.0).abs() < 1e-15);
        assert!((hamming(1f64, 1.) - 0.08).abs() < 1e-15);
        assert_eq!(hamming(1.01f64, 1.), 0.0);
        assert_eq!(hanning(-1.01f64, 1.), 0.0);
    }
}
