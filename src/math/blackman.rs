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
use crate::math::bessel::bessel;
use crate::math::sinc::{Sinc, Trigonometry};
use num_traits::{AsPrimitive, Float};

/// Blackman window over `[-1, 1]`, zero at both ends.
#[inline(always)]
pub(crate) fn blackman_window<V: Copy + Float + Trigonometry + 'static>(x: V) -> V
where
    f64: AsPrimitive<V>,
{
    0.42f64.as_() + 0.5f64.as_() * x.f_cospi() + 0.08f64.as_() * (2f64.as_() * x).f_cospi()
}

#[inline(always)]
pub(crate) fn blackman<V: Copy + Float + Trigonometry + 'static>(x: V, support: V) -> V
where
    f64: AsPrimitive<V>,
{
    if x.abs() > support {
        return 0f64.as_();
    }
    blackman_window(x)
}

#[inline]
pub(crate) fn blackman_sinc<V: Copy + Float + Trigonometry + Sinc + 'static>(
    x: V,
    support: V,
) -> V
where
    f64: AsPrimitive<V>,
{
    if x.abs() > support {
        return 0f64.as_();
    }
    blackman_window(x / support) * x.sinc()
}

#[inline]
pub(crate) fn blackman_bessel(x: f64, support: f64) -> f64 {
    if x.abs() > support {
        return 0.;
    }
    blackman_window(x / support) * bessel(x, support)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_endpoints() {
        assert!((blackman_window(0f64) - 1.0).abs() < 1e-15);
        assert!(blackman_window(1f64).abs() < 1e-15);
        assert!(blackman_window(-1f64).abs() < 1e-15);
        assert_eq!(blackman(1.5f64, 1.), 0.0);
    }

    #[test]
    fn windowed_kernels_vanish_at_support() {
        assert!(blackman_sinc(4f64, 4.).abs() < 1e-15);
        assert!((blackman_sinc(0f64, 4.) - 1.0).abs() < 1e-15);
        assert!(blackman_bessel(3.2383, 3.2383).abs() < 1e-15);
        assert!((blackman_bessel(0., 3.2383) - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
        assert_eq!(blackman_bessel(3.3, 3.2383), 0.0);
    }
}
