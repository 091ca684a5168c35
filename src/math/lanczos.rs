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
use crate::math::sinc::Sinc;
use num_traits::{AsPrimitive, Signed};
use std::ops::{Div, Mul};

const LOBES: f64 = 3.;

/// Three-lobe Lanczos, `sinc(x)·sinc(x/3)`.
#[inline]
pub(crate) fn lanczos<
    V: Copy + Signed + PartialOrd + Sinc + Mul<Output = V> + Div<Output = V> + 'static,
>(
    x: V,
    _: V,
) -> V
where
    f64: AsPrimitive<V>,
{
    let lobes: V = LOBES.as_();
    if x.abs() < lobes {
        return x.sinc() * (x / lobes).sinc();
    }
    0f64.as_()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanczos_shape() {
        assert!((lanczos(0f64, 3.) - 1.0).abs() < 1e-15);
        assert!(lanczos(1f64, 3.).abs() < 1e-15);
        assert!(lanczos(2f64, 3.).abs() < 1e-15);
        assert_eq!(lanczos(3f64, 3.), 0.0);
        assert_eq!(lanczos(-3.5f64, 3.), 0.0);
        // first negative lobe
        assert!(lanczos(1.5f64, 3.) < 0.0);
        assert!((lanczos(0.7f64, 3.) - lanczos(-0.7f64, 3.)).abs() < 1e-15);
    }
}
