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
use crate::channel_order::{Sample, TRANSPARENT_OPACITY};
use crate::mixed_storage::MixedStorage;

/// Color sums whose magnitude is below this are not renormalized
const DENSITY_EPSILON: f64 = 1.0e-12;

const RECIP_TRANSPARENT: f64 = 1. / TRANSPARENT_OPACITY as f64;

#[inline(always)]
fn mlaf(acc: f64, a: f64, b: f64) -> f64 {
    #[cfg(target_feature = "fma")]
    {
        f64::mul_add(a, b, acc)
    }
    #[cfg(not(target_feature = "fma"))]
    {
        a * b + acc
    }
}

/// Coverage weighted accumulator of a single output sample.
///
/// Color is weighted by `weight * coverage`, where coverage is the straight alpha
/// `255 - opacity`, and renormalized by the accumulated color weight on output. Coverage itself
/// is weighted by the kernel weight only. Fully transparent contributors thus never shift the
/// color of an output sample while still pulling its opacity.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ColorGroup {
    pub(crate) r: f64,
    pub(crate) g: f64,
    pub(crate) b: f64,
    pub(crate) a: f64,
    /// Sum of color weights
    pub(crate) density: f64,
}

impl ColorGroup {
    #[inline(always)]
    pub(crate) fn new() -> ColorGroup {
        ColorGroup::default()
    }

    #[inline(always)]
    pub(crate) fn accumulate(&mut self, sample: Sample, weight: f64) {
        let coverage = (TRANSPARENT_OPACITY - sample.opacity) as f64;
        let alpha_weight = weight * coverage * RECIP_TRANSPARENT;
        self.r = mlaf(self.r, alpha_weight, sample.red as f64);
        self.g = mlaf(self.g, alpha_weight, sample.green as f64);
        self.b = mlaf(self.b, alpha_weight, sample.blue as f64);
        self.a = mlaf(self.a, weight, coverage);
        self.density += alpha_weight;
    }

    #[inline(always)]
    pub(crate) fn to_sample(self) -> Sample {
        let normalize = if self.density.abs() > DENSITY_EPSILON {
            1. / self.density
        } else {
            1.
        };
        let coverage: u8 = self.a.to_mixed();
        Sample {
            red: (self.r * normalize).to_mixed(),
            green: (self.g * normalize).to_mixed(),
            blue: (self.b * normalize).to_mixed(),
            opacity: TRANSPARENT_OPACITY - coverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_neighbor_keeps_color() {
        let mut sums = ColorGroup::new();
        sums.accumulate(Sample::new(200, 100, 50, 0), 0.25);
        sums.accumulate(Sample::new(0, 255, 255, TRANSPARENT_OPACITY), 0.75);
        let color_only = sums;
        let mut reference = ColorGroup::new();
        reference.accumulate(Sample::new(200, 100, 50, 0), 0.25);
        assert_eq!(color_only.r, reference.r);
        assert_eq!(color_only.g, reference.g);
        assert_eq!(color_only.b, reference.b);

        let sample = sums.to_sample();
        assert_eq!((sample.red, sample.green, sample.blue), (200, 100, 50));
        // a quarter of the coverage survives
        assert_eq!(sample.opacity, 255 - 64);
    }

    #[test]
    fn all_transparent_stays_transparent() {
        let mut sums = ColorGroup::new();
        sums.accumulate(Sample::new(90, 90, 90, TRANSPARENT_OPACITY), 0.5);
        sums.accumulate(Sample::new(10, 10, 10, TRANSPARENT_OPACITY), 0.5);
        assert_eq!(sums.to_sample(), Sample::new(0, 0, 0, TRANSPARENT_OPACITY));
    }

    #[test]
    fn opaque_average() {
        let mut sums = ColorGroup::new();
        sums.accumulate(Sample::opaque(10, 20, 30), 0.5);
        sums.accumulate(Sample::opaque(20, 40, 62), 0.5);
        assert_eq!(sums.to_sample(), Sample::opaque(15, 30, 46));
    }

    #[test]
    fn negative_lobes_saturate() {
        let mut sums = ColorGroup::new();
        sums.accumulate(Sample::opaque(255, 0, 128), 1.2);
        sums.accumulate(Sample::opaque(0, 255, 128), -0.2);
        let sample = sums.to_sample();
        assert_eq!(sample.red, 255);
        assert_eq!(sample.green, 0);
        assert_eq!(sample.blue, 128);
        assert_eq!(sample.opacity, 0);
    }
}
