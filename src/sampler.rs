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
use crate::math::{
    b_spline, blackman, blackman_bessel, blackman_sinc, box_filter, catmull_rom, gaussian,
    hamming, hanning, hermite_spline, lanczos, mitchell_netravalli, quadric, sinc, triangle,
};

/// Reconstruction kernel selector
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ResamplingFunction {
    /// Box with zero support; always widened to a single source sample
    Point,
    Box,
    Triangle,
    Hermite,
    Hanning,
    Hamming,
    Blackman,
    Gaussian,
    Quadratic,
    /// Cubic B-spline
    Cubic,
    /// Catmull-Rom spline
    Catrom,
    /// Mitchell-Netravali, B = C = 1/3
    Mitchell,
    /// Three lobes Lanczos
    Lanczos,
    /// Jinc windowed with Blackman
    BlackmanBessel,
    /// Sinc windowed with Blackman
    BlackmanSinc,
    /// Plain sinc truncated at radius 4
    Sinc,
}

/// Kernel used when no kernel were requested
pub const DEFAULT_RESAMPLING_FUNCTION: ResamplingFunction = ResamplingFunction::Mitchell;

/// Weight function with its natural support radius.
///
/// The function receives the distance from the sample center in source pixels, already scaled
/// into the kernel domain, and the natural support of the kernel.
#[derive(Debug, Copy, Clone)]
pub struct ResamplingFilter {
    pub kernel: fn(f64, f64) -> f64,
    pub support: f64,
}

impl ResamplingFilter {
    const fn new(kernel: fn(f64, f64) -> f64, support: f64) -> ResamplingFilter {
        ResamplingFilter { kernel, support }
    }

    /// Evaluates the kernel at `x`
    #[inline(always)]
    pub fn weight(&self, x: f64) -> f64 {
        (self.kernel)(x, self.support)
    }
}

const FILTERS: [ResamplingFilter; 16] = [
    ResamplingFilter::new(box_filter::<f64>, 0.0),
    ResamplingFilter::new(box_filter::<f64>, 0.5),
    ResamplingFilter::new(triangle::<f64>, 1.0),
    ResamplingFilter::new(hermite_spline::<f64>, 1.0),
    ResamplingFilter::new(hanning::<f64>, 1.0),
    ResamplingFilter::new(hamming::<f64>, 1.0),
    ResamplingFilter::new(blackman::<f64>, 1.0),
    ResamplingFilter::new(gaussian::<f64>, 1.25),
    ResamplingFilter::new(quadric::<f64>, 1.5),
    ResamplingFilter::new(b_spline::<f64>, 2.0),
    ResamplingFilter::new(catmull_rom::<f64>, 2.0),
    ResamplingFilter::new(mitchell_netravalli::<f64>, 2.0),
    ResamplingFilter::new(lanczos::<f64>, 3.0),
    ResamplingFilter::new(blackman_bessel, 3.2383),
    ResamplingFilter::new(blackman_sinc::<f64>, 4.0),
    ResamplingFilter::new(sinc::<f64>, 4.0),
];

impl ResamplingFunction {
    /// Every available kernel, in table order
    pub const ALL: [ResamplingFunction; 16] = [
        ResamplingFunction::Point,
        ResamplingFunction::Box,
        ResamplingFunction::Triangle,
        ResamplingFunction::Hermite,
        ResamplingFunction::Hanning,
        ResamplingFunction::Hamming,
        ResamplingFunction::Blackman,
        ResamplingFunction::Gaussian,
        ResamplingFunction::Quadratic,
        ResamplingFunction::Cubic,
        ResamplingFunction::Catrom,
        ResamplingFunction::Mitchell,
        ResamplingFunction::Lanczos,
        ResamplingFunction::BlackmanBessel,
        ResamplingFunction::BlackmanSinc,
        ResamplingFunction::Sinc,
    ];

    #[inline]
    pub fn get_resampling_filter(&self) -> ResamplingFilter {
        FILTERS[*self as usize]
    }
}

impl From<u32> for ResamplingFunction {
    /// Unknown values fall back to [`DEFAULT_RESAMPLING_FUNCTION`]
    fn from(value: u32) -> Self {
        ResamplingFunction::ALL
            .get(value as usize)
            .copied()
            .unwrap_or(DEFAULT_RESAMPLING_FUNCTION)
    }
}
