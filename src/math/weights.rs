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
use crate::sampler::ResamplingFilter;

/// Support radii at or below half a pixel are widened by this amount
pub(crate) const SUPPORT_EPSILON: f64 = 1.0e-12;

/// Single source sample participating in an output sample
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Contribution {
    /// Source index along the convolved axis
    pub pixel: usize,
    pub weight: f64,
}

/// Support radius of a kernel once blurred and widened for downscaling.
///
/// `axis_scale` is `destination / source` along the axis, so anything below 1 is a downscale
/// and stretches the kernel by `1 / axis_scale`.
#[inline]
pub fn filter_support(axis_scale: f64, support: f64, blur: f64) -> f64 {
    blur * (1. / axis_scale).max(1.) * support
}

/// Kernel placement for one axis, shared by every output coordinate of a pass.
#[derive(Debug, Copy, Clone)]
pub(crate) struct AxisSampling {
    pub(crate) filter: ResamplingFilter,
    pub(crate) axis_scale: f64,
    /// Maps source pixel distances into the kernel domain
    pub(crate) scale: f64,
    pub(crate) support: f64,
}

impl AxisSampling {
    pub(crate) fn new(axis_scale: f64, filter: ResamplingFilter, blur: f64) -> AxisSampling {
        let mut scale = blur * (1. / axis_scale).max(1.);
        let mut support = scale * filter.support;
        if support <= 0.5 {
            // Narrower than a pixel would starve the window
            support = 0.5 + SUPPORT_EPSILON;
            scale = 1.;
        }
        AxisSampling {
            filter,
            axis_scale,
            scale: 1. / scale,
            support,
        }
    }

    /// Most contributions a single output sample may have on this axis
    #[inline]
    pub(crate) fn max_contributions(&self) -> usize {
        contributions_capacity(self.support)
    }

    /// Fills `scratch` with the normalized contributions of `output` and returns the filled part.
    ///
    /// `scratch` must hold at least [`AxisSampling::max_contributions`] entries, surplus
    /// window positions are dropped otherwise.
    pub(crate) fn contributions<'a>(
        &self,
        output: usize,
        source_len: usize,
        scratch: &'a mut [Contribution],
    ) -> &'a [Contribution] {
        let center = (output as f64 + 0.5) / self.axis_scale;
        let start = (center - self.support + 0.5).floor().max(0.) as usize;
        let stop = (center + self.support + 0.5)
            .ceil()
            .min(source_len as f64)
            .max(0.) as usize;

        let mut density = 0.;
        let mut count = 0usize;
        for (pixel, dst) in (start..stop).zip(scratch.iter_mut()) {
            let weight = self
                .filter
                .weight(self.scale * (pixel as f64 - center + 0.5));
            *dst = Contribution { pixel, weight };
            density += weight;
            count += 1;
        }
        debug_assert!(start + count == stop.max(start), "contribution scratch is too small");

        let written = &mut scratch[..count];
        if density != 0. && density != 1. {
            let recip_density = 1. / density;
            for contribution in written.iter_mut() {
                contribution.weight *= recip_density;
            }
        }
        written
    }
}

/// Scratch entries needed per output sample for `support`
#[inline]
pub(crate) fn contributions_capacity(support: f64) -> usize {
    (2. * support.max(0.5) + 3.).ceil() as usize
}

/// Computes the source samples and weights that make up output sample `output_coordinate`.
///
/// Weights are normalized to sum to 1 unless their raw sum is exactly zero, in which case they
/// are returned as is and the output sample receives no contribution at all.
pub fn compute_contributions(
    output_coordinate: usize,
    axis_scale: f64,
    filter: &ResamplingFilter,
    blur: f64,
    source_len: usize,
) -> Vec<Contribution> {
    let sampling = AxisSampling::new(axis_scale, *filter, blur);
    let mut scratch = vec![Contribution::default(); sampling.max_contributions()];
    sampling
        .contributions(output_coordinate, source_len, &mut scratch)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResamplingFunction;

    const FACTORS: [(usize, usize); 8] = [
        (17, 4),
        (16, 8),
        (13, 9),
        (10, 10),
        (7, 11),
        (4, 8),
        (3, 10),
        (1, 6),
    ];

    #[test]
    fn weights_are_normalized() {
        for function in ResamplingFunction::ALL {
            let filter = function.get_resampling_filter();
            for (src, dst) in FACTORS {
                let factor = dst as f64 / src as f64;
                for blur in [0.75, 1.0, 1.5] {
                    for x in 0..dst {
                        let contributions = compute_contributions(x, factor, &filter, blur, src);
                        let sum: f64 = contributions.iter().map(|c| c.weight).sum();
                        let degenerate = contributions.iter().all(|c| c.weight == 0.);
                        assert!(
                            degenerate || (sum - 1.).abs() < 1e-9,
                            "{function:?} {src}->{dst} blur {blur} at {x}: sum {sum}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn windows_are_ordered_and_bounded() {
        for function in ResamplingFunction::ALL {
            let filter = function.get_resampling_filter();
            for (src, dst) in FACTORS {
                let factor = dst as f64 / src as f64;
                for x in 0..dst {
                    let contributions = compute_contributions(x, factor, &filter, 1., src);
                    assert!(!contributions.is_empty(), "{function:?} {src}->{dst} at {x}");
                    assert!(contributions.iter().all(|c| c.pixel < src));
                    assert!(contributions.windows(2).all(|w| w[0].pixel + 1 == w[1].pixel));
                }
            }
        }
    }

    #[test]
    fn downscaling_widens_support() {
        for (function, natural) in [
            (ResamplingFunction::Box, 0.5),
            (ResamplingFunction::Lanczos, 3.0),
            (ResamplingFunction::BlackmanSinc, 4.0),
        ] {
            let filter = function.get_resampling_filter();
            for factor in [0.5, 0.25, 0.1] {
                let support = filter_support(factor, filter.support, 1.);
                assert!(support > natural);
                assert!((support - natural / factor).abs() < 1e-12);
                let sampling = AxisSampling::new(factor, filter, 1.);
                assert!((sampling.support - natural / factor).abs() < 1e-12);
            }
            assert_eq!(filter_support(2., filter.support, 1.), natural);
        }
    }

    #[test]
    fn narrow_support_is_widened() {
        let filter = ResamplingFunction::Point.get_resampling_filter();
        let sampling = AxisSampling::new(3., filter, 1.);
        assert_eq!(sampling.support, 0.5 + SUPPORT_EPSILON);
        assert_eq!(sampling.scale, 1.);
        let sampling = AxisSampling::new(1., ResamplingFunction::Box.get_resampling_filter(), 1.);
        assert_eq!(sampling.support, 0.5 + SUPPORT_EPSILON);
    }

    #[test]
    fn box_halving_averages_pairs() {
        let filter = ResamplingFunction::Box.get_resampling_filter();
        let contributions = compute_contributions(0, 0.5, &filter, 1., 4);
        assert_eq!(
            contributions,
            vec![
                Contribution { pixel: 0, weight: 0.5 },
                Contribution { pixel: 1, weight: 0.5 },
                Contribution { pixel: 2, weight: 0. },
            ]
        );
        let last = compute_contributions(1, 0.5, &filter, 1., 4);
        assert_eq!(
            last,
            vec![
                Contribution { pixel: 2, weight: 0.5 },
                Contribution { pixel: 3, weight: 0.5 },
            ]
        );
    }

    #[test]
    fn box_doubling_picks_nearest() {
        let filter = ResamplingFunction::Box.get_resampling_filter();
        for x in 0..8 {
            let contributions = compute_contributions(x, 2., &filter, 1., 4);
            let live: Vec<_> = contributions.iter().filter(|c| c.weight != 0.).collect();
            assert_eq!(live.len(), 1);
            assert_eq!(live[0].pixel, x / 2);
            assert_eq!(live[0].weight, 1.);
        }
    }

    #[test]
    fn capacity_covers_window() {
        for function in ResamplingFunction::ALL {
            let filter = function.get_resampling_filter();
            for (src, dst) in FACTORS {
                let sampling = AxisSampling::new(dst as f64 / src as f64, filter, 1.3);
                let mut scratch = vec![Contribution::default(); sampling.max_contributions() * 4];
                for x in 0..dst {
                    let len = sampling.contributions(x, src, &mut scratch).len();
                    assert!(len <= sampling.max_contributions(), "{function:?} {src}->{dst}");
                }
            }
        }
    }
}
