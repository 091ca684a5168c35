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
use crate::math::Contribution;
use crate::math::weights::AxisSampling;
use crate::pic_scale_error::{PicScaleError, try_vec};

/// Precomputed contributions of every output coordinate of one pass.
///
/// Allocated once per resize for the larger of both axes and refilled before each pass.
#[derive(Debug, Clone)]
pub(crate) struct FilterWeights {
    pub contributions: Vec<Contribution>,
    pub bounds: Vec<FilterBounds>,
    /// Contributions slots per output coordinate
    pub kernel_size: usize,
    /// Output coordinates filled by the last [`FilterWeights::fill`]
    pub distinct_elements: usize,
}

#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(crate) struct FilterBounds {
    pub start: usize,
    pub size: usize,
}

impl FilterBounds {
    pub(crate) fn new(start: usize, size: usize) -> FilterBounds {
        FilterBounds { start, size }
    }
}

impl FilterWeights {
    pub(crate) fn try_new(
        kernel_size: usize,
        max_elements: usize,
    ) -> Result<FilterWeights, PicScaleError> {
        let len = kernel_size
            .checked_mul(max_elements)
            .ok_or(PicScaleError::ImageTooLarge)?;
        Ok(FilterWeights {
            contributions: try_vec![Contribution::default(); len],
            bounds: try_vec![FilterBounds::default(); max_elements],
            kernel_size,
            distinct_elements: 0,
        })
    }

    /// Computes contributions of `out_len` coordinates sampled from `source_len` samples
    pub(crate) fn fill(&mut self, sampling: &AxisSampling, out_len: usize, source_len: usize) {
        debug_assert!(out_len <= self.bounds.len());
        for (output, (chunk, bounds)) in self
            .contributions
            .chunks_exact_mut(self.kernel_size)
            .zip(self.bounds.iter_mut())
            .take(out_len)
            .enumerate()
        {
            let written = sampling.contributions(output, source_len, chunk);
            *bounds = FilterBounds::new(written.first().map_or(0, |c| c.pixel), written.len());
        }
        self.distinct_elements = out_len;
    }

    /// Contributions of output coordinate `output`
    #[inline(always)]
    pub(crate) fn contributions_of(&self, output: usize) -> &[Contribution] {
        let offset = output * self.kernel_size;
        &self.contributions[offset..offset + self.bounds[output].size]
    }

    #[inline]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (FilterBounds, &[Contribution])> {
        self.contributions
            .chunks_exact(self.kernel_size)
            .zip(self.bounds.iter())
            .take(self.distinct_elements)
            .map(|(chunk, &bounds)| (bounds, &chunk[..bounds.size]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResamplingFunction;
    use crate::math::compute_contributions;
    use crate::math::weights::contributions_capacity;

    #[test]
    fn refill_matches_direct_computation() {
        let filter = ResamplingFunction::Lanczos.get_resampling_filter();
        let mut weights = FilterWeights::try_new(contributions_capacity(6.), 12).unwrap();
        for (src, dst) in [(24usize, 12usize), (5, 9)] {
            let factor = dst as f64 / src as f64;
            let sampling = AxisSampling::new(factor, filter, 1.);
            weights.fill(&sampling, dst, src);
            assert_eq!(weights.distinct_elements, dst);
            assert_eq!(weights.iter().count(), dst);
            for (x, (bounds, contributions)) in weights.iter().enumerate() {
                let expected = compute_contributions(x, factor, &filter, 1., src);
                assert_eq!(contributions, expected.as_slice());
                assert_eq!(bounds.start, expected[0].pixel);
                assert_eq!(weights.contributions_of(x), expected.as_slice());
            }
        }
    }

    #[test]
    fn reports_unreasonable_tables() {
        assert!(FilterWeights::try_new(usize::MAX, 2).is_err());
    }
}
