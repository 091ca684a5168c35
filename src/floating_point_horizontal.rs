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
use crate::channel_order::{CHANNELS, ChannelOrder};
use crate::color_group::ColorGroup;
use crate::filter_weights::FilterWeights;

/// Convolves one row along x, every destination pixel gets its own contributions window
#[inline(always)]
pub(crate) fn convolve_row_handler_rgba(
    src: &[u8],
    src_order: ChannelOrder,
    dst: &mut [u8],
    dst_order: ChannelOrder,
    filter_weights: &FilterWeights,
) {
    for (dst, (bounds, contributions)) in dst
        .chunks_exact_mut(CHANNELS)
        .zip(filter_weights.iter())
    {
        let mut sums = ColorGroup::new();

        let px = bounds.start * CHANNELS;
        let src_window = &src[px..px + bounds.size * CHANNELS];

        for (contribution, src) in contributions
            .iter()
            .zip(src_window.chunks_exact(CHANNELS))
        {
            sums.accumulate(src_order.read(src), contribution.weight);
        }

        dst_order.write(dst, sums.to_sample());
    }
}
