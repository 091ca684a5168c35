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
use crate::math::Contribution;

/// Accumulates `N` neighbouring columns starting at `x` at once
#[inline(always)]
fn convolve_column_block<const N: usize>(
    src: &[u8],
    src_stride: usize,
    src_order: ChannelOrder,
    dst: &mut [u8],
    dst_order: ChannelOrder,
    contributions: &[Contribution],
    x: usize,
) {
    let mut sums = [ColorGroup::new(); N];

    let px = x * CHANNELS;

    for contribution in contributions {
        let offset = contribution.pixel * src_stride + px;
        let src_block = &src[offset..offset + N * CHANNELS];
        for (sum, src) in sums.iter_mut().zip(src_block.chunks_exact(CHANNELS)) {
            sum.accumulate(src_order.read(src), contribution.weight);
        }
    }

    for (sum, dst) in sums.iter().zip(dst.chunks_exact_mut(CHANNELS)) {
        dst_order.write(dst, sum.to_sample());
    }
}

/// Convolves one destination row along y from the rows listed in `contributions`
pub(crate) fn convolve_column_handler_rgba(
    src: &[u8],
    src_stride: usize,
    src_order: ChannelOrder,
    dst: &mut [u8],
    dst_order: ChannelOrder,
    contributions: &[Contribution],
) {
    let mut cx = 0usize;

    let mut blocks = dst.chunks_exact_mut(CHANNELS * 4);
    for dst in &mut blocks {
        convolve_column_block::<4>(
            src,
            src_stride,
            src_order,
            dst,
            dst_order,
            contributions,
            cx,
        );
        cx += 4;
    }

    for dst in blocks.into_remainder().chunks_exact_mut(CHANNELS) {
        convolve_column_block::<1>(
            src,
            src_stride,
            src_order,
            dst,
            dst_order,
            contributions,
            cx,
        );
        cx += 1;
    }
}
