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
use crate::cancellation::CancellationToken;
use crate::filter_weights::FilterWeights;
use crate::floating_point_horizontal::convolve_row_handler_rgba;
use crate::floating_point_vertical::convolve_column_handler_rgba;
use crate::image_store::{ImageStore, ImageStoreMut};
use crate::pic_scale_error::{FilterPass, PicScaleError};
use rayon::ThreadPool;
use rayon::prelude::*;

/// Runs `process_row` over every destination row, on `pool` when there is one
fn dispatch_rows<F>(
    dst: &mut [u8],
    dst_stride: usize,
    pool: &Option<ThreadPool>,
    process_row: F,
) -> Result<(), PicScaleError>
where
    F: Fn(usize, &mut [u8]) -> Result<(), PicScaleError> + Send + Sync,
{
    if let Some(pool) = pool {
        pool.install(|| {
            dst.par_chunks_exact_mut(dst_stride)
                .enumerate()
                .try_for_each(|(y, row)| process_row(y, row))
        })
    } else {
        dst.chunks_exact_mut(dst_stride)
            .enumerate()
            .try_for_each(|(y, row)| process_row(y, row))
    }
}

#[inline]
fn check_cancelled(
    cancellation: Option<&CancellationToken>,
    pass: FilterPass,
) -> Result<(), PicScaleError> {
    if cancellation.is_some_and(|token| token.is_cancelled()) {
        return Err(PicScaleError::FilterPassFailure(pass));
    }
    Ok(())
}

pub(crate) fn convolve_horizontal_dispatch_u8(
    image_store: &ImageStore<'_>,
    filter_weights: &FilterWeights,
    destination: &mut ImageStoreMut<'_>,
    pool: &Option<ThreadPool>,
    cancellation: Option<&CancellationToken>,
) -> Result<(), PicScaleError> {
    debug_assert_eq!(image_store.height, destination.height);
    debug_assert_eq!(filter_weights.distinct_elements, destination.width);

    let src = image_store.buffer.as_ref();
    let src_stride = image_store.stride();
    let src_order = image_store.channel_order;

    let dst_stride = destination.stride();
    let dst_order = destination.channel_order;

    let process_row = |y: usize, row: &mut [u8]| -> Result<(), PicScaleError> {
        check_cancelled(cancellation, FilterPass::Horizontal)?;
        let src_row = &src[y * src_stride..(y + 1) * src_stride];
        convolve_row_handler_rgba(src_row, src_order, row, dst_order, filter_weights);
        Ok(())
    };

    dispatch_rows(
        destination.buffer.borrow_mut(),
        dst_stride,
        pool,
        process_row,
    )
}

pub(crate) fn convolve_vertical_dispatch_u8(
    image_store: &ImageStore<'_>,
    filter_weights: &FilterWeights,
    destination: &mut ImageStoreMut<'_>,
    pool: &Option<ThreadPool>,
    cancellation: Option<&CancellationToken>,
) -> Result<(), PicScaleError> {
    debug_assert_eq!(image_store.width, destination.width);
    debug_assert_eq!(filter_weights.distinct_elements, destination.height);

    let src = image_store.buffer.as_ref();
    let src_stride = image_store.stride();
    let src_order = image_store.channel_order;

    let dst_stride = destination.stride();
    let dst_order = destination.channel_order;

    let process_row = |y: usize, row: &mut [u8]| -> Result<(), PicScaleError> {
        check_cancelled(cancellation, FilterPass::Vertical)?;
        convolve_column_handler_rgba(
            src,
            src_stride,
            src_order,
            row,
            dst_order,
            filter_weights.contributions_of(y),
        );
        Ok(())
    };

    dispatch_rows(
        destination.buffer.borrow_mut(),
        dst_stride,
        pool,
        process_row,
    )
}
