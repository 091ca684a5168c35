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
use pic_resample::{
    ChannelOrder, ImageStore, ImageStoreMut, PicScaleError, ResamplingFunction, ResizeStatus,
    Scaler, Scaling, ScalingOptions, ThreadingPolicy,
};
use std::borrow::Cow;
use std::slice;

pub const PIC_RESAMPLE_SUCCESS: u32 = 0;
pub const PIC_RESAMPLE_DEGENERATE_DIMENSIONS: u32 = 1;
pub const PIC_RESAMPLE_IDENTITY_COPY: u32 = 2;
pub const PIC_RESAMPLE_ALLOCATION_FAILURE: u32 = 3;
pub const PIC_RESAMPLE_FILTER_PASS_FAILURE: u32 = 4;
pub const PIC_RESAMPLE_INVALID_ARGUMENT: u32 = 5;

pub const PIC_RESAMPLE_USE_MULTITHREADING: u32 = 0b0001;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PicResampleFilter {
    Undefined,
    Point,
    Box,
    Triangle,
    Hermite,
    Hanning,
    Hamming,
    Blackman,
    Gaussian,
    Quadratic,
    Cubic,
    Catrom,
    Mitchell,
    Lanczos,
    BlackmanBessel,
    BlackmanSinc,
    Sinc,
}

impl PicResampleFilter {
    fn to_resampling(self) -> Option<ResamplingFunction> {
        match self {
            PicResampleFilter::Undefined => None,
            PicResampleFilter::Point => Some(ResamplingFunction::Point),
            PicResampleFilter::Box => Some(ResamplingFunction::Box),
            PicResampleFilter::Triangle => Some(ResamplingFunction::Triangle),
            PicResampleFilter::Hermite => Some(ResamplingFunction::Hermite),
            PicResampleFilter::Hanning => Some(ResamplingFunction::Hanning),
            PicResampleFilter::Hamming => Some(ResamplingFunction::Hamming),
            PicResampleFilter::Blackman => Some(ResamplingFunction::Blackman),
            PicResampleFilter::Gaussian => Some(ResamplingFunction::Gaussian),
            PicResampleFilter::Quadratic => Some(ResamplingFunction::Quadratic),
            PicResampleFilter::Cubic => Some(ResamplingFunction::Cubic),
            PicResampleFilter::Catrom => Some(ResamplingFunction::Catrom),
            PicResampleFilter::Mitchell => Some(ResamplingFunction::Mitchell),
            PicResampleFilter::Lanczos => Some(ResamplingFunction::Lanczos),
            PicResampleFilter::BlackmanBessel => Some(ResamplingFunction::BlackmanBessel),
            PicResampleFilter::BlackmanSinc => Some(ResamplingFunction::BlackmanSinc),
            PicResampleFilter::Sinc => Some(ResamplingFunction::Sinc),
        }
    }
}

/// Storage slot of each channel inside a pixel
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PicResampleChannelOrder {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub opacity: u8,
}

impl From<PicResampleChannelOrder> for ChannelOrder {
    fn from(value: PicResampleChannelOrder) -> Self {
        ChannelOrder::new(
            value.red as usize,
            value.green as usize,
            value.blue as usize,
            value.opacity as usize,
        )
    }
}

#[inline]
fn map_result(result: Result<ResizeStatus, PicScaleError>) -> u32 {
    match result {
        Ok(ResizeStatus::Resampled) => PIC_RESAMPLE_SUCCESS,
        Ok(ResizeStatus::IdentityCopy) => PIC_RESAMPLE_IDENTITY_COPY,
        Err(PicScaleError::ZeroImageDimensions) => PIC_RESAMPLE_DEGENERATE_DIMENSIONS,
        Err(PicScaleError::OutOfMemory(_)) | Err(PicScaleError::ImageTooLarge) => {
            PIC_RESAMPLE_ALLOCATION_FAILURE
        }
        Err(PicScaleError::FilterPassFailure(_)) => PIC_RESAMPLE_FILTER_PASS_FAILURE,
        Err(_) => PIC_RESAMPLE_INVALID_ARGUMENT,
    }
}

/// Copies rows of `stride` bytes into a tightly packed buffer when needed
fn pack_rows(src: &[u8], stride: usize, row_len: usize, height: usize) -> Cow<'_, [u8]> {
    if stride == row_len {
        return Cow::Borrowed(&src[..row_len * height]);
    }
    let mut packed = Vec::with_capacity(row_len * height);
    for row in src.chunks(stride).take(height) {
        packed.extend_from_slice(&row[..row_len]);
    }
    Cow::Owned(packed)
}

/// Resizes a 4 channels 8-bit image with inverted opacity, 0 is opaque
///
/// # Arguments
///
/// * `src`: Source image pointer
/// * `src_stride`: Source row length in bytes, at least `width * 4`
/// * `width`: Source image width
/// * `height`: Source image height
/// * `src_order`: Channel slots of the source
/// * `dst`: Destination pointer
/// * `dst_stride`: Destination row length in bytes, at least `new_width * 4`
/// * `new_width`: New image width
/// * `new_height`: New image height
/// * `dst_order`: Channel slots of the destination
/// * `resizing_filter`: One of [PicResampleFilter]
/// * `blur`: Support multiplier, 1 is neutral
/// * `flags`: Flags of: [PIC_RESAMPLE_USE_MULTITHREADING]
///
/// returns: one of `PIC_RESAMPLE_*` status codes
///
/// # Safety
///
/// `src` must be readable for `src_stride * height` bytes and `dst` writable for
/// `dst_stride * new_height` bytes, the regions must not overlap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pic_resample_resize(
    src: *const u8,
    src_stride: usize,
    width: u32,
    height: u32,
    src_order: PicResampleChannelOrder,
    dst: *mut u8,
    dst_stride: usize,
    new_width: u32,
    new_height: u32,
    dst_order: PicResampleChannelOrder,
    resizing_filter: PicResampleFilter,
    blur: f64,
    flags: u32,
) -> u32 {
    if width == 0 || height == 0 || new_width == 0 || new_height == 0 {
        return PIC_RESAMPLE_DEGENERATE_DIMENSIONS;
    }
    let (width, height) = (width as usize, height as usize);
    let (new_width, new_height) = (new_width as usize, new_height as usize);
    if src.is_null() || dst.is_null() || src_stride < width * 4 || dst_stride < new_width * 4 {
        return PIC_RESAMPLE_INVALID_ARGUMENT;
    }
    let (Some(src_len), Some(dst_len)) = (
        src_stride.checked_mul(height),
        dst_stride.checked_mul(new_height),
    ) else {
        return PIC_RESAMPLE_INVALID_ARGUMENT;
    };

    let src_slice = unsafe { slice::from_raw_parts(src, src_len) };
    let dst_slice = unsafe { slice::from_raw_parts_mut(dst, dst_len) };

    let packed = pack_rows(src_slice, src_stride, width * 4, height);
    let source = match ImageStore::from_slice(&packed, width, height, src_order.into()) {
        Ok(store) => store,
        Err(err) => return map_result(Err(err)),
    };

    let scaler = Scaler::from_options(ScalingOptions {
        resampling_function: resizing_filter.to_resampling(),
        blur,
        threading_policy: if flags & PIC_RESAMPLE_USE_MULTITHREADING != 0 {
            ThreadingPolicy::Adaptive
        } else {
            ThreadingPolicy::Single
        },
    });

    let row_len = new_width * 4;
    if dst_stride == row_len {
        let mut destination =
            match ImageStoreMut::from_slice(dst_slice, new_width, new_height, dst_order.into()) {
                Ok(store) => store,
                Err(err) => return map_result(Err(err)),
            };
        return map_result(scaler.resize(&source, &mut destination));
    }

    let mut destination = match ImageStoreMut::try_alloc(new_width, new_height, dst_order.into())
    {
        Ok(store) => store,
        Err(err) => return map_result(Err(err)),
    };
    let status = map_result(scaler.resize(&source, &mut destination));
    if status == PIC_RESAMPLE_SUCCESS || status == PIC_RESAMPLE_IDENTITY_COPY {
        for (src, dst) in destination
            .as_bytes()
            .chunks_exact(row_len)
            .zip(dst_slice.chunks_mut(dst_stride))
        {
            dst[..row_len].copy_from_slice(src);
        }
    }
    status
}
