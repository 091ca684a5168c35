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
use std::error::Error;
use std::fmt::Display;

/// Buffer mismatch error description
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PicScaleBufferMismatch {
    pub expected: usize,
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub slice_len: usize,
}

/// Convolution pass that reported a failure
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterPass {
    Horizontal,
    Vertical,
}

impl Display for FilterPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterPass::Horizontal => f.write_str("horizontal"),
            FilterPass::Vertical => f.write_str("vertical"),
        }
    }
}

/// Error enumeration type
#[derive(Debug, Clone, PartialEq)]
pub enum PicScaleError {
    ZeroImageDimensions,
    ImageTooLarge,
    BufferMismatch(PicScaleBufferMismatch),
    InvalidChannelOrder,
    InvalidBlur(f64),
    OutOfMemory(usize),
    FilterPassFailure(FilterPass),
}

impl PicScaleError {
    /// Returns error as int code
    #[inline]
    pub fn code(&self) -> usize {
        match self {
            PicScaleError::ZeroImageDimensions => 1,
            PicScaleError::ImageTooLarge => 2,
            PicScaleError::BufferMismatch(_) => 3,
            PicScaleError::InvalidChannelOrder => 4,
            PicScaleError::InvalidBlur(_) => 5,
            PicScaleError::OutOfMemory(_) => 6,
            PicScaleError::FilterPassFailure(_) => 7,
        }
    }
}

impl Display for PicScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PicScaleError::ZeroImageDimensions => {
                f.write_str("One of image dimensions is 0, this should not happen")
            }
            PicScaleError::ImageTooLarge => f.write_str("Image larger than memory capabilities"),
            PicScaleError::BufferMismatch(buffer_mismatch) => f.write_fmt(format_args!(
                "Image buffer len expected to be {} [w({})*h({})*channels({})] but received {}",
                buffer_mismatch.expected,
                buffer_mismatch.width,
                buffer_mismatch.height,
                buffer_mismatch.channels,
                buffer_mismatch.slice_len,
            )),
            PicScaleError::InvalidChannelOrder => {
                f.write_str("Channel order must map every channel to a distinct slot in [0, 4)")
            }
            PicScaleError::InvalidBlur(blur) => f.write_fmt(format_args!(
                "Blur must be finite and non negative, but received {blur}"
            )),
            PicScaleError::OutOfMemory(capacity) => f.write_fmt(format_args!(
                "There is no enough memory to allocate {capacity} elements"
            )),
            PicScaleError::FilterPassFailure(pass) => {
                f.write_fmt(format_args!("The {pass} convolution pass did not complete"))
            }
        }
    }
}

impl Error for PicScaleError {}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::pic_scale_error::PicScaleError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
