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
use crate::channel_order::{CHANNELS, ChannelOrder, Sample};
use crate::image_size::ImageSize;
use crate::pic_scale_error::{PicScaleBufferMismatch, PicScaleError, try_vec};
use std::borrow::Cow;

/// Read-only 4 channels 8-bit image.
///
/// Rows are tightly packed, so the buffer holds exactly `width * height * 4` bytes.
#[derive(Debug, Clone)]
pub struct ImageStore<'a> {
    pub buffer: Cow<'a, [u8]>,
    pub width: usize,
    pub height: usize,
    pub channel_order: ChannelOrder,
}

/// Writable image backing storage, either caller owned or allocated here
#[derive(Debug)]
pub enum BufferStore<'a> {
    Borrowed(&'a mut [u8]),
    Owned(Vec<u8>),
}

impl BufferStore<'_> {
    pub fn borrow(&self) -> &[u8] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn borrow_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Writable 4 channels 8-bit image, the destination of a resize
#[derive(Debug)]
pub struct ImageStoreMut<'a> {
    pub buffer: BufferStore<'a>,
    pub width: usize,
    pub height: usize,
    pub channel_order: ChannelOrder,
}

fn expected_len(width: usize, height: usize) -> Result<usize, PicScaleError> {
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(CHANNELS))
        .ok_or(PicScaleError::ImageTooLarge)
}

fn check_buffer(
    slice_len: usize,
    width: usize,
    height: usize,
    channel_order: ChannelOrder,
) -> Result<(), PicScaleError> {
    channel_order.validate()?;
    let expected = expected_len(width, height)?;
    if slice_len != expected {
        return Err(PicScaleError::BufferMismatch(PicScaleBufferMismatch {
            expected,
            width,
            height,
            channels: CHANNELS,
            slice_len,
        }));
    }
    Ok(())
}

#[inline(always)]
fn sample_at(buffer: &[u8], width: usize, order: ChannelOrder, x: usize, y: usize) -> Sample {
    let px = (y * width + x) * CHANNELS;
    order.read(&buffer[px..px + CHANNELS])
}

impl ImageStore<'static> {
    pub fn new(
        buffer: Vec<u8>,
        width: usize,
        height: usize,
        channel_order: ChannelOrder,
    ) -> Result<ImageStore<'static>, PicScaleError> {
        check_buffer(buffer.len(), width, height, channel_order)?;
        Ok(ImageStore {
            buffer: Cow::Owned(buffer),
            width,
            height,
            channel_order,
        })
    }

    /// Packs `samples` row by row using `channel_order`
    pub fn from_samples(
        samples: &[Sample],
        width: usize,
        height: usize,
        channel_order: ChannelOrder,
    ) -> Result<ImageStore<'static>, PicScaleError> {
        channel_order.validate()?;
        let expected = expected_len(width, height)?;
        if samples.len() * CHANNELS != expected {
            return Err(PicScaleError::BufferMismatch(PicScaleBufferMismatch {
                expected,
                width,
                height,
                channels: CHANNELS,
                slice_len: samples.len() * CHANNELS,
            }));
        }
        let mut buffer = try_vec![0u8; expected];
        for (dst, &sample) in buffer.chunks_exact_mut(CHANNELS).zip(samples.iter()) {
            channel_order.write(dst, sample);
        }
        ImageStore::new(buffer, width, height, channel_order)
    }
}

impl<'a> ImageStore<'a> {
    pub fn from_slice(
        slice_ref: &'a [u8],
        width: usize,
        height: usize,
        channel_order: ChannelOrder,
    ) -> Result<ImageStore<'a>, PicScaleError> {
        check_buffer(slice_ref.len(), width, height, channel_order)?;
        Ok(ImageStore {
            buffer: Cow::Borrowed(slice_ref),
            width,
            height,
            channel_order,
        })
    }

    /// Checks buffer size and channel order, public fields may be changed after construction
    pub fn validate(&self) -> Result<(), PicScaleError> {
        check_buffer(self.buffer.len(), self.width, self.height, self.channel_order)
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.width * CHANNELS
    }

    pub fn get_size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    /// Reads a sample, `None` outside the image
    pub fn get_sample(&self, x: usize, y: usize) -> Option<Sample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(sample_at(
            self.buffer.as_ref(),
            self.width,
            self.channel_order,
            x,
            y,
        ))
    }
}

impl ImageStoreMut<'static> {
    /// Allocates a zeroed image
    pub fn alloc(width: usize, height: usize, channel_order: ChannelOrder) -> ImageStoreMut<'static> {
        ImageStoreMut {
            buffer: BufferStore::Owned(vec![0u8; width * height * CHANNELS]),
            width,
            height,
            channel_order,
        }
    }

    /// Allocates a zeroed image, reporting allocation failure instead of aborting
    pub fn try_alloc(
        width: usize,
        height: usize,
        channel_order: ChannelOrder,
    ) -> Result<ImageStoreMut<'static>, PicScaleError> {
        let len = expected_len(width, height)?;
        Ok(ImageStoreMut {
            buffer: BufferStore::Owned(try_vec![0u8; len]),
            width,
            height,
            channel_order,
        })
    }
}

impl<'a> ImageStoreMut<'a> {
    pub fn from_slice(
        slice_ref: &'a mut [u8],
        width: usize,
        height: usize,
        channel_order: ChannelOrder,
    ) -> Result<ImageStoreMut<'a>, PicScaleError> {
        check_buffer(slice_ref.len(), width, height, channel_order)?;
        Ok(ImageStoreMut {
            buffer: BufferStore::Borrowed(slice_ref),
            width,
            height,
            channel_order,
        })
    }

    pub fn validate(&self) -> Result<(), PicScaleError> {
        check_buffer(
            self.buffer.borrow().len(),
            self.width,
            self.height,
            self.channel_order,
        )
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.width * CHANNELS
    }

    pub fn get_size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.borrow()
    }

    pub fn get_sample(&self, x: usize, y: usize) -> Option<Sample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(sample_at(
            self.buffer.borrow(),
            self.width,
            self.channel_order,
            x,
            y,
        ))
    }

    /// Read-only view over the same pixels
    pub fn to_immutable(&self) -> ImageStore<'_> {
        ImageStore {
            buffer: Cow::Borrowed(self.buffer.borrow()),
            width: self.width,
            height: self.height,
            channel_order: self.channel_order,
        }
    }

    /// Copies `source` of the same size, remapping channels when orders differ
    pub(crate) fn copy_from(&mut self, source: &ImageStore<'_>) {
        let src_order = source.channel_order;
        let dst_order = self.channel_order;
        let dst = self.buffer.borrow_mut();
        if src_order == dst_order {
            dst.copy_from_slice(source.buffer.as_ref());
            return;
        }
        for (dst, src) in dst
            .chunks_exact_mut(CHANNELS)
            .zip(source.buffer.chunks_exact(CHANNELS))
        {
            dst_order.write(dst, src_order.read(src));
        }
    }
}
