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
use crate::pic_scale_error::PicScaleError;

/// Opacity of a fully transparent sample
pub const TRANSPARENT_OPACITY: u8 = 255;
/// Opacity of a fully opaque sample
pub const OPAQUE_OPACITY: u8 = 0;

/// Channels count of every supported image
pub(crate) const CHANNELS: usize = 4;

/// Single 8-bit sample.
///
/// Opacity is stored inverted: 0 is fully opaque and [`TRANSPARENT_OPACITY`] is fully
/// transparent.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sample {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub opacity: u8,
}

impl Sample {
    pub const fn new(red: u8, green: u8, blue: u8, opacity: u8) -> Sample {
        Sample {
            red,
            green,
            blue,
            opacity,
        }
    }

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Sample {
        Sample::new(red, green, blue, OPAQUE_OPACITY)
    }
}

/// Storage slot of every channel inside a 4 bytes pixel
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChannelOrder {
    pub red: usize,
    pub green: usize,
    pub blue: usize,
    pub opacity: usize,
}

impl ChannelOrder {
    pub const RGBA: ChannelOrder = ChannelOrder::new(0, 1, 2, 3);
    pub const BGRA: ChannelOrder = ChannelOrder::new(2, 1, 0, 3);
    pub const ARGB: ChannelOrder = ChannelOrder::new(1, 2, 3, 0);
    pub const ABGR: ChannelOrder = ChannelOrder::new(3, 2, 1, 0);

    /// Creates a mapping without checking it, see [`ChannelOrder::validate`]
    pub const fn new(red: usize, green: usize, blue: usize, opacity: usize) -> ChannelOrder {
        ChannelOrder {
            red,
            green,
            blue,
            opacity,
        }
    }

    /// Checks that the four slots are a permutation of `0..4`
    pub fn validate(&self) -> Result<(), PicScaleError> {
        let mut seen = 0u8;
        for slot in [self.red, self.green, self.blue, self.opacity] {
            if slot >= CHANNELS || seen & (1 << slot) != 0 {
                return Err(PicScaleError::InvalidChannelOrder);
            }
            seen |= 1 << slot;
        }
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn read(&self, px: &[u8]) -> Sample {
        Sample {
            red: px[self.red],
            green: px[self.green],
            blue: px[self.blue],
            opacity: px[self.opacity],
        }
    }

    #[inline(always)]
    pub(crate) fn write(&self, px: &mut [u8], sample: Sample) {
        px[self.red] = sample.red;
        px[self.green] = sample.green;
        px[self.blue] = sample.blue;
        px[self.opacity] = sample.opacity;
    }
}

impl Default for ChannelOrder {
    fn default() -> Self {
        ChannelOrder::RGBA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_orders_are_valid() {
        for order in [
            ChannelOrder::RGBA,
            ChannelOrder::BGRA,
            ChannelOrder::ARGB,
            ChannelOrder::ABGR,
        ] {
            assert!(order.validate().is_ok(), "{order:?}");
        }
    }

    #[test]
    fn rejects_non_permutations() {
        assert_eq!(
            ChannelOrder::new(0, 0, 2, 3).validate(),
            Err(PicScaleError::InvalidChannelOrder)
        );
        assert_eq!(
            ChannelOrder::new(0, 1, 2, 4).validate(),
            Err(PicScaleError::InvalidChannelOrder)
        );
    }

    #[test]
    fn read_write_follow_slots() {
        let sample = Sample::new(10, 20, 30, 40);
        let mut px = [0u8; 4];
        ChannelOrder::ARGB.write(&mut px, sample);
        assert_eq!(px, [40, 10, 20, 30]);
        assert_eq!(ChannelOrder::ARGB.read(&px), sample);
        ChannelOrder::BGRA.write(&mut px, sample);
        assert_eq!(px, [30, 20, 10, 40]);
        assert_eq!(ChannelOrder::RGBA.read(&px), Sample::new(30, 20, 10, 40));
    }
}
