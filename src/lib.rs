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
#![deny(deprecated)]
//! Alpha aware separable image resampling.
//!
//! Images are 4 channels 8-bit with a caller provided [`ChannelOrder`] and inverted opacity,
//! where 0 is fully opaque. Resampling runs two separable passes with one of the kernels of
//! [`ResamplingFunction`], weighting color by coverage so fully transparent pixels never bleed
//! into their neighbours.
//!
//! ```
//! use pic_resample::{ChannelOrder, ImageStore, ImageStoreMut, ResamplingFunction, Sample, resize};
//!
//! let source = ImageStore::from_samples(&[Sample::opaque(200, 10, 10); 16], 4, 4, ChannelOrder::RGBA)?;
//! let mut destination = ImageStoreMut::alloc(2, 2, ChannelOrder::BGRA);
//! resize(&source, &mut destination, Some(ResamplingFunction::Lanczos), 1.)?;
//! assert_eq!(destination.get_sample(1, 1), Some(Sample::opaque(200, 10, 10)));
//! # Ok::<(), pic_resample::PicScaleError>(())
//! ```

mod cancellation;
mod channel_order;
mod color_group;
mod convolution;
mod dispatch_group_u8;
mod filter_weights;
mod floating_point_horizontal;
mod floating_point_vertical;
mod image_size;
mod image_store;
mod math;
mod mixed_storage;
mod pic_scale_error;
mod rgba_u8;
mod sampler;
mod scaler;
mod threading_policy;

pub use cancellation::CancellationToken;
pub use channel_order::{ChannelOrder, OPAQUE_OPACITY, Sample, TRANSPARENT_OPACITY};
pub use image_size::ImageSize;
pub use image_store::{BufferStore, ImageStore, ImageStoreMut};
pub use math::{Contribution, compute_contributions, filter_support};
pub use pic_scale_error::{FilterPass, PicScaleBufferMismatch, PicScaleError};
pub use sampler::*;
pub use scaler::{ResizeStatus, Scaler, Scaling, ScalingOptions, resize};
pub use threading_policy::ThreadingPolicy;
