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
use crate::convolution::{HorizontalConvolutionPass, VerticalConvolutionPass};
use crate::dispatch_group_u8::{convolve_horizontal_dispatch_u8, convolve_vertical_dispatch_u8};
use crate::filter_weights::FilterWeights;
use crate::image_store::{ImageStore, ImageStoreMut};
use crate::pic_scale_error::PicScaleError;
use rayon::ThreadPool;

impl HorizontalConvolutionPass for ImageStore<'_> {
    fn convolve_horizontal(
        &self,
        filter_weights: &FilterWeights,
        destination: &mut ImageStoreMut<'_>,
        pool: &Option<ThreadPool>,
        cancellation: Option<&CancellationToken>,
    ) -> Result<(), PicScaleError> {
        convolve_horizontal_dispatch_u8(self, filter_weights, destination, pool, cancellation)
    }
}

impl VerticalConvolutionPass for ImageStore<'_> {
    fn convolve_vertical(
        &self,
        filter_weights: &FilterWeights,
        destination: &mut ImageStoreMut<'_>,
        pool: &Option<ThreadPool>,
        cancellation: Option<&CancellationToken>,
    ) -> Result<(), PicScaleError> {
        convolve_vertical_dispatch_u8(self, filter_weights, destination, pool, cancellation)
    }
}
