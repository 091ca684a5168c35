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
use crate::channel_order::ChannelOrder;
use crate::convolution::{HorizontalConvolutionPass, VerticalConvolutionPass};
use crate::filter_weights::FilterWeights;
use crate::image_size::ImageSize;
use crate::image_store::{ImageStore, ImageStoreMut};
use crate::math::filter_support;
use crate::math::weights::{AxisSampling, contributions_capacity};
use crate::pic_scale_error::PicScaleError;
use crate::threading_policy::ThreadingPolicy;
use crate::{DEFAULT_RESAMPLING_FUNCTION, ResamplingFunction};

/// Outcome of a successful resize
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ResizeStatus {
    /// Both convolution passes ran
    Resampled,
    /// Dimensions matched with neutral blur, pixels were copied as is
    IdentityCopy,
}

/// Declarative resize configuration
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScalingOptions {
    /// `None` selects [`DEFAULT_RESAMPLING_FUNCTION`]
    pub resampling_function: Option<ResamplingFunction>,
    /// Kernel support multiplier, `> 1` blurs and `< 1` sharpens
    pub blur: f64,
    pub threading_policy: ThreadingPolicy,
}

impl Default for ScalingOptions {
    fn default() -> Self {
        ScalingOptions {
            resampling_function: None,
            blur: 1.,
            threading_policy: ThreadingPolicy::Single,
        }
    }
}

#[derive(Debug, Clone)]
/// Represents base scaling structure
pub struct Scaler {
    pub(crate) function: ResamplingFunction,
    pub(crate) blur: f64,
    pub(crate) threading_policy: ThreadingPolicy,
    pub(crate) cancellation: Option<CancellationToken>,
}

pub trait Scaling {
    fn set_threading_policy(&mut self, threading_policy: ThreadingPolicy);

    /// Resamples `store` into `into`, dimensions of `into` are the target size.
    ///
    /// Source and destination may use different channel orders.
    fn resize(
        &self,
        store: &ImageStore<'_>,
        into: &mut ImageStoreMut<'_>,
    ) -> Result<ResizeStatus, PicScaleError>;
}

impl Scaler {
    /// Creates new Scaler instance with corresponding filter
    pub fn new(filter: ResamplingFunction) -> Self {
        Scaler {
            function: filter,
            blur: 1.,
            threading_policy: ThreadingPolicy::Single,
            cancellation: None,
        }
    }

    pub fn from_options(options: ScalingOptions) -> Self {
        Scaler {
            function: options
                .resampling_function
                .unwrap_or(DEFAULT_RESAMPLING_FUNCTION),
            blur: options.blur,
            threading_policy: options.threading_policy,
            cancellation: None,
        }
    }

    pub fn set_blur(&mut self, blur: f64) {
        self.blur = blur;
    }

    /// Token checked before every row of both passes
    pub fn set_cancellation_token(&mut self, token: CancellationToken) {
        self.cancellation = Some(token);
    }

    pub fn resampling_function(&self) -> ResamplingFunction {
        self.function
    }

    pub fn blur(&self) -> f64 {
        self.blur
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Scaler::new(DEFAULT_RESAMPLING_FUNCTION)
    }
}

/// Pass order cost estimate, horizontal first when `dst_w * (src_h + dst_h)` exceeds
/// `dst_h * (src_w + dst_w)`
#[inline]
fn is_horizontal_first(source: ImageSize, destination: ImageSize) -> bool {
    let horizontal_cost = destination.width as f64 * (source.height + destination.height) as f64;
    let vertical_cost = destination.height as f64 * (source.width + destination.width) as f64;
    horizontal_cost > vertical_cost
}

impl Scaling for Scaler {
    fn set_threading_policy(&mut self, threading_policy: ThreadingPolicy) {
        self.threading_policy = threading_policy;
    }

    fn resize(
        &self,
        store: &ImageStore<'_>,
        into: &mut ImageStoreMut<'_>,
    ) -> Result<ResizeStatus, PicScaleError> {
        let src_size = store.get_size();
        let dst_size = into.get_size();
        if src_size.is_empty() || dst_size.is_empty() {
            return Err(PicScaleError::ZeroImageDimensions);
        }
        store.validate()?;
        into.validate()?;
        if !self.blur.is_finite() || self.blur < 0. {
            return Err(PicScaleError::InvalidBlur(self.blur));
        }

        if src_size == dst_size && self.blur == 1. {
            log::debug!(
                "Identity resize {}x{}, copying pixels",
                src_size.width,
                src_size.height
            );
            into.copy_from(store);
            return Ok(ResizeStatus::IdentityCopy);
        }

        let filter = self.function.get_resampling_filter();
        let x_factor = dst_size.width as f64 / src_size.width as f64;
        let y_factor = dst_size.height as f64 / src_size.height as f64;
        let support = filter_support(x_factor, filter.support, self.blur)
            .max(filter_support(y_factor, filter.support, self.blur))
            .max(filter.support);
        let horizontal_first = is_horizontal_first(src_size, dst_size);

        log::debug!(
            "Resizing {}x{} to {}x{} with {:?}, blur {}, support {:.4}, {} pass first",
            src_size.width,
            src_size.height,
            dst_size.width,
            dst_size.height,
            self.function,
            self.blur,
            support,
            if horizontal_first {
                "horizontal"
            } else {
                "vertical"
            }
        );

        let x_sampling = AxisSampling::new(x_factor, filter, self.blur);
        let y_sampling = AxisSampling::new(y_factor, filter, self.blur);

        let mut filter_weights = FilterWeights::try_new(
            contributions_capacity(support),
            dst_size.width.max(dst_size.height),
        )?;

        let mut intermediate = if horizontal_first {
            ImageStoreMut::try_alloc(dst_size.width, src_size.height, ChannelOrder::RGBA)?
        } else {
            ImageStoreMut::try_alloc(src_size.width, dst_size.height, ChannelOrder::RGBA)?
        };

        let pool = self.threading_policy.get_pool(dst_size);
        let cancellation = self.cancellation.as_ref();

        if horizontal_first {
            log::trace!(
                "Horizontal pass {}x{} -> {}x{}",
                src_size.width,
                src_size.height,
                intermediate.width,
                intermediate.height
            );
            filter_weights.fill(&x_sampling, dst_size.width, src_size.width);
            store.convolve_horizontal(&filter_weights, &mut intermediate, &pool, cancellation)?;

            log::trace!(
                "Vertical pass {}x{} -> {}x{}",
                intermediate.width,
                intermediate.height,
                dst_size.width,
                dst_size.height
            );
            filter_weights.fill(&y_sampling, dst_size.height, src_size.height);
            intermediate.to_immutable().convolve_vertical(
                &filter_weights,
                into,
                &pool,
                cancellation,
            )?;
        } else {
            log::trace!(
                "Vertical pass {}x{} -> {}x{}",
                src_size.width,
                src_size.height,
                intermediate.width,
                intermediate.height
            );
            filter_weights.fill(&y_sampling, dst_size.height, src_size.height);
            store.convolve_vertical(&filter_weights, &mut intermediate, &pool, cancellation)?;

            log::trace!(
                "Horizontal pass {}x{} -> {}x{}",
                intermediate.width,
                intermediate.height,
                dst_size.width,
                dst_size.height
            );
            filter_weights.fill(&x_sampling, dst_size.width, src_size.width);
            intermediate.to_immutable().convolve_horizontal(
                &filter_weights,
                into,
                &pool,
                cancellation,
            )?;
        }

        Ok(ResizeStatus::Resampled)
    }
}

/// Resamples `source` into `destination` with `function` or the default kernel.
///
/// Zero sized images fail with [`PicScaleError::ZeroImageDimensions`] before anything is
/// allocated. When both images have the same dimensions and `blur` is exactly 1 the pixels are
/// copied and [`ResizeStatus::IdentityCopy`] is returned.
pub fn resize(
    source: &ImageStore<'_>,
    destination: &mut ImageStoreMut<'_>,
    function: Option<ResamplingFunction>,
    blur: f64,
) -> Result<ResizeStatus, PicScaleError> {
    let scaler = Scaler::from_options(ScalingOptions {
        resampling_function: function,
        blur,
        ..ScalingOptions::default()
    });
    scaler.resize(source, destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pic_scale_error::FilterPass;
    use crate::{Sample, TRANSPARENT_OPACITY};

    fn uniform(width: usize, height: usize, sample: Sample, order: ChannelOrder) -> ImageStore<'static> {
        ImageStore::from_samples(&vec![sample; width * height], width, height, order).unwrap()
    }

    fn linear_ramp(size: usize) -> ImageStore<'static> {
        let samples: Vec<Sample> = (0..size)
            .flat_map(|y| {
                (0..size).map(move |x| {
                    Sample::opaque(
                        (30 + 3 * x + 2 * y) as u8,
                        (220 - 2 * x - 3 * y) as u8,
                        (60 + x + y) as u8,
                    )
                })
            })
            .collect();
        ImageStore::from_samples(&samples, size, size, ChannelOrder::RGBA).unwrap()
    }

    fn samples_of(image: &ImageStoreMut<'_>) -> Vec<Sample> {
        (0..image.height)
            .flat_map(|y| (0..image.width).map(move |x| (x, y)))
            .filter_map(|(x, y)| image.get_sample(x, y))
            .collect()
    }

    #[test]
    fn box_halving_keeps_uniform_color() {
        let color = Sample::opaque(37, 120, 201);
        let source = uniform(4, 4, color, ChannelOrder::RGBA);
        let mut destination = ImageStoreMut::alloc(2, 2, ChannelOrder::RGBA);
        let status = resize(
            &source,
            &mut destination,
            Some(ResamplingFunction::Box),
            1.,
        )
        .unwrap();
        assert_eq!(status, ResizeStatus::Resampled);
        assert!(samples_of(&destination).iter().all(|&s| s == color));
    }

    #[test]
    fn single_pixel_fills_every_kernel() {
        let color = Sample::new(12, 200, 99, 100);
        let source = uniform(1, 1, color, ChannelOrder::RGBA);
        for function in ResamplingFunction::ALL {
            let mut destination = ImageStoreMut::alloc(5, 5, ChannelOrder::RGBA);
            resize(&source, &mut destination, Some(function), 1.).unwrap();
            for sample in samples_of(&destination) {
                assert_eq!(sample, color, "{function:?}");
            }
        }
    }

    #[test]
    fn transparent_neighbor_does_not_bleed() {
        let samples = [
            Sample::opaque(255, 0, 0),
            Sample::new(0, 255, 0, TRANSPARENT_OPACITY),
        ];
        let source = ImageStore::from_samples(&samples, 2, 1, ChannelOrder::RGBA).unwrap();
        for function in [
            ResamplingFunction::Triangle,
            ResamplingFunction::Catrom,
            ResamplingFunction::Lanczos,
        ] {
            let mut destination = ImageStoreMut::alloc(4, 1, ChannelOrder::RGBA);
            resize(&source, &mut destination, Some(function), 1.).unwrap();
            let output = samples_of(&destination);
            assert!(output[0].opacity < TRANSPARENT_OPACITY);
            for sample in output {
                if sample.opacity < TRANSPARENT_OPACITY {
                    assert_eq!(
                        (sample.red, sample.green, sample.blue),
                        (255, 0, 0),
                        "{function:?}"
                    );
                }
            }
        }
        let mut destination = ImageStoreMut::alloc(4, 1, ChannelOrder::RGBA);
        resize(&source, &mut destination, Some(ResamplingFunction::Triangle), 1.).unwrap();
        assert_eq!(destination.get_sample(0, 0), Some(Sample::opaque(255, 0, 0)));
        assert_eq!(destination.get_sample(1, 0), Some(Sample::new(255, 0, 0, 64)));
        assert_eq!(destination.get_sample(2, 0), Some(Sample::new(255, 0, 0, 191)));
        assert_eq!(
            destination.get_sample(3, 0),
            Some(Sample::new(0, 0, 0, TRANSPARENT_OPACITY))
        );
    }

    #[test]
    fn round_trip_stays_close() {
        const SIZE: usize = 32;
        const BORDER: usize = 8;
        let source = linear_ramp(SIZE);
        for function in ResamplingFunction::ALL {
            let tolerance = match function {
                ResamplingFunction::Point | ResamplingFunction::Box => 0,
                _ => 4,
            };
            let mut upscaled = ImageStoreMut::alloc(SIZE * 2, SIZE * 2, ChannelOrder::RGBA);
            resize(&source, &mut upscaled, Some(function), 1.).unwrap();
            let mut restored = ImageStoreMut::alloc(SIZE, SIZE, ChannelOrder::RGBA);
            resize(&upscaled.to_immutable(), &mut restored, Some(function), 1.).unwrap();

            for y in BORDER..SIZE - BORDER {
                for x in BORDER..SIZE - BORDER {
                    let expected = source.get_sample(x, y).unwrap();
                    let actual = restored.get_sample(x, y).unwrap();
                    for (e, a) in [
                        (expected.red, actual.red),
                        (expected.green, actual.green),
                        (expected.blue, actual.blue),
                        (expected.opacity, actual.opacity),
                    ] {
                        assert!(
                            e.abs_diff(a) <= tolerance,
                            "{function:?} at ({x}, {y}): {expected:?} vs {actual:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn writes_through_destination_order() {
        let color = Sample::new(10, 90, 250, 30);
        let source = uniform(3, 3, color, ChannelOrder::RGBA);
        let mut destination = ImageStoreMut::alloc(2, 2, ChannelOrder::BGRA);
        resize(&source, &mut destination, None, 1.).unwrap();
        assert_eq!(&destination.as_bytes()[..4], &[250, 90, 10, 30]);
        assert!(samples_of(&destination).iter().all(|&s| s == color));
    }

    #[test]
    fn identity_request_copies() {
        let samples: Vec<Sample> = (0..6u8)
            .map(|i| Sample::new(i * 40, 255 - i * 40, i * 7, i * 30))
            .collect();
        let source = ImageStore::from_samples(&samples, 3, 2, ChannelOrder::RGBA).unwrap();
        let mut destination = ImageStoreMut::alloc(3, 2, ChannelOrder::ARGB);
        let status = resize(&source, &mut destination, None, 1.).unwrap();
        assert_eq!(status, ResizeStatus::IdentityCopy);
        assert_eq!(samples_of(&destination), samples);

        let mut blurred = ImageStoreMut::alloc(3, 2, ChannelOrder::RGBA);
        let status = resize(&source, &mut blurred, None, 1.5).unwrap();
        assert_eq!(status, ResizeStatus::Resampled);
    }

    #[test]
    fn rejects_invalid_requests() {
        let source = uniform(4, 4, Sample::opaque(1, 2, 3), ChannelOrder::RGBA);
        let empty = ImageStore::new(vec![], 0, 4, ChannelOrder::RGBA).unwrap();

        let mut destination = ImageStoreMut::alloc(2, 2, ChannelOrder::RGBA);
        assert_eq!(
            resize(&empty, &mut destination, None, 1.),
            Err(PicScaleError::ZeroImageDimensions)
        );
        let mut flat = ImageStoreMut::alloc(2, 0, ChannelOrder::RGBA);
        assert_eq!(
            resize(&source, &mut flat, None, 1.),
            Err(PicScaleError::ZeroImageDimensions)
        );
        for blur in [f64::NAN, f64::INFINITY, -0.5] {
            assert!(matches!(
                resize(&source, &mut destination, None, blur),
                Err(PicScaleError::InvalidBlur(_))
            ));
        }
        destination.width = 3;
        assert!(matches!(
            resize(&source, &mut destination, None, 1.),
            Err(PicScaleError::BufferMismatch(_))
        ));
    }

    #[test]
    fn cancelled_resize_reports_first_pass() {
        let source = linear_ramp(8);
        let token = CancellationToken::new();
        let mut scaler = Scaler::new(ResamplingFunction::Lanczos);
        scaler.set_cancellation_token(token.clone());
        token.cancel();
        let mut destination = ImageStoreMut::alloc(4, 4, ChannelOrder::RGBA);
        assert_eq!(
            scaler.resize(&source, &mut destination),
            Err(PicScaleError::FilterPassFailure(FilterPass::Vertical))
        );
        let mut destination = ImageStoreMut::alloc(16, 2, ChannelOrder::RGBA);
        assert_eq!(
            scaler.resize(&source, &mut destination),
            Err(PicScaleError::FilterPassFailure(FilterPass::Horizontal))
        );
    }

    #[test]
    fn undefined_kernel_is_mitchell() {
        let source = linear_ramp(9);
        let mut by_default = ImageStoreMut::alloc(5, 13, ChannelOrder::RGBA);
        resize(&source, &mut by_default, None, 1.).unwrap();
        let mut explicit = ImageStoreMut::alloc(5, 13, ChannelOrder::RGBA);
        Scaler::new(ResamplingFunction::Mitchell)
            .resize(&source, &mut explicit)
            .unwrap();
        assert_eq!(by_default.as_bytes(), explicit.as_bytes());
        assert_eq!(
            Scaler::default().resampling_function(),
            DEFAULT_RESAMPLING_FUNCTION
        );
    }

    #[test]
    fn threading_policy_does_not_change_output() {
        let source = linear_ramp(40);
        let mut single = ImageStoreMut::alloc(517, 300, ChannelOrder::RGBA);
        resize(&source, &mut single, Some(ResamplingFunction::Catrom), 1.).unwrap();

        let mut scaler = Scaler::from_options(ScalingOptions {
            resampling_function: Some(ResamplingFunction::Catrom),
            threading_policy: ThreadingPolicy::Adaptive,
            ..ScalingOptions::default()
        });
        let mut pooled = ImageStoreMut::alloc(517, 300, ChannelOrder::RGBA);
        scaler.resize(&source, &mut pooled).unwrap();
        assert_eq!(single.as_bytes(), pooled.as_bytes());

        scaler.set_threading_policy(ThreadingPolicy::Fixed(3));
        let mut fixed = ImageStoreMut::alloc(517, 300, ChannelOrder::RGBA);
        scaler.resize(&source, &mut fixed).unwrap();
        assert_eq!(single.as_bytes(), fixed.as_bytes());
    }

    #[test]
    fn pass_order_follows_cost_estimate() {
        assert!(!is_horizontal_first(
            ImageSize::new(1000, 10),
            ImageSize::new(10, 10)
        ));
        assert!(is_horizontal_first(
            ImageSize::new(10, 1000),
            ImageSize::new(10, 10)
        ));
        assert!(!is_horizontal_first(
            ImageSize::new(8, 8),
            ImageSize::new(4, 4)
        ));
    }
}
