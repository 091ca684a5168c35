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
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use image::{ImageReader, RgbaImage};
use pic_resample::{
    ChannelOrder, ImageStore, ImageStoreMut, ResamplingFunction, ResizeStatus, Scaler, Scaling,
    ScalingOptions, ThreadingPolicy,
};

#[derive(Parser, Debug)]
#[command(about = "Resizes an image with one of the separable resampling kernels")]
struct Args {
    input: PathBuf,
    output: PathBuf,
    #[arg(long)]
    width: u32,
    #[arg(long)]
    height: u32,
    /// Kernel name, Mitchell when omitted
    #[arg(long)]
    kernel: Option<String>,
    #[arg(long, default_value_t = 1.0)]
    blur: f64,
    /// Worker threads, 0 picks a count from the output size
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

fn parse_kernel(name: &str) -> Result<ResamplingFunction> {
    for function in ResamplingFunction::ALL {
        if format!("{function:?}").eq_ignore_ascii_case(name) {
            return Ok(function);
        }
    }
    bail!("Unknown kernel '{name}', expected one of {:?}", ResamplingFunction::ALL)
}

/// Images decoded here carry straight alpha, the resampler stores inverted opacity
fn invert_alpha(bytes: &mut [u8]) {
    for px in bytes.chunks_exact_mut(4) {
        px[3] = 255 - px[3];
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let resampling_function = args.kernel.as_deref().map(parse_kernel).transpose()?;
    let threading_policy = match args.threads {
        0 => ThreadingPolicy::Adaptive,
        1 => ThreadingPolicy::Single,
        n => ThreadingPolicy::Fixed(n),
    };

    let img = ImageReader::open(&args.input)
        .with_context(|| format!("Cannot open {}", args.input.display()))?
        .decode()?;
    let source = img.to_rgba8();
    let (width, height) = source.dimensions();
    let mut bytes = source.into_raw();
    invert_alpha(&mut bytes);

    let store = ImageStore::new(bytes, width as usize, height as usize, ChannelOrder::RGBA)?;
    let mut target = ImageStoreMut::alloc(
        args.width as usize,
        args.height as usize,
        ChannelOrder::RGBA,
    );

    let scaler = Scaler::from_options(ScalingOptions {
        resampling_function,
        blur: args.blur,
        threading_policy,
    });

    let start_time = Instant::now();
    let status = scaler.resize(&store, &mut target)?;
    let elapsed_time = start_time.elapsed();
    println!(
        "{:?} {}x{} -> {}x{} in {:.2?}{}",
        scaler.resampling_function(),
        width,
        height,
        args.width,
        args.height,
        elapsed_time,
        if status == ResizeStatus::IdentityCopy {
            " (copied)"
        } else {
            ""
        }
    );

    let mut dst = target.as_bytes().to_vec();
    invert_alpha(&mut dst);
    let output = RgbaImage::from_raw(args.width, args.height, dst)
        .context("Resized buffer does not match output dimensions")?;
    output.save(&args.output)?;
    Ok(())
}
