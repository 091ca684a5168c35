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
use criterion::{Criterion, criterion_group, criterion_main};
use pic_resample::{
    ChannelOrder, ImageStore, ImageStoreMut, ResamplingFunction, Scaler, Scaling, ThreadingPolicy,
};
use std::hint::black_box;

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;

fn synthetic_rgba() -> Vec<u8> {
    let mut bytes = vec![0u8; WIDTH * HEIGHT * 4];
    for (i, px) in bytes.chunks_exact_mut(4).enumerate() {
        let x = i % WIDTH;
        let y = i / WIDTH;
        px[0] = (x * 255 / WIDTH) as u8;
        px[1] = (y * 255 / HEIGHT) as u8;
        px[2] = ((x ^ y) & 0xff) as u8;
        px[3] = if (x / 64 + y / 64) % 2 == 0 { 0 } else { 160 };
    }
    bytes
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let src_bytes = synthetic_rgba();

    for (name, function) in [
        ("Lanczos", ResamplingFunction::Lanczos),
        ("Mitchell", ResamplingFunction::Mitchell),
        ("Triangle", ResamplingFunction::Triangle),
        ("BlackmanSinc", ResamplingFunction::BlackmanSinc),
    ] {
        c.bench_function(&format!("Pic resample RGBA downscale x4: {name}"), |b| {
            let store =
                ImageStore::from_slice(&src_bytes, WIDTH, HEIGHT, ChannelOrder::RGBA).unwrap();
            let mut target = ImageStoreMut::alloc(WIDTH / 4, HEIGHT / 4, ChannelOrder::RGBA);
            let scaler = Scaler::new(function);
            b.iter(|| {
                _ = black_box(scaler.resize(&store, &mut target));
            })
        });
    }

    c.bench_function("Pic resample RGBA upscale x2 (Adaptive): Lanczos", |b| {
        let store = ImageStore::from_slice(&src_bytes, WIDTH, HEIGHT, ChannelOrder::RGBA).unwrap();
        let mut target = ImageStoreMut::alloc(WIDTH * 2, HEIGHT * 2, ChannelOrder::RGBA);
        let mut scaler = Scaler::new(ResamplingFunction::Lanczos);
        scaler.set_threading_policy(ThreadingPolicy::Adaptive);
        b.iter(|| {
            _ = black_box(scaler.resize(&store, &mut target));
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
