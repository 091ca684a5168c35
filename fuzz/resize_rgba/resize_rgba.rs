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
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pic_resample::{
    ChannelOrder, ImageStore, ImageStoreMut, PicScaleError, ResamplingFunction, resize,
};

#[derive(Arbitrary, Debug)]
struct ResizeInput {
    src_width: u8,
    src_height: u8,
    dst_width: u16,
    dst_height: u16,
    function: Option<u8>,
    blur: u8,
    fill: [u8; 4],
}

const ORDERS: [ChannelOrder; 4] = [
    ChannelOrder::RGBA,
    ChannelOrder::BGRA,
    ChannelOrder::ARGB,
    ChannelOrder::ABGR,
];

fuzz_target!(|data: ResizeInput| {
    let src_width = data.src_width as usize;
    let src_height = data.src_height as usize;
    let dst_width = data.dst_width as usize % 512;
    let dst_height = data.dst_height as usize % 512;
    let function = data.function.map(|f| ResamplingFunction::from(f as u32));
    let blur = data.blur as f64 / 64.;

    let src_data = vec![data.fill[0]; src_width * src_height * 4];
    let source = ImageStore::from_slice(
        &src_data,
        src_width,
        src_height,
        ORDERS[data.fill[1] as usize % 4],
    )
    .unwrap();
    let mut destination =
        ImageStoreMut::alloc(dst_width, dst_height, ORDERS[data.fill[2] as usize % 4]);

    match resize(&source, &mut destination, function, blur) {
        Ok(_) => {
            assert_eq!(destination.as_bytes().len(), dst_width * dst_height * 4);
            assert!(destination.get_sample(dst_width - 1, dst_height - 1).is_some());
        }
        Err(PicScaleError::ZeroImageDimensions) => {
            assert!(src_width == 0 || src_height == 0 || dst_width == 0 || dst_height == 0);
        }
        Err(err) => panic!("Unexpected error {err}"),
    }
});
