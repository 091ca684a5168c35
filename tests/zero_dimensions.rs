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
    ChannelOrder, ImageStore, ImageStoreMut, PicScaleError, ResamplingFunction, Sample, resize,
};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

struct CountingAllocator;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn bump() {
    let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        bump();
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        bump();
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        bump();
        unsafe { System.realloc(ptr, layout, new_size) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn allocations() -> usize {
    ALLOCATIONS.with(|count| count.get())
}

#[test]
fn zero_dimensions_do_not_allocate() {
    let source = ImageStore::from_samples(
        &[Sample::opaque(1, 2, 3); 16],
        4,
        4,
        ChannelOrder::RGBA,
    )
    .unwrap();
    let empty = ImageStore::from_slice(&[], 0, 3, ChannelOrder::RGBA).unwrap();
    let mut destination = ImageStoreMut::alloc(2, 2, ChannelOrder::RGBA);
    let mut nothing: [u8; 0] = [];
    let mut no_rows = ImageStoreMut::from_slice(&mut nothing, 5, 0, ChannelOrder::RGBA).unwrap();

    for function in [None, Some(ResamplingFunction::Lanczos)] {
        let before = allocations();
        let shrink = resize(&source, &mut no_rows, function, 1.);
        let grow = resize(&empty, &mut destination, function, 1.);
        let after = allocations();

        assert_eq!(shrink, Err(PicScaleError::ZeroImageDimensions));
        assert_eq!(grow, Err(PicScaleError::ZeroImageDimensions));
        assert_eq!(after, before);
    }
}

#[test]
fn regular_resize_allocates() {
    let source = ImageStore::from_samples(
        &[Sample::opaque(1, 2, 3); 16],
        4,
        4,
        ChannelOrder::RGBA,
    )
    .unwrap();
    let mut destination = ImageStoreMut::alloc(3, 3, ChannelOrder::RGBA);
    let before = allocations();
    resize(&source, &mut destination, None, 1.).unwrap();
    assert!(allocations() > before);
}
