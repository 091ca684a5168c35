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
use crate::image_size::ImageSize;
use rayon::ThreadPool;

#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ThreadingPolicy {
    /// Everything runs on the calling thread
    #[default]
    Single,
    /// Exact count of worker threads
    Fixed(usize),
    /// Picks worker count from the destination size
    Adaptive,
}

impl ThreadingPolicy {
    pub fn get_threads_count(&self, for_size: ImageSize) -> usize {
        match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Fixed(thread_count) => (*thread_count).max(1),
            ThreadingPolicy::Adaptive => {
                let box_size = 256 * 256;
                let new_box_size = for_size.height.saturating_mul(for_size.width);
                (new_box_size / box_size).clamp(1, 16)
            }
        }
    }

    /// Builds a pool for `for_size`, `None` means the work stays on the calling thread
    pub fn get_pool(&self, for_size: ImageSize) -> Option<ThreadPool> {
        if *self == ThreadingPolicy::Single {
            return None;
        }
        let threads_count = self.get_threads_count(for_size);
        if threads_count == 1 {
            return None;
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads_count)
            .build()
        {
            Ok(pool) => Some(pool),
            Err(err) => {
                log::warn!("Falling back to a single thread, thread pool was not created: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_scales_with_area() {
        let policy = ThreadingPolicy::Adaptive;
        assert_eq!(policy.get_threads_count(ImageSize::new(16, 16)), 1);
        assert_eq!(policy.get_threads_count(ImageSize::new(512, 512)), 4);
        assert_eq!(policy.get_threads_count(ImageSize::new(8192, 8192)), 16);
        assert_eq!(ThreadingPolicy::Fixed(0).get_threads_count(ImageSize::new(1, 1)), 1);
    }

    #[test]
    fn single_has_no_pool() {
        assert!(ThreadingPolicy::Single.get_pool(ImageSize::new(4096, 4096)).is_none());
        assert!(ThreadingPolicy::Adaptive.get_pool(ImageSize::new(4, 4)).is_none());
        let pool = ThreadingPolicy::Fixed(2).get_pool(ImageSize::new(4, 4));
        assert_eq!(pool.map(|p| p.current_num_threads()), Some(2));
    }
}
