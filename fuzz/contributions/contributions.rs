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

use libfuzzer_sys::fuzz_target;
use pic_resample::{ResamplingFunction, compute_contributions};

fuzz_target!(|data: (u16, u16, u8, u8)| {
    let source_len = data.0 as usize % 2048 + 1;
    let output_len = data.1 as usize % 2048 + 1;
    let function = ResamplingFunction::from(data.2 as u32);
    let blur = data.3 as f64 / 64.;
    let filter = function.get_resampling_filter();
    let axis_scale = output_len as f64 / source_len as f64;

    for output in [0, output_len / 2, output_len - 1] {
        let contributions = compute_contributions(output, axis_scale, &filter, blur, source_len);
        assert!(contributions.iter().all(|c| c.pixel < source_len));
        assert!(
            contributions
                .windows(2)
                .all(|w| w[0].pixel + 1 == w[1].pixel)
        );
        let sum: f64 = contributions.iter().map(|c| c.weight).sum();
        assert!(contributions.iter().all(|c| c.weight == 0.) || (sum - 1.).abs() < 1e-9);
    }
});
