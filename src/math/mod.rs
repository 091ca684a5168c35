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
mod bc_spline;
mod bessel;
mod blackman;
mod gaussian;
mod hann;
mod lanczos;
mod quadric;
mod sinc;
mod triangle;
pub(crate) mod weights;

pub(crate) use bc_spline::{b_spline, catmull_rom, hermite_spline, mitchell_netravalli};
pub(crate) use blackman::{blackman, blackman_bessel, blackman_sinc};
pub(crate) use gaussian::gaussian;
pub(crate) use hann::{hamming, hanning};
pub(crate) use lanczos::lanczos;
pub(crate) use quadric::quadric;
pub(crate) use sinc::sinc;
pub(crate) use triangle::{box_filter, triangle};
pub use weights::{Contribution, compute_contributions, filter_support};

use num_traits::MulAdd;

/// Computes `a * b + c`
#[inline(always)]
pub(crate) fn mla<V: MulAdd<V, Output = V>>(a: V, b: V, c: V) -> V {
    MulAdd::mul_add(a, b, c)
}
