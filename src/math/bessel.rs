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
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4, PI};

// Rational approximations of the first order Bessel function of the first kind.
// `J1_P/J1_Q` cover |x| < 8 in x², `P1_*`/`Q1_*` are the asymptotic terms in (8/x)².

const J1_P: [f64; 9] = [
    0.581199354001606143928050809e+21,
    -0.6672106568924916298020941484e+20,
    0.2316433580634002297931815435e+19,
    -0.3588817569910106050743641413e+17,
    0.2908795263834775409737601689e+15,
    -0.1322983480332126453125473247e+13,
    0.3413234182301700539091292655e+10,
    -0.4695753530642995859767162166e+7,
    0.270112271089232341485679099e+4,
];

const J1_Q: [f64; 9] = [
    0.11623987080032122878585294e+22,
    0.1185770712190320999837113348e+20,
    0.6092061398917521746105196863e+17,
    0.2081661221307607351240184229e+15,
    0.5243710262167649715406728642e+12,
    0.1013863514358673989967045588e+10,
    0.1501793594998585505921097578e+7,
    0.1606931573481487801970916749e+4,
    0.1e+1,
];

const P1_P: [f64; 6] = [
    0.352246649133679798341724373e+5,
    0.62758845247161281269005675e+5,
    0.313539631109159574238669888e+5,
    0.49854832060594338434500455e+4,
    0.2111529182853962382105718e+3,
    0.12571716929145341558495e+1,
];

const P1_Q: [f64; 6] = [
    0.352246649133679798068390431e+5,
    0.626943469593560511888833731e+5,
    0.312404063819041039923015703e+5,
    0.4930396490181088979386097e+4,
    0.2030775189134759322293574e+3,
    0.1e+1,
];

const Q1_P: [f64; 6] = [
    0.3511751914303552822533318e+3,
    0.7210391804904475039280863e+3,
    0.4259873011654442389886993e+3,
    0.831898957673850827325226e+2,
    0.45681716295512267064405e+1,
    0.3532840052740123642735e-1,
];

const Q1_Q: [f64; 6] = [
    0.74917374171809127714519505e+4,
    0.154141773392650970499848051e+5,
    0.91522317015169922705904727e+4,
    0.18111867005523513506724158e+4,
    0.1038187585462133728776636e+3,
    0.1e+1,
];

/// Evaluates `P(z)/Q(z)` with coefficients in ascending order.
#[inline]
fn rational(p: &[f64], q: &[f64], z: f64) -> f64 {
    let num = p.iter().rev().fold(0., |acc, &c| acc * z + c);
    let den = q.iter().rev().fold(0., |acc, &c| acc * z + c);
    num / den
}

/// J1(x)/x for |x| < 8
#[inline]
fn j1_small(x: f64) -> f64 {
    rational(&J1_P, &J1_Q, x * x)
}

#[inline]
fn p1(x: f64) -> f64 {
    let z = 8. / x;
    rational(&P1_P, &P1_Q, z * z)
}

#[inline]
fn q1(x: f64) -> f64 {
    let z = 8. / x;
    rational(&Q1_P, &Q1_Q, z * z)
}

/// First order Bessel function of the first kind.
pub(crate) fn bessel_order_one(x: f64) -> f64 {
    if x == 0. {
        return 0.;
    }
    let ax = x.abs();
    if ax < 8. {
        return x * j1_small(ax);
    }
    let (s, c) = ax.sin_cos();
    let q = (2. / (PI * ax)).sqrt()
        * (p1(ax) * (FRAC_1_SQRT_2 * (s - c)) - 8. / ax * q1(ax) * (-FRAC_1_SQRT_2 * (s + c)));
    if x < 0. { -q } else { q }
}

/// Jinc style kernel `J1(πx)/(2x)`.
#[inline]
pub(crate) fn bessel(x: f64, _: f64) -> f64 {
    if x == 0. {
        return FRAC_PI_4;
    }
    bessel_order_one(PI * x) / (2. * x)
}
