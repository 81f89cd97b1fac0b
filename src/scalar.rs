// Scalar kernel: no calls into the platform math library

use crate::lut::{SIN_SAMPLES, SIN_TABLE};

pub const PI: f32 = 3.14159265358979323846264338327950288;
pub const PI_2: f32 = 1.57079632679489661923132169163975144;
pub const PI_4: f32 = 0.785398163397448309615660845819875721;
pub const TAU: f32 = 6.28318530717958647692528676655900577;

const LN_2: f32 = 0.693147180559945309417232121458176568;

// Anything at or beyond this magnitude has no fractional part
const INTEGRAL_LIMIT: f32 = 8388608.0; // 2^23

/// Fast approximate `1 / sqrt(x)`: magic-constant guess plus one
/// Newton-Raphson step. Relative error stays under 0.2%.
/// Undefined for `x <= 0`.
#[inline]
pub fn inverse_sqrt(x: f32) -> f32 {
    let half = x * 0.5;

    let guess = 0x5f3759df - (x.to_bits() >> 1);
    let guess = f32::from_bits(guess);

    guess * (1.5 - half * guess * guess)
}

/// Square root derived from `inverse_sqrt`; exact for zero
#[inline]
pub fn sqrt(x: f32) -> f32 {
    if x == 0. {
        return 0.;
    }

    x * inverse_sqrt(x)
}

#[inline]
pub fn abs(x: f32) -> f32 {
    if x < 0. { -x } else { x }
}

#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[inline]
pub fn rad(degrees: f32) -> f32 {
    degrees * PI / 180.
}

#[inline]
pub fn deg(radians: f32) -> f32 {
    radians * 180. / PI
}

/// Rounds toward zero
pub fn trunc(x: f32) -> f32 {
    // Also passes NaN through untouched
    if !(abs(x) < INTEGRAL_LIMIT) {
        return x;
    }

    (x as i32) as f32
}

/// Rounds toward negative infinity
pub fn floor(x: f32) -> f32 {
    let truncated = trunc(x);

    if truncated > x {
        truncated - 1.
    } else {
        truncated
    }
}

/// Floating point remainder with the sign of `x`
pub fn fmod(x: f32, y: f32) -> f32 {
    x - y * trunc(x / y)
}

/// Unclamped linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/* Trigonometry */

pub fn sin(x: f32) -> f32 {
    // Reduce into [0, TAU)
    let mut reduced = x - floor(x / TAU) * TAU;

    // Just below a whole turn, x / TAU rounds up
    if reduced < 0. {
        reduced += TAU;
    }

    let t = reduced * (SIN_SAMPLES as f32 / TAU);
    let sample = floor(t);
    let frac = t - sample;

    // Rounding can land exactly on TAU
    let i = (sample as usize) % SIN_SAMPLES;
    let j = (i + 1) % SIN_SAMPLES;

    lerp(SIN_TABLE[i], SIN_TABLE[j], frac)
}

#[inline]
pub fn cos(x: f32) -> f32 {
    sin(x + PI_2)
}

/// Unguarded: magnitude blows up near odd multiples of `PI_2`
#[inline]
pub fn tan(x: f32) -> f32 {
    sin(x) / cos(x)
}

/// Clamped arccosine. Inputs outside `[-1, 1]` return exactly `0` or `PI`.
pub fn acos(x: f32) -> f32 {
    if x >= 1. {
        return 0.;
    }

    if x <= -1. {
        return PI;
    }

    let a = abs(x);
    let polynomial = ((-0.0187293 * a + 0.0742610) * a - 0.2121144) * a
        + 1.5707288;

    // sqrt(1 - a) without the zero guard; 1 - a > 0 here
    let root = (1. - a) * inverse_sqrt(1. - a);
    let result = root * polynomial;

    if x < 0. {
        PI - result
    } else {
        result
    }
}

/* Exponentials */

/// `e^x`: ten-term Taylor series around a power-of-two range reduction
pub fn exp(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }

    // Outside these bounds f32 saturates anyway (ln(f32::MAX) = 88.7228)
    if x > 88.73 {
        return f32::INFINITY;
    }

    if x < -103.9 {
        return 0.;
    }

    // x = k * ln2 + r, |r| <= ln2 / 2
    let k = floor(x / LN_2 + 0.5);
    let r = x - k * LN_2;

    let mut term = 1.;
    let mut sum = 1.;

    for n in 1..10 {
        term *= r / n as f32;
        sum += term;
    }

    // Scale in two halves; 2^k alone overflows at k = 128
    let k = k as i32;
    sum * pow2(k / 2) * pow2(k - k / 2)
}

/// Natural logarithm: two-term arctanh series on the mantissa,
/// exponent added back as multiples of ln2
pub fn ln(x: f32) -> f32 {
    if x.is_nan() || x < 0. {
        return f32::NAN;
    }

    if x == 0. {
        return f32::NEG_INFINITY;
    }

    if x == f32::INFINITY {
        return x;
    }

    // Subnormals: scale into the normal range first
    let (x, bias) = if x < f32::MIN_POSITIVE {
        (x * 16777216., -24) // 2^24
    } else {
        (x, 0)
    };

    let bits = x.to_bits();
    let mut exponent = ((bits >> 23) & 0xff) as i32 - 127 + bias;
    let mut mantissa = f32::from_bits((bits & 0x007f_ffff) | 0x3f80_0000);

    // Center the mantissa around one: [sqrt(1/2), sqrt(2))
    if mantissa > 1.41421356 {
        mantissa *= 0.5;
        exponent += 1;
    }

    let y = (mantissa - 1.) / (mantissa + 1.);
    let y2 = y * y;

    2. * y * (1. + y2 / 3.) + exponent as f32 * LN_2
}

/// `base^exponent` as `exp(exponent * ln(base))`
pub fn pow(base: f32, exponent: f32) -> f32 {
    if exponent == 0. {
        return 1.;
    }

    if base == 0. {
        return 0.;
    }

    if exponent == 1. {
        return base;
    }

    exp(exponent * ln(base))
}

// 2^k built directly from the exponent bits
fn pow2(k: i32) -> f32 {
    if k > 127 {
        f32::INFINITY
    } else if k >= -126 {
        f32::from_bits(((k + 127) as u32) << 23)
    } else if k >= -149 {
        // Subnormal
        f32::from_bits(1 << (k + 149) as u32)
    } else {
        0.
    }
}

/* Easing */

pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0., 1.);
    t * t * (3. - 2. * t)
}

pub fn smootherstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0., 1.);
    t * t * t * (t * (t * 6. - 15.) + 10.)
}

// Bounce variants expect t in [0, 1]

pub fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1. / D {
        N * t * t
    } else if t < 2. / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

pub fn bounce_in(t: f32) -> f32 {
    1. - bounce_out(1. - t)
}

pub fn bounce_in_out(t: f32) -> f32 {
    if t < 0.5 {
        (1. - bounce_out(1. - 2. * t)) * 0.5
    } else {
        (1. + bounce_out(2. * t - 1.)) * 0.5
    }
}
