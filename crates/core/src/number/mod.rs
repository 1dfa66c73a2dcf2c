mod format;

pub use format::number_to_string;

const TWO_31: f64 = 2147483648.0;
const TWO_32: f64 = 4294967296.0;

/// Wraps any double onto a signed 32-bit integer. NaN, the infinities and
/// both zeros map to 0; everything else is truncated and taken modulo 2^32.
#[inline]
pub fn to_int32(n: f64) -> i32 {
    if !n.is_finite() || n == 0.0 {
        return 0;
    }
    let m = n.trunc().rem_euclid(TWO_32);
    if m >= TWO_31 {
        (m - TWO_32) as i32
    } else {
        m as i32
    }
}

#[inline]
pub fn to_uint32(n: f64) -> u32 {
    if !n.is_finite() || n == 0.0 {
        return 0;
    }
    n.trunc().rem_euclid(TWO_32) as u32
}
