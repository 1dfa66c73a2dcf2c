mod bitand;
mod bitor;
mod bitxor;
mod shl;
mod shr;

use crate::number::number_to_string;
use crate::{
    impl_from, is_whitespace, parse_numeric_literal, to_primitive, EvalError, PreferredType,
    Primitive, Value,
};
use log::trace;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt::{Display, Formatter};

/// Largest BigInt left shift, in bits, before the result is refused.
const MAX_BIGINT_SHIFT: u64 = 1 << 30;

/// The result of numeric conversion: a double, or a BigInt that stays exact.
#[derive(Clone, Debug, PartialEq)]
pub enum Numeric {
    Number(f64),
    BigInt(BigInt),
}

impl_from! {
    f64, Numeric, Numeric::Number;
    BigInt, Numeric, Numeric::BigInt;
}

impl From<Numeric> for Value {
    #[inline]
    fn from(value: Numeric) -> Self {
        match value {
            Numeric::Number(n) => Value::Number(n),
            Numeric::BigInt(b) => Value::BigInt(b),
        }
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Numeric::Number(n) => write!(f, "{}", number_to_string(*n)),
            Numeric::BigInt(b) => write!(f, "{b}n"),
        }
    }
}

impl Numeric {
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Numeric::Number(_) => "number",
            Numeric::BigInt(_) => "bigint",
        }
    }
}

/// Converts any value to a number, or keeps it a BigInt. Only hooks on
/// objects can fail; every primitive has a numeric form.
pub fn to_numeric(value: &Value) -> Result<Numeric, EvalError> {
    let n = match to_primitive(value, PreferredType::Number)? {
        Primitive::Number(n) => n,
        Primitive::Bool(b) => {
            if b {
                1.0
            } else {
                0.0
            }
        }
        Primitive::Null => 0.0,
        Primitive::Undefined => f64::NAN,
        Primitive::String(s) => string_to_number(&s),
        Primitive::BigInt(b) => return Ok(Numeric::BigInt(b)),
    };
    trace!("to_numeric {value} -> {n}");
    Ok(Numeric::Number(n))
}

/// Blank strings are 0, anything that is not a complete literal is NaN.
pub fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }
    parse_numeric_literal(trimmed).unwrap_or(f64::NAN)
}

/// Exact shift; a negative count shifts right, flooring toward negative infinity.
pub(crate) fn shift_bigint(value: &BigInt, count: &BigInt) -> Result<BigInt, EvalError> {
    if value.is_zero() {
        return Ok(BigInt::zero());
    }

    if count.is_negative() {
        let shifted = match count.magnitude().to_usize() {
            Some(bits) => value >> bits,
            None if value.is_negative() => BigInt::from(-1),
            None => BigInt::zero(),
        };
        return Ok(shifted);
    }

    match count.to_u64() {
        Some(bits) if bits <= MAX_BIGINT_SHIFT => Ok(value << bits as usize),
        _ => Err(EvalError::RangeError(format!(
            "Maximum BigInt size exceeded shifting left by {count}"
        ))),
    }
}
