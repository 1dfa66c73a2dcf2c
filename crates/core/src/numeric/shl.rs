use crate::number::{to_int32, to_uint32};
use crate::numeric::shift_bigint;
use crate::{BinaryOperation, EvalError, Numeric};
use std::ops::Shl;

impl Shl for &Numeric {
    type Output = Result<Numeric, EvalError>;

    #[inline]
    fn shl(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Numeric::Number(a), Numeric::Number(b)) => Ok(Numeric::Number(f64::from(
                to_int32(*a).wrapping_shl(to_uint32(*b) & 0x1F),
            ))),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => Ok(Numeric::BigInt(shift_bigint(a, b)?)),
            (lhs, rhs) => Err(EvalError::type_mix(BinaryOperation::Shl, lhs, rhs)),
        }
    }
}
