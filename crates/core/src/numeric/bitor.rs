use crate::number::to_int32;
use crate::{BinaryOperation, EvalError, Numeric};
use std::ops::BitOr;

impl BitOr for &Numeric {
    type Output = Result<Numeric, EvalError>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Numeric::Number(a), Numeric::Number(b)) => {
                Ok(Numeric::Number(f64::from(to_int32(*a) | to_int32(*b))))
            }
            (Numeric::BigInt(a), Numeric::BigInt(b)) => Ok(Numeric::BigInt(a | b)),
            (lhs, rhs) => Err(EvalError::type_mix(BinaryOperation::BitOr, lhs, rhs)),
        }
    }
}
