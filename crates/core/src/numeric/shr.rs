use crate::number::{to_int32, to_uint32};
use crate::numeric::shift_bigint;
use crate::{BinaryOperation, EvalError, Numeric};
use std::ops::{Neg, Shr};

impl Shr for &Numeric {
    type Output = Result<Numeric, EvalError>;

    #[inline]
    fn shr(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Numeric::Number(a), Numeric::Number(b)) => Ok(Numeric::Number(f64::from(
                to_int32(*a) >> (to_uint32(*b) & 0x1F),
            ))),
            (Numeric::BigInt(a), Numeric::BigInt(b)) => {
                Ok(Numeric::BigInt(shift_bigint(a, &b.neg())?))
            }
            (lhs, rhs) => Err(EvalError::type_mix(BinaryOperation::Shr, lhs, rhs)),
        }
    }
}

impl Numeric {
    /// Logical right shift; the result is read as unsigned.
    pub fn unsigned_shr(&self, rhs: &Numeric) -> Result<Numeric, EvalError> {
        match (self, rhs) {
            (Numeric::Number(a), Numeric::Number(b)) => Ok(Numeric::Number(f64::from(
                to_uint32(*a) >> (to_uint32(*b) & 0x1F),
            ))),
            (Numeric::BigInt(_), Numeric::BigInt(_)) => Err(EvalError::UnsupportedOperation(
                "BigInts have no unsigned right shift, use >> instead".to_string(),
            )),
            (lhs, rhs) => Err(EvalError::type_mix(BinaryOperation::UShr, lhs, rhs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::define_value_tests;
    use num_bigint::BigInt;

    define_value_tests! {
        Shr {
            test_sixteen_shr_two => (16, 2) = 4;
            test_negative_shr_keeps_sign => (-16, 2) = -4;
            test_shr_count_masked => (-1, 63) = -1;
            test_bigint_shr_floors => (BigInt::from(-9), BigInt::from(1)) = BigInt::from(-5);
            test_bigint_shr_huge_count => (BigInt::from(-9), BigInt::from(1u128 << 100)) = BigInt::from(-1);
        }
    }

    mod unsigned {
        use crate::define_value_tests;

        define_value_tests! {
            UShr {
                test_minus_one_ushr_zero => (-1, 0) = 4294967295u32;
                test_minus_sixteen_ushr_two => (-16, 2) = 1073741820;
                test_ushr_nan => (f64::NAN, 1) = 0;
            }
        }
    }
}
