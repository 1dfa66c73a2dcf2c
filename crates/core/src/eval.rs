use crate::{to_numeric, BinaryOperation, EvalError, Value};
use log::trace;

/// Evaluates `left <operation> right` for any two values.
///
/// Both operands go through numeric conversion, left first. A conversion
/// that fails stops evaluation before the right operand is touched; a NaN
/// does not.
pub fn evaluate(
    operation: BinaryOperation,
    left: &Value,
    right: &Value,
) -> Result<Value, EvalError> {
    let lhs = to_numeric(left)?;
    let rhs = to_numeric(right)?;
    trace!("evaluate {lhs} {operation} {rhs}");

    let result = match operation {
        BinaryOperation::BitAnd => &lhs & &rhs,
        BinaryOperation::BitOr => &lhs | &rhs,
        BinaryOperation::BitXor => &lhs ^ &rhs,
        BinaryOperation::Shl => &lhs << &rhs,
        BinaryOperation::Shr => &lhs >> &rhs,
        BinaryOperation::UShr => lhs.unsigned_shr(&rhs),
    }?;
    Ok(result.into())
}

#[inline]
pub fn bitwise_and(left: &Value, right: &Value) -> Result<Value, EvalError> {
    evaluate(BinaryOperation::BitAnd, left, right)
}
