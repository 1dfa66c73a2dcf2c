use crate::{BinaryOperation, Numeric};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EvalError {
    /// An object could not be reduced to a primitive.
    ConversionFailure(String),
    /// A BigInt operand met a Number operand.
    TypeMixError(String),
    RangeError(String),
    UnsupportedOperation(String),
    /// Raised by user code, usually a conversion hook.
    RuntimeError(String),
}

impl Error for EvalError {}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::ConversionFailure(m) => write!(f, "Conversion Failure: {m}"),
            EvalError::TypeMixError(m) => write!(f, "Type Mix Error: {m}"),
            EvalError::RangeError(m) => write!(f, "Range Error: {m}"),
            EvalError::UnsupportedOperation(m) => write!(f, "Unsupported Operation: {m}"),
            EvalError::RuntimeError(m) => write!(f, "{m}"),
        }
    }
}

impl EvalError {
    pub fn conversion<T: Display>(message: T) -> Self {
        EvalError::ConversionFailure(message.to_string())
    }

    pub fn type_mix(operation: BinaryOperation, lhs: &Numeric, rhs: &Numeric) -> Self {
        EvalError::TypeMixError(format!(
            "Cannot use {operation} operator with BigInt and other types ({} {operation} {})",
            lhs.kind(),
            rhs.kind()
        ))
    }

    pub fn thrown<T: Display>(message: T) -> Self {
        EvalError::RuntimeError(message.to_string())
    }
}
