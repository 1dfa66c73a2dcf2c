use crate::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperation {
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UShr,
}

impl BinaryOperation {
    pub const ALL: [BinaryOperation; 6] = [
        BinaryOperation::BitAnd,
        BinaryOperation::BitOr,
        BinaryOperation::BitXor,
        BinaryOperation::Shl,
        BinaryOperation::Shr,
        BinaryOperation::UShr,
    ];

    #[inline]
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperation::BitAnd => "&",
            BinaryOperation::BitOr => "|",
            BinaryOperation::BitXor => "^",
            BinaryOperation::Shl => "<<",
            BinaryOperation::Shr => ">>",
            BinaryOperation::UShr => ">>>",
        }
    }
}

impl Display for BinaryOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for BinaryOperation {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinaryOperation::ALL
            .into_iter()
            .find(|op| op.symbol() == s.trim())
            .ok_or_else(|| {
                EvalError::UnsupportedOperation(format!("{s} is not a bitwise operator"))
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::{BinaryOperation, EvalError};
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test(unsupported = test)]
    fn symbols_round_trip() {
        for op in BinaryOperation::ALL {
            assert_eq!(op.to_string().parse::<BinaryOperation>(), Ok(op));
        }
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn rejects_arithmetic() {
        assert_eq!(
            "+".parse::<BinaryOperation>(),
            Err(EvalError::UnsupportedOperation(
                "+ is not a bitwise operator".to_string()
            ))
        );
    }

    #[wasm_bindgen_test(unsupported = test)]
    fn json_round_trip() {
        let json = serde_json::to_string(&BinaryOperation::UShr).expect("serialize failed");
        assert_eq!(json, r#""UShr""#);
        let back: BinaryOperation = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(back, BinaryOperation::UShr);
    }
}
