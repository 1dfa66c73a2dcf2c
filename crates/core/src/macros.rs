#[macro_export]
macro_rules! define_value_tests {
    ($op:ident { $($test_name:ident => ($lhs:expr, $rhs:expr) = $expected:expr);* $(;)? }) => {
        use $crate::{BinaryOperation, Value};
        use wasm_bindgen_test::*;

        $(
            #[wasm_bindgen_test(unsupported = test)]
            fn $test_name() {
                let lhs: Value = $lhs.into();
                let rhs: Value = $rhs.into();
                let expected: Value = $expected.into();
                assert_eq!(Ok(expected), $crate::evaluate(BinaryOperation::$op, &lhs, &rhs));
            }
        )*
    };
}

#[macro_export]
macro_rules! impl_from {
    ($($From:ty, $To:ty, $Constructor:expr;)*) => {
        $(
            impl From<$From> for $To {
                #[inline]
                fn from(value: $From) -> Self {
                    $Constructor(value)
                }
            }
        )*
    };
}

#[macro_export]
macro_rules! impl_from_cast {
    ($($From:ty as $cast:ty, $To:ty, $Constructor:expr;)*) => {
        $(
            impl From<$From> for $To {
                #[inline]
                fn from(value: $From) -> Self {
                    $Constructor(value as $cast)
                }
            }
        )*
    };
}
