mod eval;
mod literal;
mod macros;
mod number;
mod numeric;
mod object;
mod operations;
mod primitive;
mod value;

pub use eval::{bitwise_and, evaluate};
pub use literal::{is_whitespace, parse_numeric_literal};
pub use number::{number_to_string, to_int32, to_uint32};
pub use numeric::{string_to_number, to_numeric, Numeric};
pub use object::{Hook, HookKind, Method, Object, ObjectRef, Property, PropertyKey, Prototype};
pub use operations::BinaryOperation;
pub use primitive::{to_primitive, to_string_value, PreferredType, Primitive};
pub use value::{EvalError, Value};
