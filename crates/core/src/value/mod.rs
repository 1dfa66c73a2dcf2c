mod error;

pub use error::EvalError;

use crate::number::number_to_string;
use crate::{impl_from, impl_from_cast, Object, ObjectRef, Primitive};
use num_bigint::BigInt;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    BigInt(BigInt),
    Object(ObjectRef),
}

impl_from! {
    bool, Value, Value::Bool;
    f64, Value, Value::Number;
    String, Value, Value::String;
    BigInt, Value, Value::BigInt;
    ObjectRef, Value, Value::Object;
}

impl_from_cast! {
    i32 as f64, Value, Value::Number;
    u32 as f64, Value, Value::Number;
    i64 as f64, Value, Value::Number;
    f32 as f64, Value, Value::Number;
}

impl From<&'_ str> for Value {
    #[inline]
    fn from(value: &'_ str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<()> for Value {
    #[inline]
    fn from(_value: ()) -> Self {
        Value::Undefined
    }
}

impl From<Object> for Value {
    #[inline]
    fn from(value: Object) -> Self {
        Value::Object(Rc::new(RefCell::new(value)))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Object::array(value.into_iter().map(|v| v.into()).collect()).into()
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    #[inline]
    fn from(value: Option<V>) -> Self {
        match value {
            None => Value::Null,
            Some(v) => v.into(),
        }
    }
}

impl Value {
    /// The primitive form of this value, or `None` for objects.
    #[inline]
    pub fn as_primitive(&self) -> Option<Primitive> {
        Primitive::try_from(self).ok()
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::BigInt(_) => "bigint",
            Value::Object(_) => "object",
        }
    }
}

// NaN equals NaN and objects compare by identity, so results can be asserted directly.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (_, _) => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", number_to_string(*n)),
            Value::String(s) => write!(f, "{s}"),
            Value::BigInt(b) => write!(f, "{b}n"),
            Value::Object(o) => match o.try_borrow() {
                Ok(o) if o.is_array() => write!(f, "[object Array]"),
                _ => write!(f, "[object Object]"),
            },
        }
    }
}
