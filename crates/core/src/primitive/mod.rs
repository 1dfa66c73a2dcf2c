use crate::number::number_to_string;
use crate::object::default_to_string;
use crate::{EvalError, Hook, HookKind, ObjectRef, Property, PropertyKey, Value};
use log::{debug, trace};
use num_bigint::BigInt;
use std::fmt::{Display, Formatter};

/// Any value that is not an object.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    BigInt(BigInt),
}

impl TryFrom<&Value> for Primitive {
    type Error = ObjectRef;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let p = match value {
            Value::Undefined => Primitive::Undefined,
            Value::Null => Primitive::Null,
            Value::Bool(b) => Primitive::Bool(*b),
            Value::Number(n) => Primitive::Number(*n),
            Value::String(s) => Primitive::String(s.clone()),
            Value::BigInt(b) => Primitive::BigInt(b.clone()),
            Value::Object(o) => return Err(o.clone()),
        };
        Ok(p)
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        match value {
            Primitive::Undefined => Value::Undefined,
            Primitive::Null => Value::Null,
            Primitive::Bool(b) => Value::Bool(b),
            Primitive::Number(n) => Value::Number(n),
            Primitive::String(s) => Value::String(s),
            Primitive::BigInt(b) => Value::BigInt(b),
        }
    }
}

/// The string form used by string conversion.
impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Primitive::Undefined => write!(f, "undefined"),
            Primitive::Null => write!(f, "null"),
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Number(n) => write!(f, "{}", number_to_string(*n)),
            Primitive::String(s) => write!(f, "{s}"),
            Primitive::BigInt(b) => write!(f, "{b}"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PreferredType {
    Default,
    #[default]
    Number,
    String,
}

impl PreferredType {
    /// The hint handed to `Symbol.toPrimitive`.
    #[inline]
    pub fn hint(self) -> &'static str {
        match self {
            PreferredType::Default => "default",
            PreferredType::Number => "number",
            PreferredType::String => "string",
        }
    }

    #[inline]
    fn hook_order(self) -> [HookKind; 2] {
        match self {
            PreferredType::String => [HookKind::ToString, HookKind::ValueOf],
            PreferredType::Default | PreferredType::Number => {
                [HookKind::ValueOf, HookKind::ToString]
            }
        }
    }
}

/// Reduces `value` to a primitive. Primitives are returned unchanged; objects
/// consult `Symbol.toPrimitive`, then `valueOf` / `toString` in the order
/// `preferred_type` dictates. Errors raised by hooks propagate untouched.
pub fn to_primitive(value: &Value, preferred_type: PreferredType) -> Result<Primitive, EvalError> {
    let object = match Primitive::try_from(value) {
        Ok(p) => return Ok(p),
        Err(object) => object,
    };
    trace!("to_primitive {value} hint={}", preferred_type.hint());

    let exotic = object.borrow().get(&PropertyKey::ToPrimitive).cloned();
    match exotic {
        None | Some(Property::Data(Value::Undefined | Value::Null)) => {}
        Some(Property::Method(method)) => {
            let result = method.call(value, &[preferred_type.hint().into()])?;
            return Primitive::try_from(&result).map_err(|_| {
                EvalError::conversion(format!(
                    "{} must return a primitive value",
                    PropertyKey::ToPrimitive
                ))
            });
        }
        Some(Property::Data(v)) => {
            return Err(EvalError::conversion(format!(
                "{} is not callable ({})",
                PropertyKey::ToPrimitive,
                v.type_name()
            )))
        }
    }

    ordinary_to_primitive(value, &object, preferred_type)
}

fn ordinary_to_primitive(
    value: &Value,
    object: &ObjectRef,
    preferred_type: PreferredType,
) -> Result<Primitive, EvalError> {
    for kind in preferred_type.hook_order() {
        let hook = object.borrow().hook(kind);
        let result = match hook {
            Hook::Own(method) => method.call(value, &[])?,
            Hook::Inherited => match kind {
                // inherited valueOf returns the object itself
                HookKind::ValueOf => continue,
                HookKind::ToString => Value::String(default_to_string(object)?),
            },
            Hook::NotCallable | Hook::Absent => {
                debug!("{kind} is not callable on {value}, skipping");
                continue;
            }
        };

        match Primitive::try_from(&result) {
            Ok(p) => return Ok(p),
            Err(_) => debug!("{kind} returned an object, trying the next hook"),
        }
    }

    Err(EvalError::conversion("Cannot convert object to primitive value"))
}

/// String conversion of any value.
pub fn to_string_value(value: &Value) -> Result<String, EvalError> {
    Ok(to_primitive(value, PreferredType::String)?.to_string())
}
