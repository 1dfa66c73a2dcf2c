use crate::{EvalError, Value};
use dyn_clone::DynClone;
use std::fmt::{Debug, Formatter};

/// A callable member of an object. Conversion hooks are methods invoked with
/// the object as `this`.
pub trait Method: DynClone {
    fn call(&self, this: &Value, args: &[Value]) -> Result<Value, EvalError>;
}

dyn_clone::clone_trait_object!(Method);

impl<F> Method for F
where
    F: Fn(&Value, &[Value]) -> Result<Value, EvalError> + Clone,
{
    #[inline]
    fn call(&self, this: &Value, args: &[Value]) -> Result<Value, EvalError> {
        self(this, args)
    }
}

impl Debug for dyn Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<method>")
    }
}
