use crate::{to_string_value, EvalError, ObjectRef, Value};
use itertools::Itertools;
use log::debug;
use std::rc::Rc;

const OBJECT_TAG: &str = "[object Object]";

/// The inherited `toString`: arrays join their elements with `,`, every other
/// object reports its tag.
pub(crate) fn default_to_string(object: &ObjectRef) -> Result<String, EvalError> {
    let mut active = Vec::new();
    stringify(object, &mut active)
}

fn stringify(object: &ObjectRef, active: &mut Vec<ObjectRef>) -> Result<String, EvalError> {
    // cloned so no borrow is held while elements run user hooks
    let elements = object.borrow().elements.clone();
    let Some(elements) = elements else {
        return Ok(OBJECT_TAG.to_string());
    };

    if active.iter().any(|a| Rc::ptr_eq(a, object)) {
        debug!("array contains itself, joining the inner reference as empty");
        return Ok(String::new());
    }

    active.push(object.clone());
    let joined = itertools::process_results(
        elements
            .iter()
            .map(|element| element_to_string(element.as_ref(), active)),
        |mut parts| parts.join(","),
    );
    active.pop();
    joined
}

fn element_to_string(
    element: Option<&Value>,
    active: &mut Vec<ObjectRef>,
) -> Result<String, EvalError> {
    match element {
        None | Some(Value::Undefined) | Some(Value::Null) => Ok(String::new()),
        Some(Value::Object(inner)) if inner.borrow().uses_default_to_string() => {
            stringify(inner, active)
        }
        Some(v) => to_string_value(v),
    }
}
