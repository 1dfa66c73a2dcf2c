mod join;
mod method;

pub(crate) use join::default_to_string;
pub use method::Method;

use crate::{EvalError, Value};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type ObjectRef = Rc<RefCell<Object>>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    /// The well-known `Symbol.toPrimitive` key.
    ToPrimitive,
}

impl From<&'_ str> for PropertyKey {
    #[inline]
    fn from(value: &'_ str) -> Self {
        PropertyKey::String(value.to_string())
    }
}

impl From<String> for PropertyKey {
    #[inline]
    fn from(value: String) -> Self {
        PropertyKey::String(value)
    }
}

impl Display for PropertyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyKey::String(s) => write!(f, "{s}"),
            PropertyKey::ToPrimitive => write!(f, "[Symbol.toPrimitive]"),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Property {
    Data(Value),
    Method(Box<dyn Method>),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Prototype {
    /// Inherits the default `valueOf` and `toString`.
    #[default]
    Object,
    Null,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HookKind {
    ValueOf,
    ToString,
}

impl HookKind {
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            HookKind::ValueOf => "valueOf",
            HookKind::ToString => "toString",
        }
    }
}

impl Display for HookKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How an object answers one of the ordinary conversion hooks.
#[derive(Clone, Debug)]
pub enum Hook {
    Own(Box<dyn Method>),
    /// An own property shadows the hook but cannot be called.
    NotCallable,
    Inherited,
    Absent,
}

#[derive(Clone, Debug, Default)]
pub struct Object {
    pub prototype: Prototype,
    pub properties: IndexMap<PropertyKey, Property>,
    /// Present for array-like objects; `None` entries are holes.
    pub elements: Option<Vec<Option<Value>>>,
}

impl Object {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn array(elements: Vec<Value>) -> Self {
        Self::sparse_array(elements.into_iter().map(Some).collect())
    }

    pub fn sparse_array(elements: Vec<Option<Value>>) -> Self {
        Self {
            elements: Some(elements),
            ..Default::default()
        }
    }

    pub fn with_null_prototype(mut self) -> Self {
        self.prototype = Prototype::Null;
        self
    }

    pub fn with_property<K: Into<PropertyKey>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.properties
            .insert(key.into(), Property::Data(value.into()));
        self
    }

    pub fn with_method<K, F>(mut self, key: K, method: F) -> Self
    where
        K: Into<PropertyKey>,
        F: Fn(&Value, &[Value]) -> Result<Value, EvalError> + Clone + 'static,
    {
        self.properties
            .insert(key.into(), Property::Method(Box::new(method)));
        self
    }

    #[inline]
    pub fn into_ref(self) -> ObjectRef {
        Rc::new(RefCell::new(self))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.elements.is_some()
    }

    #[inline]
    pub fn get(&self, key: &PropertyKey) -> Option<&Property> {
        self.properties.get(key)
    }

    pub fn set<K: Into<PropertyKey>>(&mut self, key: K, property: Property) {
        self.properties.insert(key.into(), property);
    }

    pub fn hook(&self, kind: HookKind) -> Hook {
        match self.get(&kind.name().into()) {
            Some(Property::Method(m)) => Hook::Own(m.clone()),
            Some(Property::Data(_)) => Hook::NotCallable,
            None => match self.prototype {
                Prototype::Object => Hook::Inherited,
                Prototype::Null => Hook::Absent,
            },
        }
    }

    /// True when string conversion would land on the inherited `toString`,
    /// which lets array joins recurse without going through user code.
    pub fn uses_default_to_string(&self) -> bool {
        let exotic = !matches!(
            self.get(&PropertyKey::ToPrimitive),
            None | Some(Property::Data(Value::Undefined | Value::Null))
        );
        !exotic && matches!(self.hook(HookKind::ToString), Hook::Inherited)
    }
}
