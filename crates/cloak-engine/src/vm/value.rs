//! Value representation for the Cloak object model
//!
//! Values are dynamically typed. Primitives and strings compare structurally;
//! objects and functions compare by reference identity.

use std::fmt;
use std::rc::Rc;

use crate::vm::engine::Engine;
use crate::vm::function::FunctionRef;
use crate::vm::object::ObjectRef;
use crate::vm::EngineError;

/// A dynamically-typed runtime value
#[derive(Clone)]
pub enum Value {
    /// Absent value (also the result of a blocked read)
    Undefined,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// Immutable string
    Str(Rc<str>),
    /// Heap object handle
    Object(ObjectRef),
    /// Function handle
    Function(FunctionRef),
}

impl Value {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an undefined value
    pub const fn undefined() -> Self {
        Value::Undefined
    }

    /// Create a null value
    pub const fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value
    pub const fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    pub const fn int(i: i64) -> Self {
        Value::Int(i)
    }

    /// Create a float value
    pub const fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value
    pub fn str(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create an object value wrapping an existing handle
    pub fn object(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }

    /// Create a function value from a native closure
    ///
    /// Each call mints a fresh function identity, even for textually
    /// identical closures.
    pub fn native<F>(name: &str, body: F) -> Self
    where
        F: Fn(&mut Engine, Value, &[Value]) -> Result<Value, EngineError> + 'static,
    {
        Value::Function(FunctionRef::new(name, body))
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Check if this value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a function
    pub fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Check if this value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer payload, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float payload, if any
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the string payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the object handle, if any
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get the function handle, if any
    pub fn as_function(&self) -> Option<&FunctionRef> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Human-readable type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.id() == b.id(),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(i) => write!(f, "Int({i})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            // Never recurse into the object graph: it may contain cycles
            Value::Object(obj) => write!(f, "Object(#{})", obj.id()),
            Value::Function(func) => write!(f, "Function({}#{})", func.name(), func.id().raw()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Object(obj) => write!(f, "[object #{}]", obj.id()),
            Value::Function(func) => write!(f, "[function {}]", func.name()),
        }
    }
}
