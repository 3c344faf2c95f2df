//! Native functions
//!
//! A function is a Rust closure plus a unique identity. Identity is minted at
//! creation and is never derived from the name or the body: two closures with
//! identical text are distinct functions. Every function also owns a shared
//! `prototype` object so it can serve as a constructor.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::vm::engine::Engine;
use crate::vm::object::ObjectRef;
use crate::vm::value::Value;
use crate::vm::EngineError;

/// Global counter for generating unique function IDs
static NEXT_FUNCTION_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of a function, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionId(u64);

impl FunctionId {
    fn next() -> Self {
        Self(NEXT_FUNCTION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric ID
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Signature of a native function body
pub type NativeFn = dyn Fn(&mut Engine, Value, &[Value]) -> Result<Value, EngineError>;

/// A callable function value
struct NativeFunction {
    id: FunctionId,
    name: Rc<str>,
    /// Shared prototype object for instances constructed with this function
    prototype: ObjectRef,
    body: Box<NativeFn>,
}

/// Shared handle to a function
///
/// Cloning the handle preserves identity: all clones share one `FunctionId`.
#[derive(Clone)]
pub struct FunctionRef(Rc<NativeFunction>);

impl FunctionRef {
    /// Create a function from a native closure, minting a fresh identity
    pub fn new<F>(name: &str, body: F) -> Self
    where
        F: Fn(&mut Engine, Value, &[Value]) -> Result<Value, EngineError> + 'static,
    {
        Self(Rc::new(NativeFunction {
            id: FunctionId::next(),
            name: Rc::from(name),
            prototype: ObjectRef::new(),
            body: Box::new(body),
        }))
    }

    /// Function identity
    pub fn id(&self) -> FunctionId {
        self.0.id
    }

    /// Function name (informational only, never used for identity)
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The function's shared prototype object
    pub fn prototype(&self) -> ObjectRef {
        self.0.prototype.clone()
    }

    /// Run the body. Frame bookkeeping is the engine's job, not ours.
    pub(crate) fn invoke(
        &self,
        engine: &mut Engine,
        this: Value,
        args: &[Value],
    ) -> Result<Value, EngineError> {
        (self.0.body)(engine, this, args)
    }
}

impl fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionRef({}#{})", self.name(), self.id().raw())
    }
}
