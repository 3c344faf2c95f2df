//! Execution engine: call stack and property access
//!
//! The engine is the single synchronous call stack of the runtime. Every
//! property access flows through it so that guarded slots can resolve the
//! immediate caller: the function whose frame is on top of the stack at the
//! moment the access executes. Top-level code has no frame and is always
//! untrusted.

use crate::vm::function::{FunctionId, FunctionRef};
use crate::vm::object::{ObjectRef, Property};
use crate::vm::value::Value;
use crate::vm::EngineError;

/// The synchronous execution engine
///
/// Property reads and writes never fail; enforcement is expressed as value
/// substitution (`undefined`) and mutation suppression. The only fallible
/// operations are [`call`](Engine::call) and [`construct`](Engine::construct),
/// which reject non-callable values.
pub struct Engine {
    /// Identities of the functions currently executing, innermost last
    frames: Vec<FunctionId>,
}

impl Engine {
    /// Create an engine with an empty call stack
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Identity of the function currently executing, if any
    ///
    /// This is the immediate caller of any property access performed right
    /// now. `None` means top-level code.
    pub fn current_caller(&self) -> Option<FunctionId> {
        self.frames.last().copied()
    }

    /// Read a property
    ///
    /// Own properties are consulted first, then the prototype chain. Guarded
    /// slots evaluate against the current immediate caller. An absent
    /// property reads as `undefined`, exactly like a blocked one.
    pub fn get(&self, target: &ObjectRef, name: &str) -> Value {
        let caller = self.current_caller();
        let mut current = Some(target.clone());
        while let Some(obj) = current {
            let inner = obj.inner();
            if let Some(prop) = inner.get_own(name) {
                return match prop {
                    Property::Data(value) => value.clone(),
                    Property::Guarded(slot) => slot.get(caller),
                };
            }
            let next = inner.proto();
            drop(inner);
            current = next;
        }
        Value::Undefined
    }

    /// Write a property
    ///
    /// An own entry is written in place (guarded slots apply their own
    /// rules). A guarded slot found on the prototype chain intercepts the
    /// write, so instances sharing a shielded prototype share its storage.
    /// Otherwise a fresh own data entry is created on the receiver.
    pub fn set(&self, target: &ObjectRef, name: &str, value: Value) {
        let caller = self.current_caller();
        if let Some(owner) = Self::resolve_write_owner(target, name) {
            let mut inner = owner.inner_mut();
            if let Some(prop) = inner.get_own_mut(name) {
                match prop {
                    Property::Data(slot) => *slot = value,
                    Property::Guarded(slot) => slot.set(caller, value),
                }
                return;
            }
        }
        target.define(name, value);
    }

    /// Find the object whose property should receive a write to `name`
    ///
    /// Own property (of any kind) wins. An inherited guarded slot claims the
    /// write; an inherited data entry does not (the receiver shadows it).
    fn resolve_write_owner(target: &ObjectRef, name: &str) -> Option<ObjectRef> {
        if target.has_own(name) {
            return Some(target.clone());
        }
        let mut current = target.proto();
        while let Some(obj) = current {
            let inner = obj.inner();
            let found_guard = inner.get_own(name).map(|prop| matches!(prop, Property::Guarded(_)));
            let next = inner.proto();
            drop(inner);
            match found_guard {
                Some(true) => return Some(obj),
                Some(false) => return None,
                None => current = next,
            }
        }
        None
    }

    /// Call a value as a function
    ///
    /// Pushes the callee's identity for the duration of the body, so that
    /// accesses made inside it resolve the callee as their immediate caller.
    /// Calling anything other than a function fails with
    /// [`EngineError::NotCallable`] — this is how invoking the `undefined`
    /// produced by a blocked read surfaces.
    pub fn call(&mut self, callee: &Value, this: Value, args: &[Value]) -> Result<Value, EngineError> {
        let func: FunctionRef = match callee {
            Value::Function(f) => f.clone(),
            other => {
                return Err(EngineError::NotCallable {
                    type_name: other.type_name(),
                })
            }
        };
        self.frames.push(func.id());
        let result = func.invoke(self, this, args);
        self.frames.pop();
        result
    }

    /// Read a member and call it with `this` bound to the receiver
    pub fn call_method(
        &mut self,
        target: &ObjectRef,
        name: &str,
        args: &[Value],
    ) -> Result<Value, EngineError> {
        let callee = self.get(target, name);
        self.call(&callee, Value::Object(target.clone()), args)
    }

    /// Construct an instance
    ///
    /// Allocates an object whose prototype is the constructor's shared
    /// `prototype`, then runs the constructor body with `this` bound to it.
    pub fn construct(&mut self, ctor: &Value, args: &[Value]) -> Result<ObjectRef, EngineError> {
        let func: FunctionRef = match ctor {
            Value::Function(f) => f.clone(),
            other => {
                return Err(EngineError::NotConstructible {
                    type_name: other.type_name(),
                })
            }
        };
        let instance = ObjectRef::with_proto(func.prototype());
        self.frames.push(func.id());
        let result = func.invoke(self, Value::Object(instance.clone()), args);
        self.frames.pop();
        result?;
        Ok(instance)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
