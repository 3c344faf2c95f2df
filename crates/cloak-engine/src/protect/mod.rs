//! Visibility engine
//!
//! Retrofits access control onto an already-constructed object. Members are
//! split into public and private by name: a leading `_` marks a member
//! private. Shielding a target rewires each member into a guarded slot and
//! records the identities of its member functions as the target's trusted
//! callers. From then on, private members read as `undefined` and ignore
//! writes unless the immediate caller is one of those functions; public
//! members stay fully visible, and public data members stay writable.
//!
//! The three construction styles behave identically: shield a plain object,
//! shield `this` inside a constructor, or shield a constructor function
//! (which shields its `prototype`, covering every instance built from it).
//!
//! Blocked access never raises. The only observable failure is downstream:
//! calling the `undefined` produced by a blocked read fails with
//! [`EngineError::NotCallable`](crate::vm::EngineError::NotCallable).
//!
//! # Example
//!
//! ```rust,ignore
//! use cloak_engine::{protect, Engine, ObjectRef, Value};
//!
//! let mut engine = Engine::new();
//! let obj = ObjectRef::new();
//! obj.define("_secret", Value::int(2006));
//! obj.define("reveal", Value::native("reveal", |engine, this, _| {
//!     let this = this.as_object().cloned().unwrap();
//!     let secret = engine.get(&this, "_secret").as_int().unwrap();
//!     Ok(Value::int(secret + 10))
//! }));
//!
//! protect(&Value::object(obj.clone()));
//!
//! assert_eq!(obj.keys(), vec!["reveal"]);                      // _secret hidden
//! assert_eq!(engine.get(&obj, "_secret"), Value::Undefined);   // blocked read
//! assert_eq!(engine.call_method(&obj, "reveal", &[]).unwrap(), Value::int(2016));
//! ```

pub mod classify;
mod install;
pub(crate) mod slot;
pub mod trust;

use std::rc::Rc;

use crate::vm::object::ObjectRef;
use crate::vm::value::Value;

pub use classify::{classify_members, Visibility, PRIVATE_MARKER};
pub use trust::TrustSet;

/// Shield a target in place and return it for chaining
///
/// - An object is shielded directly.
/// - A function is treated as a constructor: its shared `prototype` object
///   is shielded, so every instance built from it is covered.
/// - Any other value is returned unchanged; shielding never raises.
pub fn protect(target: &Value) -> Value {
    match target {
        Value::Object(obj) => {
            protect_object(obj);
        }
        Value::Function(func) => {
            protect_object(&func.prototype());
        }
        _ => {}
    }
    target.clone()
}

/// Shield an object in place and return the same handle
///
/// Trust collection runs strictly before installation: the trust set is the
/// set of function-valued members present at this moment, and installation
/// then rewires every plain member into a guarded slot sharing that set.
/// Members added afterwards stay plain and unenrolled until a later pass.
pub fn protect_object(target: &ObjectRef) -> ObjectRef {
    let trust = Rc::new(TrustSet::collect(target));
    install::install(target, trust);
    target.clone()
}
