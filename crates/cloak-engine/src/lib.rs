//! Cloak Engine
//!
//! A single-threaded dynamic object model with retrofitted member
//! visibility:
//! - **VM**: values, heap objects, native functions, and the synchronous
//!   call stack (`vm` module)
//! - **Visibility engine**: classification, trust sets, and guarded slots
//!   (`protect` module)
//!
//! Members whose names start with `_` become private once a target is
//! shielded with [`protect`]: they vanish from enumeration and read as
//! `undefined` everywhere except inside the target's own member functions.
//! Public members stay visible; public data members stay writable.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloak_engine::{protect, Engine, ObjectRef, Value};
//!
//! let mut engine = Engine::new();
//! let account = ObjectRef::new();
//! account.define("_balance", Value::int(100));
//! account.define("balance", Value::native("balance", |engine, this, _| {
//!     let this = this.as_object().cloned().unwrap();
//!     Ok(engine.get(&this, "_balance"))
//! }));
//!
//! protect(&Value::object(account.clone()));
//!
//! assert_eq!(engine.get(&account, "_balance"), Value::Undefined);
//! assert_eq!(engine.call_method(&account, "balance", &[]).unwrap(), Value::int(100));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// ============================================================================
// Core Modules
// ============================================================================

/// VM module: values, objects, functions, and the execution engine
pub mod vm;

/// Visibility engine: classification, trust sets, and guarded slots
pub mod protect;

pub use protect::{classify_members, protect, protect_object, TrustSet, Visibility, PRIVATE_MARKER};
pub use vm::{Engine, EngineError, FunctionId, FunctionRef, ObjectRef, Value};
