//! Cloak VM: dynamic object model and synchronous execution engine
//!
//! This module provides the substrate the visibility engine operates on:
//! - Dynamically-typed values (`value` module)
//! - Heap objects with insertion-ordered properties and prototype links
//!   (`object` module)
//! - Native functions with reference identity (`function` module)
//! - The synchronous call stack and property access paths (`engine` module)

pub mod engine;
pub mod function;
pub mod object;
pub mod value;

pub use engine::Engine;
pub use function::{FunctionId, FunctionRef, NativeFn};
pub use object::ObjectRef;
pub use value::Value;

/// Engine execution errors
///
/// Property reads and writes never fail; these are the only runtime faults
/// the engine produces.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Attempted to call a value that is not a function
    #[error("Type error: {type_name} is not callable")]
    NotCallable {
        /// Type of the value that was called
        type_name: &'static str,
    },

    /// Attempted to construct with a value that is not a function
    #[error("Type error: {type_name} is not a constructor")]
    NotConstructible {
        /// Type of the value used as a constructor
        type_name: &'static str,
    },
}
