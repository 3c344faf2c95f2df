//! Trust sets
//!
//! A trust set records, by identity, every function that was a member of a
//! target at the moment it was shielded — both public and private ones. It
//! is fixed from then on: functions assigned afterwards are never enrolled,
//! and two targets never share a set even when their members look alike.

use rustc_hash::FxHashSet;

use crate::vm::function::FunctionId;
use crate::vm::object::ObjectRef;
use crate::vm::value::Value;

/// The set of function identities trusted by one target
#[derive(Debug, Default)]
pub struct TrustSet {
    members: FxHashSet<FunctionId>,
}

impl TrustSet {
    /// Collect the trust set from a target's raw member values
    ///
    /// Must run before installation rewires the slots; it reads raw stored
    /// values, including those already sitting inside guarded slots.
    pub(crate) fn collect(target: &ObjectRef) -> Self {
        let inner = target.inner();
        let members = inner
            .slots()
            .filter_map(|(_, prop)| match prop.raw_value() {
                Value::Function(f) => Some(f.id()),
                _ => None,
            })
            .collect();
        Self { members }
    }

    /// Membership test by function identity
    pub fn contains(&self, id: FunctionId) -> bool {
        self.members.contains(&id)
    }

    /// Resolve a caller: enrolled functions are trusted, everything else —
    /// including top-level code (`None`) — is not
    pub fn is_trusted(&self, caller: Option<FunctionId>) -> bool {
        caller.is_some_and(|id| self.members.contains(&id))
    }

    /// Number of enrolled functions
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if no functions are enrolled
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
