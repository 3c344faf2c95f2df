//! Guarded slots
//!
//! A guarded slot replaces a plain member once its target is shielded. The
//! stored value lives only inside the slot; everything outside reaches it
//! through the get/set rules below, which never raise — blocked reads yield
//! `undefined` and blocked writes leave the stored value unchanged.

use std::rc::Rc;

use crate::protect::classify::Visibility;
use crate::protect::trust::TrustSet;
use crate::vm::function::FunctionId;
use crate::vm::value::Value;

/// Storage cell for one shielded member
pub(crate) struct GuardedSlot {
    value: Value,
    visibility: Visibility,
    trust: Rc<TrustSet>,
}

impl GuardedSlot {
    pub(crate) fn new(value: Value, visibility: Visibility, trust: Rc<TrustSet>) -> Self {
        Self {
            value,
            visibility,
            trust,
        }
    }

    /// Raw stored value, bypassing visibility rules (engine-internal)
    pub(crate) fn raw_value(&self) -> &Value {
        &self.value
    }

    /// Swap in a freshly collected trust set (re-shielding)
    pub(crate) fn set_trust(&mut self, trust: Rc<TrustSet>) {
        self.trust = trust;
    }

    /// Public slots stay enumerable; private slots disappear from enumeration
    pub(crate) fn is_enumerable(&self) -> bool {
        self.visibility.is_public()
    }

    /// Evaluate a read by `caller`
    pub(crate) fn get(&self, caller: Option<FunctionId>) -> Value {
        match self.visibility {
            Visibility::Public => self.value.clone(),
            Visibility::Private => {
                if self.trust.is_trusted(caller) {
                    self.value.clone()
                } else {
                    Value::Undefined
                }
            }
        }
    }

    /// Evaluate a write by `caller`
    ///
    /// Public slots accept any value unless the currently stored one is a
    /// function, which keeps the enrolled identity intact. Private slots
    /// accept writes from trusted callers only. Rejections are silent.
    pub(crate) fn set(&mut self, caller: Option<FunctionId>, incoming: Value) {
        match self.visibility {
            Visibility::Public => {
                if !self.value.is_function() {
                    self.value = incoming;
                }
            }
            Visibility::Private => {
                if self.trust.is_trusted(caller) {
                    self.value = incoming;
                }
            }
        }
    }
}
