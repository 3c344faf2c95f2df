//! Accessor installation
//!
//! Installation rewires every plain member of a target into a guarded slot
//! carrying the member's classification and a handle to the target's trust
//! set. It runs strictly after trust collection, mutates the target in
//! place, and adds no members of its own.

use std::rc::Rc;

use crate::protect::classify::Visibility;
use crate::protect::slot::GuardedSlot;
use crate::protect::trust::TrustSet;
use crate::vm::object::{ObjectRef, Property};
use crate::vm::value::Value;

/// Replace each plain member with a guarded slot
///
/// Re-shielding is incremental: an already-guarded slot keeps its storage
/// and classification and only has its trust handle swapped for the freshly
/// collected one, while members added since the previous pass are rewired
/// like any first-time member.
pub(crate) fn install(target: &ObjectRef, trust: Rc<TrustSet>) {
    let mut inner = target.inner_mut();
    for (name, prop) in inner.slots_mut() {
        match prop {
            Property::Data(value) => {
                let visibility = Visibility::of(name.as_ref());
                let value = std::mem::replace(value, Value::Undefined);
                *prop = Property::Guarded(GuardedSlot::new(value, visibility, Rc::clone(&trust)));
            }
            Property::Guarded(slot) => slot.set_trust(Rc::clone(&trust)),
        }
    }
}
