//! Heap object model
//!
//! Objects are insertion-ordered own-property tables with an optional
//! prototype link. A property is either a plain data entry (the state every
//! member starts in, and the state new members land in after a target has
//! been shielded) or a guarded slot installed by the visibility engine.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashMap;

use crate::protect::slot::GuardedSlot;
use crate::vm::value::Value;

/// Global counter for generating unique object IDs
static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a new unique object ID
fn generate_object_id() -> u64 {
    NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed)
}

/// One own property of an object
pub(crate) enum Property {
    /// Ordinary data entry: readable, writable, enumerable
    Data(Value),
    /// Entry rewired by the visibility engine
    Guarded(GuardedSlot),
}

impl Property {
    /// Raw stored value, bypassing visibility checks.
    ///
    /// Only the engine itself reads through this; callers go through
    /// [`Engine::get`](crate::vm::Engine::get).
    pub(crate) fn raw_value(&self) -> &Value {
        match self {
            Property::Data(value) => value,
            Property::Guarded(slot) => slot.raw_value(),
        }
    }

    /// Whether this property shows up in enumeration
    pub(crate) fn is_enumerable(&self) -> bool {
        match self {
            Property::Data(_) => true,
            Property::Guarded(slot) => slot.is_enumerable(),
        }
    }
}

/// Object instance (heap-allocated)
pub(crate) struct Object {
    /// Unique object ID (assigned on creation)
    object_id: u64,
    /// Prototype link (None for plain objects)
    proto: Option<ObjectRef>,
    /// Own properties in insertion order
    slots: Vec<(Rc<str>, Property)>,
    /// Name -> slot index
    index: FxHashMap<Rc<str>, usize>,
}

impl Object {
    fn new(proto: Option<ObjectRef>) -> Self {
        Self {
            object_id: generate_object_id(),
            proto,
            slots: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Define or overwrite an own data property
    pub(crate) fn define(&mut self, name: &str, value: Value) {
        if let Some(&i) = self.index.get(name) {
            self.slots[i].1 = Property::Data(value);
        } else {
            let name: Rc<str> = Rc::from(name);
            self.index.insert(name.clone(), self.slots.len());
            self.slots.push((name, Property::Data(value)));
        }
    }

    /// Look up an own property
    pub(crate) fn get_own(&self, name: &str) -> Option<&Property> {
        self.index.get(name).map(|&i| &self.slots[i].1)
    }

    /// Look up an own property for mutation
    pub(crate) fn get_own_mut(&mut self, name: &str) -> Option<&mut Property> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.slots[i].1),
            None => None,
        }
    }

    /// Iterate own properties in insertion order
    pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = (&Rc<str>, &mut Property)> {
        self.slots.iter_mut().map(|(name, prop)| (&*name, prop))
    }

    /// Iterate own properties in insertion order
    pub(crate) fn slots(&self) -> impl Iterator<Item = (&Rc<str>, &Property)> {
        self.slots.iter().map(|(name, prop)| (name, prop))
    }

    /// Own enumerable property names, in insertion order
    pub(crate) fn keys(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter(|(_, prop)| prop.is_enumerable())
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub(crate) fn proto(&self) -> Option<ObjectRef> {
        self.proto.clone()
    }
}

/// Shared handle to a heap object
///
/// Cloning the handle aliases the same object; identity is the handle's
/// `object_id`, not its contents.
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<Object>>);

impl ObjectRef {
    /// Create a new empty object with no prototype
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Object::new(None))))
    }

    /// Create a new empty object with the given prototype
    pub fn with_proto(proto: ObjectRef) -> Self {
        Self(Rc::new(RefCell::new(Object::new(Some(proto)))))
    }

    /// Unique object ID
    pub fn id(&self) -> u64 {
        self.0.borrow().object_id
    }

    /// Reference identity: do both handles alias the same object?
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Define or overwrite an own data property
    ///
    /// This is ordinary definition: the entry is enumerable and carries no
    /// visibility semantics until the object is shielded.
    pub fn define(&self, name: &str, value: Value) {
        self.0.borrow_mut().define(name, value);
    }

    /// Check whether an own property exists, regardless of its value
    ///
    /// Distinguishes "present with value undefined" from "absent".
    pub fn has_own(&self, name: &str) -> bool {
        self.0.borrow().get_own(name).is_some()
    }

    /// Own enumerable property names, in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys()
    }

    /// Prototype link, if any
    pub fn proto(&self) -> Option<ObjectRef> {
        self.0.borrow().proto()
    }

    /// Borrow the underlying object
    pub(crate) fn inner(&self) -> std::cell::Ref<'_, Object> {
        self.0.borrow()
    }

    /// Mutably borrow the underlying object
    pub(crate) fn inner_mut(&self) -> std::cell::RefMut<'_, Object> {
        self.0.borrow_mut()
    }
}

impl Default for ObjectRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Identity only: the property graph may contain cycles
        write!(f, "ObjectRef(#{})", self.id())
    }
}
