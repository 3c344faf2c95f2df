//! Member classification
//!
//! Visibility is decided by the member's name alone: a name beginning with
//! the private marker is PRIVATE, every other name is PUBLIC. Classification
//! is total and deterministic, never consults the value or the way the
//! target was constructed, and is fixed for the lifetime of the target at
//! the moment it is shielded.

use crate::vm::object::ObjectRef;

/// Prefix marking a member name as private
pub const PRIVATE_MARKER: char = '_';

/// Visibility of one member, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Visible and readable everywhere
    Public,
    /// Visible only to the target's own member functions
    Private,
}

impl Visibility {
    /// Classify a member name
    pub fn of(name: &str) -> Self {
        if name.starts_with(PRIVATE_MARKER) {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    /// Check for public visibility
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }

    /// Check for private visibility
    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }
}

/// Classify a target's own members, preserving their insertion order
///
/// Members whose value is `undefined` are classified like any other: a
/// property that exists is a member, whatever it holds.
pub fn classify_members(target: &ObjectRef) -> Vec<(String, Visibility)> {
    target
        .inner()
        .slots()
        .map(|(name, _)| (name.to_string(), Visibility::of(name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::value::Value;

    #[test]
    fn test_marker_decides_visibility() {
        assert_eq!(Visibility::of("_secret"), Visibility::Private);
        assert_eq!(Visibility::of("reveal"), Visibility::Public);
        assert_eq!(Visibility::of("__double"), Visibility::Private);
        assert_eq!(Visibility::of("_"), Visibility::Private);
        assert_eq!(Visibility::of(""), Visibility::Public);
        // Marker only counts at the start of the name
        assert_eq!(Visibility::of("snake_case"), Visibility::Public);
    }

    #[test]
    fn test_classification_preserves_order() {
        let obj = ObjectRef::new();
        obj.define("_a", Value::int(1));
        obj.define("b", Value::int(2));
        obj.define("_c", Value::int(3));
        let classified = classify_members(&obj);
        assert_eq!(
            classified,
            vec![
                ("_a".to_string(), Visibility::Private),
                ("b".to_string(), Visibility::Public),
                ("_c".to_string(), Visibility::Private),
            ]
        );
    }

    #[test]
    fn test_undefined_valued_member_is_classified() {
        let obj = ObjectRef::new();
        obj.define("_ghost", Value::undefined());
        obj.define("ghost", Value::undefined());
        let classified = classify_members(&obj);
        assert_eq!(classified.len(), 2);
        assert_eq!(classified[0].1, Visibility::Private);
        assert_eq!(classified[1].1, Visibility::Public);
    }
}
