//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two people with the same name and age are still different people; the
/// identifier is what tells them apart.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` is the same entity, regardless of its current state.
    fn is_same_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
