//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no id of its own; two instances holding the same values
/// are interchangeable. Records with identity implement [`crate::Entity`]
/// instead.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
