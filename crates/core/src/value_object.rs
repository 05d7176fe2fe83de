//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are rebuilt rather than mutated. In the
/// freight domain the item dimensions fed to the volume calculator are one:
/// they are reconstructed from the row on every edit.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
