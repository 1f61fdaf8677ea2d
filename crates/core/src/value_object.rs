//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. In this
/// workspace they are also *validated*: a value object can only be obtained
/// through a constructor that enforces its invariant, so holding one is proof
/// the value is well-formed.
///
/// ```ignore
/// let a = Sku::parse("P1")?;
/// let b = Sku::parse("P1")?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
