//! Value object trait: equality by value, not identity.
//!
//! Shop items carry no identity of their own. Two items with the same name,
//! sell-in and quality are interchangeable, and a catalog may legitimately hold
//! duplicates.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: values are copied rather than shared
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in assertions and logs
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Item {
///     name: String,
///     sell_in: i32,
///     quality: i32,
/// }
///
/// impl ValueObject for Item {}
///
/// let a = Item { name: "Aged Brie".into(), sell_in: 2, quality: 0 };
/// let b = a.clone();
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
