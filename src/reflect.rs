//! Short type names for diagnostic narration.

use std::any::type_name;

/// Last path segment of `T`'s type name.
///
/// Diagnostic only; the exact text is not part of any contract.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Last path segment of the value's static type name.
pub fn short_name<T: ?Sized>(_value: &T) -> &'static str {
    short_type_name::<T>()
}
