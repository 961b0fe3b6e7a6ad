use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::scalar::Scalar;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OptionalError {
    #[error("no value present")]
    NoValue,
}

/// A container which may or may not hold a scalar value.
///
/// Unlike `std::option::Option`, the absent form still carries storage (the
/// scalar's zero), which keeps the layout flat and lets the empty form be a
/// `const`. The zero slot of an empty container is never observable through
/// the API.
///
/// ```
/// use bedrock_types::Optional;
///
/// let present = Optional::of(7i32);
/// assert_eq!(present.map(|v| v * 2).unwrap_or(0), 14);
/// assert_eq!(Optional::<i32>::empty().unwrap_or(3), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Optional<T: Scalar> {
    present: bool,
    value: T,
}

impl<T: Scalar + Copy> Copy for Optional<T> {}

impl<T: Scalar> Optional<T> {
    /// The empty container.
    pub const fn empty() -> Self { Self { present: false, value: T::ZERO } }

    /// A container holding `value`.
    pub fn of(value: T) -> Self { Self { present: true, value } }

    pub fn is_present(&self) -> bool { self.present }

    pub fn is_empty(&self) -> bool { !self.present }

    /// The value, or [`OptionalError::NoValue`] when empty.
    pub fn value(&self) -> Result<T, OptionalError> {
        if self.present { Ok(self.value.clone()) } else { Err(OptionalError::NoValue) }
    }

    /// The value, or the error produced by `err` when empty.
    pub fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Result<T, E> {
        if self.present { Ok(self.value) } else { Err(err()) }
    }

    /// The value when present, otherwise `other`.
    pub fn unwrap_or(self, other: T) -> T {
        if self.present { self.value } else { other }
    }

    /// The value when present, otherwise the result of `other`.
    pub fn unwrap_or_else(self, other: impl FnOnce() -> T) -> T {
        if self.present { self.value } else { other() }
    }

    /// Calls `f` with the value when present. Returns self for chaining.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if self.present {
            f(&self.value);
        }
        self
    }

    /// Calls `f` when empty. Returns self for chaining.
    pub fn inspect_empty(self, f: impl FnOnce()) -> Self {
        if !self.present {
            f();
        }
        self
    }

    /// Folds the container: `value_fn` on the value when present, `empty_fn`
    /// otherwise.
    pub fn map_or_else<R>(self, empty_fn: impl FnOnce() -> R, value_fn: impl FnOnce(T) -> R) -> R {
        if self.present { value_fn(self.value) } else { empty_fn() }
    }

    /// Applies an arbitrary operator to the whole container.
    pub fn custom<R>(self, f: impl FnOnce(Self) -> R) -> R { f(self) }

    /// Keeps the value only when `predicate` holds. Empty containers pass
    /// through unchanged.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        if !self.present || predicate(&self.value) { self } else { Self::empty() }
    }

    /// Keeps the value only when `predicate` does not hold.
    pub fn filter_not(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        self.filter(|value| !predicate(value))
    }

    /// Maps the value when present; the target scalar type may differ.
    pub fn map<U: Scalar>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        if self.present { Optional::of(f(self.value)) } else { Optional::empty() }
    }

    /// Self when present, otherwise the container produced by `supplier`.
    pub fn or_else(self, supplier: impl FnOnce() -> Self) -> Self {
        if self.present { self } else { supplier() }
    }
}

impl Optional<bool> {
    pub const EMPTY: Self = Self { present: false, value: false };
    pub const TRUE: Self = Self { present: true, value: true };
    pub const FALSE: Self = Self { present: true, value: false };
}

impl<T: Scalar> Default for Optional<T> {
    fn default() -> Self { Self::empty() }
}

impl<T: Scalar> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::of(value),
            None => Self::empty(),
        }
    }
}

impl<T: Scalar> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        if value.present { Some(value.value) } else { None }
    }
}

impl<T: Scalar> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.present && other.present { self.value.same(&other.value) } else { self.present == other.present }
    }
}

impl<T: Scalar> Eq for Optional<T> {}

impl<T: Scalar> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.present as u8);
        if self.present {
            self.value.feed_hash(state);
        }
    }
}

impl<T: Scalar> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.present { write!(f, "Optional[{}]", self.value.canonical()) } else { f.write_str("Optional.empty") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_never_exposes_its_slot() {
        let empty = Optional::<i64>::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.value(), Err(OptionalError::NoValue));
        assert_eq!(empty.unwrap_or(9), 9);
    }

    #[test]
    fn bool_constants_compare_as_values() {
        assert_eq!(Optional::TRUE, Optional::of(true));
        assert_eq!(Optional::FALSE, Optional::of(false));
        assert_eq!(Optional::EMPTY, Optional::<bool>::empty());
        assert_ne!(Optional::TRUE, Optional::FALSE);
        assert_ne!(Optional::TRUE, Optional::EMPTY);
    }

    #[test]
    fn float_equality_is_bitwise() {
        assert_eq!(Optional::of(f32::NAN), Optional::of(f32::NAN));
        assert_ne!(Optional::of(0.0f32), Optional::of(-0.0f32));
    }
}
