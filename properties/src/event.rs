use std::fmt;
use std::hash::{Hash, Hasher};

use bedrock_types::Scalar;

use crate::property::Property;

/// Immutable record of one property transition.
///
/// Carries the property the change happened on plus the replaced and the
/// installed value. For the atomic storage variant the pair corresponds to a
/// single atomic transition.
pub struct ChangeEvent<T: Scalar> {
    source: Property<T>,
    previous: T,
    current: T,
}

impl<T: Scalar> ChangeEvent<T> {
    pub fn new(source: Property<T>, previous: T, current: T) -> Self { Self { source, previous, current } }

    /// The property this change happened on.
    pub fn source(&self) -> &Property<T> { &self.source }

    /// The value that was replaced.
    pub fn previous(&self) -> T { self.previous.clone() }

    /// The value that was installed.
    pub fn current(&self) -> T { self.current.clone() }
}

impl<T: Scalar> Clone for ChangeEvent<T> {
    fn clone(&self) -> Self {
        Self { source: self.source.clone(), previous: self.previous.clone(), current: self.current.clone() }
    }
}

impl<T: Scalar> PartialEq for ChangeEvent<T> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.previous.same(&other.previous) && self.current.same(&other.current)
    }
}

impl<T: Scalar> Hash for ChangeEvent<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.previous.feed_hash(state);
        self.current.feed_hash(state);
    }
}

impl<T: Scalar> fmt::Debug for ChangeEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeEvent")
            .field("previous", &self.previous.canonical())
            .field("current", &self.current.canonical())
            .finish()
    }
}

impl<T: Scalar> fmt::Display for ChangeEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChangeEvent{{previous={}, current={}}}", self.previous.canonical(), self.current.canonical())
    }
}
