use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use bedrock_signals::Signal;
use bedrock_types::{AtomicCell, Scalar};
use tracing::{trace, warn};

use crate::error::PropertyError;
use crate::event::ChangeEvent;
use crate::store::KeyValueStore;

type GetFn<T> = Box<dyn Fn() -> T + Send + Sync>;
type SetFn<T> = Box<dyn Fn(T) + Send + Sync>;

enum Storage<T: Scalar> {
    Plain(RwLock<T>),
    Atomic(T::Atomic),
    Computed { get: GetFn<T>, set: Option<SetFn<T>> },
    Keyed { store: Arc<dyn KeyValueStore>, key: String },
}

struct Inner<T: Scalar> {
    storage: Storage<T>,
    on_change: Signal<ChangeEvent<T>>,
}

/// An observable holder for one scalar value.
///
/// Cloning yields another handle to the same cell; handles compare equal by
/// current value, not identity. See the crate docs for the storage variants
/// and their notification behavior.
pub struct Property<T: Scalar> {
    inner: Arc<Inner<T>>,
}

impl<T: Scalar> Clone for Property<T> {
    fn clone(&self) -> Self { Self { inner: self.inner.clone() } }
}

impl<T: Scalar> Property<T> {
    fn with_storage(storage: Storage<T>) -> Self {
        Self { inner: Arc::new(Inner { storage, on_change: Signal::new() }) }
    }

    /// An in-memory cell holding `initial`.
    pub fn new(initial: T) -> Self { Self::with_storage(Storage::Plain(RwLock::new(initial))) }

    /// An in-memory cell safe for arbitrary concurrent reads and writes.
    /// Each write's change event carries the exact value the write replaced.
    pub fn atomic(initial: T) -> Self { Self::with_storage(Storage::Atomic(T::Atomic::new(initial))) }

    /// [`Property::atomic`] starting from the scalar's zero.
    pub fn atomic_default() -> Self { Self::atomic(T::ZERO) }

    /// A read-only property whose value lives behind `get`. Never notifies.
    pub fn computed(get: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self::with_storage(Storage::Computed { get: Box::new(get), set: None })
    }

    /// A property whose value lives behind caller-supplied accessors.
    /// Never notifies: changes behind the accessors are invisible to it.
    pub fn computed_writable(
        get: impl Fn() -> T + Send + Sync + 'static,
        set: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self::with_storage(Storage::Computed { get: Box::new(get), set: Some(Box::new(set)) })
    }

    /// A property persisted as canonical decimal text under `key` in an
    /// external store. Never notifies. Reads surface
    /// [`PropertyError::Missing`] when the key is absent and
    /// [`PropertyError::InvalidValue`] when the stored text does not parse.
    pub fn keyed(store: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self::with_storage(Storage::Keyed { store: Arc::new(store), key: key.into() })
    }

    /// The current value.
    pub fn get(&self) -> Result<T, PropertyError> {
        match &self.inner.storage {
            Storage::Plain(cell) => Ok(cell.read().unwrap().clone()),
            Storage::Atomic(cell) => Ok(cell.load()),
            Storage::Computed { get, .. } => Ok(get()),
            Storage::Keyed { store, key } => {
                let text = store.get(key).ok_or(PropertyError::Missing)?;
                match T::parse_canonical(&text) {
                    Some(value) => Ok(value),
                    None => {
                        warn!(key = %key, value = %text, ty = T::TYPE_NAME, "stored property does not parse");
                        Err(PropertyError::InvalidValue { value: text, ty: T::TYPE_NAME })
                    }
                }
            }
        }
    }

    /// Installs `value`.
    ///
    /// For the in-memory variants, a write that does not change the value
    /// (floats compared by bit pattern) does not notify; otherwise all
    /// current subscribers receive one [`ChangeEvent`] on the calling
    /// thread, and the first handler error aborts the fan-out and is
    /// returned as [`PropertyError::Handler`].
    pub fn set(&self, value: T) -> Result<(), PropertyError> {
        match &self.inner.storage {
            Storage::Plain(cell) => {
                let previous = {
                    let mut guard = cell.write().unwrap();
                    std::mem::replace(&mut *guard, value.clone())
                };
                self.notify(previous, value)
            }
            Storage::Atomic(cell) => {
                let previous = cell.swap(value.clone());
                self.notify(previous, value)
            }
            Storage::Computed { set, .. } => match set {
                Some(set) => {
                    set(value);
                    Ok(())
                }
                None => Err(PropertyError::ReadOnly),
            },
            Storage::Keyed { store, key } => {
                store.set(key, value.canonical());
                Ok(())
            }
        }
    }

    /// True iff writes are rejected (a computed property without a setter).
    pub fn is_read_only(&self) -> bool {
        matches!(&self.inner.storage, Storage::Computed { set: None, .. })
    }

    /// The change-notification channel.
    ///
    /// A handler that captures this property keeps it alive for as long as
    /// the handler stays connected; drop the subscription handle on owner
    /// teardown to break the cycle.
    pub fn on_change(&self) -> &Signal<ChangeEvent<T>> { &self.inner.on_change }

    fn notify(&self, previous: T, current: T) -> Result<(), PropertyError> {
        if previous.same(&current) || self.inner.on_change.is_empty() {
            return Ok(());
        }
        trace!(previous = %previous.canonical(), current = %current.canonical(), "property changed");
        self.inner
            .on_change
            .emit(&ChangeEvent::new(self.clone(), previous, current))
            .map_err(PropertyError::Handler)
    }
}

impl<T: Scalar> Default for Property<T> {
    /// An in-memory cell holding the scalar's zero.
    fn default() -> Self { Self::new(T::ZERO) }
}

/// Properties compare by current value (floats by bit pattern), not by
/// identity. A property whose read fails compares unequal to everything,
/// including itself, so no `Eq` impl is provided.
impl<T: Scalar> PartialEq for Property<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.get(), other.get()) {
            (Ok(a), Ok(b)) => a.same(&b),
            _ => false,
        }
    }
}

impl<T: Scalar> Hash for Property<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Ok(value) = self.get() {
            value.feed_hash(state);
        }
    }
}

impl<T: Scalar> fmt::Display for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Ok(value) => f.write_str(&value.canonical()),
            Err(error) => write!(f, "<{error}>"),
        }
    }
}

impl<T: Scalar> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get().map(|v| v.canonical()))
            .field("read_only", &self.is_read_only())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn events<T: Scalar>(property: &Property<T>) -> (Arc<Mutex<Vec<(T, T)>>>, bedrock_signals::SubscriptionHandle<ChangeEvent<T>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sub = {
            let log = log.clone();
            property.on_change().connect(move |event: &ChangeEvent<T>| {
                log.lock().unwrap().push((event.previous(), event.current()));
            })
        };
        (log, sub)
    }

    #[test]
    fn no_op_writes_do_not_notify() {
        let property = Property::new(0i32);
        let (log, _sub) = events(&property);

        property.set(0).unwrap();
        property.set(1).unwrap();
        property.set(1).unwrap();
        property.set(-1).unwrap();

        assert_eq!(*log.lock().unwrap(), [(0, 1), (1, -1)]);
    }

    #[test]
    fn nan_to_nan_is_not_a_change() {
        let property = Property::new(f64::NAN);
        let (log, _sub) = events(&property);

        property.set(f64::NAN).unwrap();
        assert!(log.lock().unwrap().is_empty());

        property.set(0.5).unwrap();
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn handles_share_one_cell() {
        let a = Property::new(1i64);
        let b = a.clone();
        b.set(2).unwrap();
        assert_eq!(a.get().unwrap(), 2);
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Property::new(5i32), Property::atomic(5i32));
        assert_ne!(Property::new(5i32), Property::new(6i32));
    }
}
