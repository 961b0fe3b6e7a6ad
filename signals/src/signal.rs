use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::handler::{Handler, HandlerError, IntoHandler};
use crate::subscription::{SubscriptionHandle, SubscriptionId};

/// An ordered multi-subscriber notification channel carrying one event type.
///
/// Cloning the signal clones a handle to the same subscriber list. Emission
/// is synchronous on the calling thread; emissions from different threads
/// have no defined order relative to each other, but within one emission
/// subscribers run in registration order.
pub struct Signal<E> {
    inner: Arc<Inner<E>>,
}

pub(crate) struct Inner<E> {
    // BTreeMap over increasing ids keeps iteration in registration order.
    pub(crate) handlers: RwLock<BTreeMap<SubscriptionId, Handler<E>>>,
    next_id: AtomicUsize,
}

impl<E> Clone for Signal<E> {
    fn clone(&self) -> Self { Self { inner: self.inner.clone() } }
}

impl<E> Default for Signal<E> {
    fn default() -> Self { Self::new() }
}

impl<E> std::fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").field("subscribers", &self.inner.handlers.read().unwrap().len()).finish()
    }
}

impl<E> Signal<E> {
    pub fn new() -> Self {
        Self { inner: Arc::new(Inner { handlers: RwLock::new(BTreeMap::new()), next_id: AtomicUsize::new(0) }) }
    }

    /// Registers a handler and returns its disposer.
    ///
    /// The handler stays connected until the handle is dropped, disconnected,
    /// or forgotten. A handler that captures the signal's owner keeps that
    /// owner alive; dropping the handle releases it, so owners should detach
    /// their subscriptions on teardown.
    ///
    /// A handler connected while an emission is in progress is not called
    /// within that emission.
    pub fn connect<H: IntoHandler<E>>(&self, handler: H) -> SubscriptionHandle<E> {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.handlers.write().unwrap().insert(id, handler.into_handler());
        SubscriptionHandle::new(Arc::downgrade(&self.inner), id)
    }

    /// True iff no subscribers are connected.
    pub fn is_empty(&self) -> bool { self.inner.handlers.read().unwrap().is_empty() }

    /// Delivers `event` to every subscriber in registration order.
    ///
    /// The subscriber list is snapshotted up front: connects and disconnects
    /// performed by handlers (or by other threads) take effect only for
    /// subsequent emissions. The first handler error aborts the emission;
    /// remaining handlers are not called and the error is returned unchanged.
    pub fn emit(&self, event: &E) -> Result<(), HandlerError> {
        // Snapshot without holding the lock across handler calls, so
        // handlers may freely connect and disconnect.
        let snapshot: Vec<Handler<E>> = { self.inner.handlers.read().unwrap().values().cloned().collect() };

        for handler in snapshot {
            if let Err(error) = handler.call(event) {
                tracing::trace!(%error, "emission aborted by handler");
                return Err(error);
            }
        }
        Ok(())
    }
}
