use std::sync::Weak;

use crate::signal::Inner;

/// Identifies one subscription within its signal. Ids increase in
/// registration order and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub(crate) usize);

/// Disposer for a connected handler.
///
/// Dropping the handle disconnects the handler. The handle holds only a weak
/// reference to the signal, so it never keeps the signal alive; disconnecting
/// after the signal is gone is a no-op, as is disconnecting twice.
#[must_use = "dropping the handle disconnects the handler"]
pub struct SubscriptionHandle<E> {
    inner: Weak<Inner<E>>,
    id: SubscriptionId,
    keep: bool,
}

impl<E> SubscriptionHandle<E> {
    pub(crate) fn new(inner: Weak<Inner<E>>, id: SubscriptionId) -> Self { Self { inner, id, keep: false } }

    pub fn id(&self) -> SubscriptionId { self.id }

    /// Removes the handler now. Idempotent.
    pub fn disconnect(self) { self.remove(); }

    /// Leaves the handler connected for the signal's lifetime.
    pub fn forget(mut self) { self.keep = true; }

    fn remove(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.handlers.write().unwrap().remove(&self.id);
        }
    }
}

impl<E> Drop for SubscriptionHandle<E> {
    fn drop(&mut self) {
        if !self.keep {
            self.remove();
        }
    }
}
