use std::sync::Arc;

/// Error returned by a fallible handler. Caller-supplied failures travel
/// through [`Signal::emit`](crate::Signal::emit) unchanged.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A connected subscriber callback.
///
/// Supports payload handlers (receive a borrow of the event) and
/// notify-only handlers (called without the event).
pub enum Handler<E> {
    /// Receives the event.
    Payload(Arc<dyn Fn(&E) -> Result<(), HandlerError> + Send + Sync>),
    /// Notification only, ignores the event.
    NotifyOnly(Arc<dyn Fn() + Send + Sync>),
}

// Cloning duplicates the callback handles; no bound on the event type.
impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        match self {
            Handler::Payload(f) => Handler::Payload(f.clone()),
            Handler::NotifyOnly(f) => Handler::NotifyOnly(f.clone()),
        }
    }
}

impl<E> Handler<E> {
    pub(crate) fn call(&self, event: &E) -> Result<(), HandlerError> {
        match self {
            Handler::Payload(f) => f(event),
            Handler::NotifyOnly(f) => {
                f();
                Ok(())
            }
        }
    }
}

/// Return types a handler closure may have: `()` for infallible handlers,
/// `Result<(), HandlerError>` for fallible ones.
pub trait HandlerOutcome {
    fn into_result(self) -> Result<(), HandlerError>;
}

impl HandlerOutcome for () {
    fn into_result(self) -> Result<(), HandlerError> { Ok(()) }
}

impl HandlerOutcome for Result<(), HandlerError> {
    fn into_result(self) -> Result<(), HandlerError> { self }
}

/// Conversion into a connected handler. Blanket-implemented for closures of
/// either outcome type, for channel senders, and for [`Handler`] itself.
pub trait IntoHandler<E> {
    fn into_handler(self) -> Handler<E>;
}

impl<E, F, R> IntoHandler<E> for F
where
    F: Fn(&E) -> R + Send + Sync + 'static,
    R: HandlerOutcome,
{
    fn into_handler(self) -> Handler<E> { Handler::Payload(Arc::new(move |event| self(event).into_result())) }
}

impl<E> IntoHandler<E> for Handler<E> {
    fn into_handler(self) -> Handler<E> { self }
}

impl<E> IntoHandler<E> for Arc<dyn Fn() + Send + Sync> {
    fn into_handler(self) -> Handler<E> { Handler::NotifyOnly(self) }
}

/// A channel sender connects as a handler that forwards a clone of each
/// event. A disconnected receiver is not an emission failure; the send
/// result is ignored.
impl<E: Clone + Send + Sync + 'static> IntoHandler<E> for std::sync::mpsc::Sender<E> {
    fn into_handler(self) -> Handler<E> {
        Handler::Payload(Arc::new(move |event: &E| {
            let _ = self.send(event.clone());
            Ok(())
        }))
    }
}
