/*!
An ordered multi-subscriber notification channel.

# Design

- One event type per channel; `emit` delivers a borrowed event to every
  subscriber in registration order.
- Handlers may be infallible closures or return `Result`; the first handler
  error aborts the emission and surfaces to the emitter unchanged.
- `connect` returns a [`SubscriptionHandle`] that disconnects on drop, so a
  handler lives exactly as long as its owner wants it to. Call
  [`SubscriptionHandle::forget`] to leave a handler connected for the
  signal's lifetime.
- Connecting or disconnecting during an emission is allowed and takes effect
  after that emission completes.

# Basic usage

```
use bedrock_signals::Signal;

let signal = Signal::new();
let _guard = signal.connect(|value: &i32| println!("got {value}"));
signal.emit(&42).unwrap();
```
*/

mod handler;
mod signal;
mod subscription;

pub use handler::{Handler, HandlerError, HandlerOutcome, IntoHandler};
pub use signal::Signal;
pub use subscription::{SubscriptionHandle, SubscriptionId};
