/*!
Observable scalar property cells.

A [`Property`] holds one [`Scalar`](bedrock_types::Scalar) value and carries
a change-notification channel. Four storage variants share the same
contract:

- [`Property::new`] — an in-memory cell,
- [`Property::atomic`] — an in-memory cell safe for arbitrary concurrent
  reads and writes, where each write's change event carries the exact value
  it replaced,
- [`Property::computed`] / [`Property::computed_writable`] — the value lives
  behind caller-supplied accessors,
- [`Property::keyed`] — the value persists as canonical decimal text in an
  external string-to-string store.

Writes that do not change the value never notify. The computed and keyed
variants never notify at all, since the property cannot observe changes made
behind its back.

```
use bedrock_properties::Property;

let count = Property::new(0i32);
let sub = count.on_change().connect(|event: &bedrock_properties::ChangeEvent<i32>| {
    println!("{} -> {}", event.previous(), event.current());
});
count.set(3).unwrap();
assert_eq!(count.get().unwrap(), 3);
sub.disconnect();
```
*/

mod error;
mod event;
mod property;
mod store;

pub use error::PropertyError;
pub use event::ChangeEvent;
pub use property::Property;
pub use store::{KeyValueStore, MemoryStore};
