/*!
Value types for Bedrock.

The pieces here are independent of each other and of the rest of the
workspace:

- [`Scalar`] — the closed family of primitive value types the property and
  optional containers range over, with canonical text forms and
  bit-pattern-aware equality.
- [`Optional`] — a presence-or-absence container for a scalar.
- [`Rect`] / [`RectF`] — mutable axis-aligned rectangle value types.
- [`Bundle`] / [`Value`] — a string-keyed map of dynamically typed values,
  used as the named-field encoding for savable types.
- [`Portable`] — fixed-order big-endian binary encoding.
- [`ConcurrentSet`] — a thread-safe hash-backed set.
*/

mod atomic;
mod bundle;
mod concurrent;
mod optional;
mod portable;
mod rect;
mod scalar;

pub use atomic::{AtomicCell, AtomicChar, AtomicF32, AtomicF64, SwapCell};
pub use bundle::{Bundle, Savable, Value};
pub use concurrent::ConcurrentSet;
pub use optional::{Optional, OptionalError};
pub use portable::{CodecError, Portable};
pub use rect::{Rect, RectF};
pub use scalar::Scalar;
