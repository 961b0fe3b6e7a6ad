use std::hash::{Hash, Hasher};

use crate::atomic::{AtomicCell, AtomicChar, AtomicF32, AtomicF64, SwapCell};

/// The closed family of primitive value types that [`Optional`](crate::Optional)
/// and the property containers range over: `bool`, the signed integer widths,
/// the float widths, `char`, and `String` as the reference form.
///
/// Equality through [`Scalar::same`] is value equality with floats compared by
/// bit pattern, so two NaNs with the same payload are the same value and
/// `0.0`/`-0.0` are not. [`Scalar::feed_hash`] is consistent with `same`.
pub trait Scalar: Clone + PartialEq + Send + Sync + 'static {
    /// Cell type used by atomic property storage for this scalar.
    type Atomic: AtomicCell<Self>;

    /// Type name used in diagnostics, e.g. `"i32"`.
    const TYPE_NAME: &'static str;

    /// The zero value. Absent slots hold this and never expose it.
    const ZERO: Self;

    /// Canonical decimal (or textual) form, round-trippable through
    /// [`Scalar::parse_canonical`].
    fn canonical(&self) -> String;

    /// Parse the canonical text form. `None` when the text does not parse.
    fn parse_canonical(text: &str) -> Option<Self>;

    /// Value equality. Floats compare by bit pattern.
    fn same(&self, other: &Self) -> bool { self == other }

    /// Feed this value into a hasher, consistently with [`Scalar::same`].
    fn feed_hash<H: Hasher>(&self, state: &mut H);
}

macro_rules! int_scalar {
    ($($ty:ty => $atomic:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                type Atomic = $atomic;
                const TYPE_NAME: &'static str = stringify!($ty);
                const ZERO: Self = 0;

                fn canonical(&self) -> String { self.to_string() }
                fn parse_canonical(text: &str) -> Option<Self> { text.parse().ok() }
                fn feed_hash<H: Hasher>(&self, state: &mut H) { self.hash(state) }
            }
        )*
    };
}

int_scalar! {
    i8  => std::sync::atomic::AtomicI8,
    i16 => std::sync::atomic::AtomicI16,
    i32 => std::sync::atomic::AtomicI32,
    i64 => std::sync::atomic::AtomicI64,
}

impl Scalar for bool {
    type Atomic = std::sync::atomic::AtomicBool;
    const TYPE_NAME: &'static str = "bool";
    const ZERO: Self = false;

    fn canonical(&self) -> String { self.to_string() }
    fn parse_canonical(text: &str) -> Option<Self> { text.parse().ok() }
    fn feed_hash<H: Hasher>(&self, state: &mut H) { self.hash(state) }
}

impl Scalar for char {
    type Atomic = AtomicChar;
    const TYPE_NAME: &'static str = "char";
    const ZERO: Self = '\0';

    fn canonical(&self) -> String { self.to_string() }
    fn parse_canonical(text: &str) -> Option<Self> { text.parse().ok() }
    fn feed_hash<H: Hasher>(&self, state: &mut H) { self.hash(state) }
}

impl Scalar for f32 {
    type Atomic = AtomicF32;
    const TYPE_NAME: &'static str = "f32";
    const ZERO: Self = 0.0;

    fn canonical(&self) -> String { self.to_string() }
    fn parse_canonical(text: &str) -> Option<Self> { text.parse().ok() }
    fn same(&self, other: &Self) -> bool { self.to_bits() == other.to_bits() }
    fn feed_hash<H: Hasher>(&self, state: &mut H) { state.write_u32(self.to_bits()) }
}

impl Scalar for f64 {
    type Atomic = AtomicF64;
    const TYPE_NAME: &'static str = "f64";
    const ZERO: Self = 0.0;

    fn canonical(&self) -> String { self.to_string() }
    fn parse_canonical(text: &str) -> Option<Self> { text.parse().ok() }
    fn same(&self, other: &Self) -> bool { self.to_bits() == other.to_bits() }
    fn feed_hash<H: Hasher>(&self, state: &mut H) { state.write_u64(self.to_bits()) }
}

impl Scalar for String {
    type Atomic = SwapCell<String>;
    const TYPE_NAME: &'static str = "String";
    const ZERO: Self = String::new();

    fn canonical(&self) -> String { self.clone() }
    fn parse_canonical(text: &str) -> Option<Self> { Some(text.to_owned()) }
    fn feed_hash<H: Hasher>(&self, state: &mut H) { self.hash(state) }
}
