use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Axis-aligned integer rectangle.
///
/// A rectangle is *empty* when either extent is non-positive and *identity*
/// when all four fields are zero. Point containment is half-open: the left
/// and top edges are inside, the right and bottom edges are not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self { Self { x, y, width, height } }

    /// Sets all four fields.
    pub fn set(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub fn position(&self) -> (i32, i32) { (self.x, self.y) }

    pub fn size(&self) -> (i32, i32) { (self.width, self.height) }

    pub fn copy_from(&mut self, other: &Rect) { *self = *other; }

    pub fn left(&self) -> i32 { self.x }

    pub fn top(&self) -> i32 { self.y }

    pub fn right(&self) -> i32 { self.x + self.width }

    pub fn bottom(&self) -> i32 { self.y + self.height }

    /// True iff `x <= px < x + width` and `y <= py < y + height`.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Float-point containment with the same half-open rule.
    pub fn contains_f(&self, px: f32, py: f32) -> bool {
        px >= self.x as f32 && px < (self.x + self.width) as f32 && py >= self.y as f32 && py < (self.y + self.height) as f32
    }

    /// Rectangle containment. The far edges are strict: a rectangle flush
    /// with the right or bottom edge is not contained. Callers relying on
    /// edge-flush containment must widen by one first.
    pub fn contains_rect(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        x >= self.x && x + width < self.x + self.width && y >= self.y && y + height < self.y + self.height
    }

    /// True iff both rectangles are non-empty and overlap.
    pub fn intersects(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        if self.is_empty() || width <= 0 || height <= 0 {
            return false;
        }
        x + width > self.x && y + height > self.y && x < self.x + self.width && y < self.y + self.height
    }

    pub fn is_empty(&self) -> bool { self.width <= 0 || self.height <= 0 }

    pub fn is_identity(&self) -> bool { self.x == 0 && self.y == 0 && self.width == 0 && self.height == 0 }

    pub fn reset(&mut self) { *self = Rect::default(); }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect{{x={}, y={}, width={}, height={}}}", self.x, self.y, self.width, self.height)
    }
}

/// Axis-aligned float rectangle.
///
/// Equality and hashing compare field bit patterns, so the type is `Eq` and
/// usable as a map key; NaN fields equal themselves and `0.0 != -0.0`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self { Self { x, y, width, height } }

    /// Sets all four fields.
    pub fn set(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn position(&self) -> (f32, f32) { (self.x, self.y) }

    pub fn size(&self) -> (f32, f32) { (self.width, self.height) }

    pub fn copy_from(&mut self, other: &RectF) { *self = *other; }

    pub fn left(&self) -> f32 { self.x }

    pub fn top(&self) -> f32 { self.y }

    pub fn right(&self) -> f32 { self.x + self.width }

    pub fn bottom(&self) -> f32 { self.y + self.height }

    /// The smallest integer rectangle covering this one: position floors,
    /// far edges ceil.
    pub fn bounds(&self) -> Rect {
        let left = self.x.floor();
        let top = self.y.floor();
        let right = (self.x + self.width).ceil();
        let bottom = (self.y + self.height).ceil();
        Rect::new(left as i32, top as i32, (right - left) as i32, (bottom - top) as i32)
    }

    /// True iff `x <= px < x + width` and `y <= py < y + height`.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Rectangle containment with strict far edges, matching
    /// [`Rect::contains_rect`].
    pub fn contains_rect(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        x >= self.x && x + width < self.x + self.width && y >= self.y && y + height < self.y + self.height
    }

    /// True iff both rectangles are non-empty and overlap.
    pub fn intersects(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        if self.is_empty() || width <= 0.0 || height <= 0.0 {
            return false;
        }
        x + width > self.x && y + height > self.y && x < self.x + self.width && y < self.y + self.height
    }

    pub fn is_empty(&self) -> bool { self.width <= 0.0 || self.height <= 0.0 }

    pub fn is_identity(&self) -> bool { self.x == 0.0 && self.y == 0.0 && self.width == 0.0 && self.height == 0.0 }

    pub fn reset(&mut self) { *self = RectF::default(); }
}

impl From<Rect> for RectF {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32)
    }
}

impl PartialEq for RectF {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.width.to_bits() == other.width.to_bits()
            && self.height.to_bits() == other.height.to_bits()
    }
}

impl Eq for RectF {}

impl Hash for RectF {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.x.to_bits());
        state.write_u32(self.y.to_bits());
        state.write_u32(self.width.to_bits());
        state.write_u32(self.height.to_bits());
    }
}

impl fmt::Display for RectF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RectF{{x={}, y={}, width={}, height={}}}", self.x, self.y, self.width, self.height)
    }
}
