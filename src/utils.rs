//! Miscellaneous utilities: axis-aligned rectangles and file-name slugs.

use itertools::Itertools;

use crate::V2;

/// An axis-aligned rectangle in some floating-point coordinate space (canvas pixels, PDF points,
/// etc.), with y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    min: V2,
    max: V2,
}

impl Rect2 {
    /// Creates a `Rect2` from its top-left corner and size.  A negative size is kept as-is (the
    /// `max` corner then lies above or to the left of `min`); use [`Rect2::normalized`] to flip
    /// it the right way round.
    pub fn from_min_size(min: V2, size: V2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn min(&self) -> V2 {
        self.min
    }

    pub fn max(&self) -> V2 {
        self.max
    }

    pub fn size(&self) -> V2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// The same rectangle, but with `min` guaranteed to be the top-left corner
    pub fn normalized(&self) -> Self {
        Self {
            min: V2::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            max: V2::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        }
    }

    /// Returns `true` if `other` lies inside `self`, allowing `epsilon` of slack for floating
    /// point error
    pub fn contains_rect(&self, other: &Rect2, epsilon: f32) -> bool {
        let (a, b) = (self.normalized(), other.normalized());
        b.min.x >= a.min.x - epsilon
            && b.min.y >= a.min.y - epsilon
            && b.max.x <= a.max.x + epsilon
            && b.max.y <= a.max.y + epsilon
    }
}

/// Turns a title into something safe to use in a file name: lowercase, with every run of
/// characters other than `a-z`/`0-9` collapsed into one hyphen and no hyphens at either end.
pub fn slug(s: &str) -> String {
    s.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|part| !part.is_empty())
        .join("-")
}
