//! Mapping the abstract dot grid into a device coordinate space (canvas pixels or PDF points).
//!
//! The grid is scaled uniformly (so it never distorts) to the largest size which fits inside the
//! destination minus its padding, then centred.  For a destination of size `dest` with padding
//! `pad`:
//!
//! ```text
//! spacing = min((dest.x - 2*pad) / width_dots, (dest.y - 2*pad) / height_dots)
//! offset  = (dest - grid_size * spacing) / 2
//! ```

use crate::{utils::Rect2, Bounds, V2};

/// Reflects a span `[x, x + w)` across the spine of a grid which is `width_dots` wide.  Applying
/// this twice gives back the original `x`.
pub fn mirror_x(x: i32, w: i32, width_dots: i32) -> i32 {
    width_dots - x - w
}

/// Maps dot-grid coordinates into a destination rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridScaler {
    width_dots: i32,
    height_dots: i32,
    /// The distance between two adjacent dots, in destination units
    spacing: f32,
    /// Where dot `(0, 0)` ends up
    offset: V2,
}

impl GridScaler {
    /// Creates a scaler which fits the grid into a `dest_size` area whose top-left corner is at
    /// the origin
    pub fn new(width_dots: i32, height_dots: i32, dest_size: V2, pad: f32) -> Self {
        Self::with_origin(width_dots, height_dots, V2::new(0.0, 0.0), dest_size, pad)
    }

    /// Creates a scaler which fits the grid into a `dest_size` area whose top-left corner is at
    /// `origin`
    pub fn with_origin(
        width_dots: i32,
        height_dots: i32,
        origin: V2,
        dest_size: V2,
        pad: f32,
    ) -> Self {
        let grid_size = V2::new(width_dots as f32, height_dots as f32);
        let spacing = f32::min(
            (dest_size.x - pad * 2.0) / grid_size.x,
            (dest_size.y - pad * 2.0) / grid_size.y,
        );
        // Centre the scaled grid in the destination
        let offset = origin + (dest_size - grid_size * spacing) / 2.0;
        Self {
            width_dots,
            height_dots,
            spacing,
            offset,
        }
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn offset(&self) -> V2 {
        self.offset
    }

    /// Maps a (possibly fractional) dot coordinate into the destination
    pub fn point(&self, x: f32, y: f32) -> V2 {
        self.offset + V2::new(x, y) * self.spacing
    }

    /// Maps some dot-grid [`Bounds`] into the destination
    pub fn rect(&self, bounds: Bounds) -> Rect2 {
        Rect2::from_min_size(
            self.point(bounds.x as f32, bounds.y as f32),
            V2::new(bounds.w as f32, bounds.h as f32) * self.spacing,
        )
    }

    /// Maps [`Bounds`] as they appear on the mirrored (facing) page of a spread
    pub fn rect_mirrored(&self, bounds: Bounds) -> Rect2 {
        self.rect(bounds.mirrored(self.width_dots))
    }

    /// Maps [`Bounds`], mirroring them first if `mirror` is set
    pub fn section_rect(&self, bounds: Bounds, mirror: bool) -> Rect2 {
        if mirror {
            self.rect_mirrored(bounds)
        } else {
            self.rect(bounds)
        }
    }

    /// The rectangle covered by the whole grid
    pub fn grid_rect(&self) -> Rect2 {
        self.rect(Bounds::new(0, 0, self.width_dots, self.height_dots))
    }
}
