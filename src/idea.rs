//! The records produced by the idea generator and consumed by every renderer.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geometry;

/// A rectangle on the dot grid, measured in dots from the top-left corner (0-based).
///
/// The coordinates are signed: templates use fixed proportions, so very stretched grids can make
/// a template emit zero or negative sizes.  These are kept as-is rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The x-coordinate one past the right edge (`x + w`)
    pub fn right(self) -> i32 {
        self.x + self.w
    }

    /// The y-coordinate one past the bottom edge (`y + h`)
    pub fn bottom(self) -> i32 {
        self.y + self.h
    }

    /// Returns `true` if these bounds have no area (i.e. the width or height is below one dot)
    pub fn is_degenerate(self) -> bool {
        self.w < 1 || self.h < 1
    }

    /// Returns `true` if these bounds lie entirely inside a `width` by `height` grid
    pub fn fits_within(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= width && self.bottom() <= height
    }

    /// These bounds as they would appear on the facing page of a spread, reflected across the
    /// spine of a grid which is `width_dots` wide.
    pub fn mirrored(self, width_dots: i32) -> Self {
        Self {
            x: geometry::mirror_x(self.x, self.w, width_dots),
            ..self
        }
    }
}

/// A labelled rectangular region of a [`LayoutIdea`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Section {
    pub label: String,
    pub bounds: Bounds,
}

impl Section {
    pub fn new(label: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            label: label.into(),
            bounds,
        }
    }
}

/// One page-layout suggestion.  Sections are stored in reading order (top-left to
/// bottom-right).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LayoutIdea {
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
}

impl LayoutIdea {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            sections,
        }
    }

    /// A free-form idea with no sections, for printing a plain dot grid
    pub fn basic_grid() -> Self {
        Self::new("Basic Grid", "Generic grid layout.", vec![])
    }

    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}

/// Which way up the page is held.  This decides the size of the on-screen preview and of the
/// printed page; the dot counts are unaffected.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// How an idea is spread over printed pages
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PageMode {
    /// One layout page
    #[default]
    Single,
    /// Two identical layout pages
    Spread,
    /// Two layout pages, the second reflected across the spine
    SpreadMirrored,
    /// Two layout pages meant for two different ideas.  Both currently show the same idea.
    SpreadDual,
    /// A landscape spread which meets in the middle, so the second page is mirrored
    LandscapeMiddle,
}

impl PageMode {
    /// The kebab-case name used in file names and on the command line
    pub fn name(self) -> &'static str {
        match self {
            PageMode::Single => "single",
            PageMode::Spread => "spread",
            PageMode::SpreadMirrored => "spread-mirrored",
            PageMode::SpreadDual => "spread-dual",
            PageMode::LandscapeMiddle => "landscape-middle",
        }
    }

    /// One entry per layout page, in print order.  Each entry is `true` if that page should be
    /// drawn mirrored.
    pub fn layout_pages(self) -> &'static [bool] {
        match self {
            PageMode::Single => &[false],
            PageMode::Spread | PageMode::SpreadDual => &[false, false],
            PageMode::SpreadMirrored | PageMode::LandscapeMiddle => &[false, true],
        }
    }
}

impl Display for PageMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
