//! An intermediate representation for vector images

use rgb::RGB8;

use crate::{utils::Rect2, V2};

use super::{svg, RenderingOpts};

/// A full [`Image`], composed of many [`Elem`]ents drawn in order over a fixed-size surface.
/// Coordinates are in the units of whatever the image is destined for (canvas pixels or PDF
/// points), with the origin at the top-left and y pointing down.
#[derive(Debug, Clone)]
pub struct Image<F, S, T> {
    pub(super) size: V2,
    pub(super) elements: Vec<Elem<F, S, T>>,
}

impl<F, S, T> Image<F, S, T> {
    /// Creates an empty `Image` (i.e. one which contains no [`Elem`]s) of a given size
    pub fn empty(size: V2) -> Self {
        Self {
            size,
            elements: vec![],
        }
    }

    /// Adds a new [`Elem`] to this `Image`, on top of everything already drawn
    pub fn add(&mut self, elem: Elem<F, S, T>) {
        self.elements.push(elem)
    }

    /// Removes every [`Elem`], keeping the size
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn size(&self) -> V2 {
        self.size
    }

    pub fn elements(&self) -> &[Elem<F, S, T>] {
        self.elements.as_slice()
    }
}

/// Helper methods for easy conversions to various formats
impl Image<FillStyle, StrokeStyle, TextStyle> {
    pub fn svg_string(&self, opts: &RenderingOpts) -> String {
        svg::gen_svg(self, opts).to_string()
    }
}

/// The shape of an [`Elem`]
#[derive(Debug, Clone)]
pub enum Elem<F, S, T> {
    Rect(Rect2, Style<F, S>),
    Circle {
        centre: V2,
        radius: f32,
        style: Style<F, S>,
    },
    LineSegment(V2, V2, S),
    /// Some text, whose baseline starts at `position`
    Text {
        position: V2,
        text: String,
        style: T,
    },
}

impl<S> Elem<ConcreteFillStyle, S, ConcreteTextStyle> {
    /// Gets the fill style of this `Elem`, if it exists.  It may not exist - for example,
    /// [`Elem::LineSegment`]s can't be filled.
    pub fn fill_style(&self) -> Option<&ConcreteFillStyle> {
        match self {
            Elem::LineSegment(_, _, _) => None, // Line segments can't be filled
            Elem::Text { style, .. } => Some(&style.fill_style),
            Elem::Rect(_, style) => style.fill_style(),
            Elem::Circle { style, .. } => style.fill_style(),
        }
    }

    /// Gets the stroke style of this `Elem`, if it exists.
    pub fn stroke_style(&self) -> Option<&S> {
        match self {
            Elem::Text { .. } => None, // Text elements can't be stroked
            Elem::LineSegment(_, _, stroke_style) => Some(stroke_style),
            Elem::Rect(_, style) => style.stroke_style(),
            Elem::Circle { style, .. } => style.stroke_style(),
        }
    }
}

/////////////
// STYLING //
/////////////

/// The full styling of an [`Elem`], which is either filled or stroked or both (but invisible
/// elements are not possible).
#[derive(Debug, Clone)]
pub enum Style<F, S> {
    JustFill(F),
    JustStroke(S),
    FillAndStroke(F, S),
}

impl<F, S> Style<F, S> {
    pub fn fill_style(&self) -> Option<&F> {
        match self {
            Self::JustFill(f) => Some(f),
            Self::JustStroke(_) => None,
            Self::FillAndStroke(f, _) => Some(f),
        }
    }

    pub fn stroke_style(&self) -> Option<&S> {
        match self {
            Self::JustFill(_) => None,
            Self::JustStroke(s) => Some(s),
            Self::FillAndStroke(_, s) => Some(s),
        }
    }
}

/// The visual style of the body of an [`Elem`]
#[derive(Debug, Clone)]
pub enum FillStyle {
    /// The paper behind the grid
    Background,
    /// A single printed dot
    Dot,
    /// The translucent tint over a highlighted section
    Section,
}

/// A fully specified [`FillStyle`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteFillStyle {
    pub fill_color: RGB8,
    /// Between `0.0` (invisible) and `1.0` (opaque)
    pub opacity: f32,
}

/// The visual style of the outline of an [`Elem`]
#[derive(Debug, Clone)]
pub enum StrokeStyle {
    /// The faint lines splitting the grid into thirds
    Guide,
    /// The line around the whole grid
    GridBorder,
    /// The outline of a highlighted section on the preview
    Section,
    /// The outline of a section in a printed diagram
    DiagramSection,
    /// The line around the whole grid in a printed diagram
    DiagramBorder,
}

/// A fully specified [`StrokeStyle`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteStrokeStyle {
    pub line_width: f32,
    pub stroke_color: RGB8,
    pub opacity: f32,
}

/// The visual style of some [`Elem::Text`]
#[derive(Debug, Clone)]
pub enum TextStyle {
    /// The label of a highlighted section on the preview
    SectionLabel,
    /// The label of a section in a printed diagram
    DiagramLabel,
    /// The title at the top of a printed page
    Title,
    /// The title of a page which reproduces a whole document (e.g. the Markdown appendix)
    Heading,
    /// One-line summaries under a title
    Caption,
    /// Running text, e.g. the list of sections
    Body,
    /// Verbatim text, e.g. the Markdown appendix
    Listing,
}

/// A fully specified [`TextStyle`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteTextStyle {
    pub fill_style: ConcreteFillStyle,
    pub font_size: f32,
    pub font_family: String,
}
