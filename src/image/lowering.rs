use itertools::Itertools;
use rgb::RGB8;

use crate::V2;

use super::{
    ir::{ConcreteTextStyle, TextStyle},
    ConcreteFillStyle, ConcreteStrokeStyle, Elem, FillStyle, Image, LoweredElem, LoweredImage,
    LoweredStyle, StrokeStyle, Style,
};

/// 'Lower' an [`Image`] to a [`LoweredImage`] - i.e. use values from [`RenderingOpts`] to make
/// concrete versions for every style.  The [`LoweredImage`] can then be unambiguously converted to
/// an image file, and the [`RenderingOpts`] is no longer needed.
pub(super) fn lower(image: &Image, opts: &RenderingOpts) -> LoweredImage {
    LoweredImage {
        size: image.size,
        elements: image
            .elements
            .iter()
            .map(|e| lower_elem(e, opts))
            .collect_vec(),
    }
}

/// 'Lower' a single [`Elem`] to a [`LoweredElem`], by converting all `XStyle`s to
/// `ConcreteXStyle`s.  The geometry is left untouched.
fn lower_elem(elem: &Elem, opts: &RenderingOpts) -> LoweredElem {
    match elem {
        Elem::Rect(rect, style) => LoweredElem::Rect(*rect, lower_style(style, opts)),
        Elem::Circle {
            centre,
            radius,
            style,
        } => LoweredElem::Circle {
            centre: *centre,
            radius: *radius,
            style: lower_style(style, opts),
        },
        Elem::LineSegment(pt1, pt2, stroke_style) => {
            LoweredElem::LineSegment(*pt1, *pt2, lower_stroke_style(stroke_style, opts))
        }
        Elem::Text {
            position,
            text,
            style,
        } => LoweredElem::Text {
            position: *position,
            text: text.to_owned(),
            style: lower_text_style(style, opts),
        },
    }
}

fn lower_style(style: &Style, opts: &RenderingOpts) -> LoweredStyle {
    match style {
        Style::JustFill(f) => LoweredStyle::JustFill(lower_fill_style(f, opts)),
        Style::JustStroke(s) => LoweredStyle::JustStroke(lower_stroke_style(s, opts)),
        Style::FillAndStroke(f, s) => {
            LoweredStyle::FillAndStroke(lower_fill_style(f, opts), lower_stroke_style(s, opts))
        }
    }
}

/// Lowers a [`FillStyle`] (like [`FillStyle::Dot`]) to a [`ConcreteFillStyle`] who's values are
/// populated from `opts`.
fn lower_fill_style(style: &FillStyle, opts: &RenderingOpts) -> ConcreteFillStyle {
    let (fill_color, opacity) = match style {
        FillStyle::Background => (opts.background_color, 1.0),
        FillStyle::Dot => (opts.dot_color, 1.0),
        FillStyle::Section => (opts.overlay_color, opts.overlay_fill_opacity),
    };
    ConcreteFillStyle {
        fill_color,
        opacity,
    }
}

/// Lowers a [`StrokeStyle`] to a [`ConcreteStrokeStyle`] who's values are populated from `opts`.
fn lower_stroke_style(style: &StrokeStyle, opts: &RenderingOpts) -> ConcreteStrokeStyle {
    let (line_width, stroke_color, opacity) = match style {
        StrokeStyle::Guide => (opts.guide_width, opts.guide_color, 1.0),
        StrokeStyle::GridBorder => (opts.grid_border_width, opts.grid_border_color, 1.0),
        StrokeStyle::Section => (
            opts.overlay_stroke_width,
            opts.overlay_color,
            opts.overlay_opacity,
        ),
        StrokeStyle::DiagramSection => (opts.diagram_line_width, opts.ink_color, 1.0),
        StrokeStyle::DiagramBorder => (opts.diagram_line_width, opts.diagram_border_color, 1.0),
    };
    ConcreteStrokeStyle {
        line_width,
        stroke_color,
        opacity,
    }
}

/// Lowers a [`TextStyle`] to a [`ConcreteTextStyle`].  Every style shares one font family per
/// medium (screen or print).
fn lower_text_style(style: &TextStyle, opts: &RenderingOpts) -> ConcreteTextStyle {
    let (fill_color, opacity, font_size, font_family) = match style {
        TextStyle::SectionLabel => (
            opts.overlay_color,
            opts.overlay_opacity,
            opts.label_font_size,
            &opts.screen_font_family,
        ),
        TextStyle::DiagramLabel => (
            opts.ink_color,
            1.0,
            opts.diagram_label_font_size,
            &opts.print_font_family,
        ),
        TextStyle::Title => (opts.ink_color, 1.0, 16.0, &opts.print_font_family),
        TextStyle::Heading => (opts.ink_color, 1.0, 14.0, &opts.print_font_family),
        TextStyle::Caption => (opts.ink_color, 1.0, 10.0, &opts.print_font_family),
        TextStyle::Body => (opts.ink_color, 1.0, 11.0, &opts.print_font_family),
        TextStyle::Listing => (opts.ink_color, 1.0, 9.0, &opts.print_font_family),
    };
    ConcreteTextStyle {
        fill_style: ConcreteFillStyle {
            fill_color,
            opacity,
        },
        font_size,
        font_family: font_family.to_owned(),
    }
}

/// Configuration for how grids, overlays and printed pages should be drawn.  Screen sizes are in
/// pixels, print sizes in points.
#[derive(Debug, Clone)]
pub struct RenderingOpts {
    /* SCREEN PREVIEW */
    /// The colour of the paper behind the dots
    background_color: RGB8,
    dot_color: RGB8,
    dot_radius: f32,
    guide_color: RGB8,
    guide_width: f32,
    grid_border_color: RGB8,
    grid_border_width: f32,

    /// The colour of the outline, tint and label of every highlighted section
    overlay_color: RGB8,
    overlay_stroke_width: f32,
    /// Opacity of the section outlines and labels
    overlay_opacity: f32,
    /// Opacity of the tint filling each section
    overlay_fill_opacity: f32,
    label_font_size: f32,
    /// Where a section's label baseline starts, relative to the section's top-left corner
    label_offset: V2,
    screen_font_family: String,

    /* PRINTED DOCUMENT */
    ink_color: RGB8,
    diagram_line_width: f32,
    diagram_border_color: RGB8,
    diagram_label_font_size: f32,
    diagram_label_offset: V2,
    /// The font used for printing.  The PDF back end always embeds its built-in Helvetica, so
    /// this only affects SVG renderings of printed pages.
    print_font_family: String,
    /// The distance between baselines, as a multiple of the font size
    line_height: f32,
}

impl RenderingOpts {
    pub fn dot_radius(&self) -> f32 {
        self.dot_radius
    }

    pub fn label_offset(&self) -> V2 {
        self.label_offset
    }

    pub fn diagram_label_offset(&self) -> V2 {
        self.diagram_label_offset
    }

    /// The font size that a given [`TextStyle`] will be lowered to
    pub fn font_size(&self, style: &TextStyle) -> f32 {
        lower_text_style(style, self).font_size
    }

    /// The distance between consecutive baselines of text in a given [`TextStyle`]
    pub fn line_spacing(&self, style: &TextStyle) -> f32 {
        self.font_size(style) * self.line_height
    }
}

impl Default for RenderingOpts {
    fn default() -> Self {
        Self {
            background_color: RGB8::new(0xff, 0xff, 0xff),
            dot_color: RGB8::new(0x5a, 0x6a, 0x7a),
            dot_radius: 1.25,
            guide_color: RGB8::new(0xd2, 0xd8, 0xe2),
            guide_width: 1.0,
            grid_border_color: RGB8::new(0x8d, 0x99, 0xa8),
            grid_border_width: 2.0,

            overlay_color: RGB8::new(0xff, 0x6a, 0x3d),
            overlay_stroke_width: 2.0,
            overlay_opacity: 0.9,
            overlay_fill_opacity: 0.18,
            label_font_size: 12.0,
            label_offset: V2::new(4.0, 14.0),
            screen_font_family: "system-ui, sans-serif".to_owned(),

            ink_color: RGB8::new(0, 0, 0),
            diagram_line_width: 0.6,
            diagram_border_color: RGB8::new(120, 120, 120),
            diagram_label_font_size: 8.0,
            diagram_label_offset: V2::new(2.0, 10.0),
            print_font_family: "Helvetica, Arial, sans-serif".to_owned(),
            line_height: 1.15,
        }
    }
}
