//! Code to convert a sequence of [`Image`]s into the pages of a PDF document.
//!
//! Every image becomes one page, sized to match.  Text is set in the PDF's built-in Helvetica (so
//! nothing needs embedding), which limits it to the WinAnsi character set.  Opacity is not
//! carried over: printed pages are drawn fully opaque.

use log::debug;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use rgb::RGB8;

use crate::V2;

use super::{
    lowering::lower, ConcreteFillStyle, ConcreteStrokeStyle, Image, LoweredElem, LoweredImage,
    RenderingOpts,
};

/// The resource name under which the page font is registered
const FONT_NAME: Name<'static> = Name(b"F1");
/// The distance from a circle's endpoints to the control points of the four cubic Béziers which
/// approximate it, as a fraction of the radius
const KAPPA: f32 = 0.552_284_8;

/// Generate the bytes of a PDF file, with one page per (unlowered) [`Image`]
pub fn gen_pdf(pages: &[Image], opts: &RenderingOpts) -> Vec<u8> {
    let lowered = pages.iter().map(|p| lower(p, opts)).collect::<Vec<_>>();
    gen_pdf_from_lowered(&lowered)
}

/// Generate the bytes of a PDF file, with one page per [`LoweredImage`]
pub fn gen_pdf_from_lowered(pages: &[LoweredImage]) -> Vec<u8> {
    let mut next_id = 1;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };
    let catalog_id = alloc();
    let page_tree_id = alloc();
    let font_id = alloc();
    let page_ids = pages.iter().map(|_| (alloc(), alloc())).collect::<Vec<_>>();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(pages.len() as i32);
    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (image, (page_id, content_id)) in pages.iter().zip(&page_ids) {
        let size = image.size();
        {
            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, size.x, size.y))
                .parent(page_tree_id)
                .contents(*content_id);
            page.resources().fonts().pair(FONT_NAME, font_id);
        }

        let content = gen_page_content(image);
        pdf.stream(*content_id, &content);
    }

    debug!("Wrote {} page(s) to PDF", pages.len());
    pdf.finish()
}

/// Creates the content stream for a single page
fn gen_page_content(image: &LoweredImage) -> Vec<u8> {
    let page_height = image.size().y;
    // PDF puts the origin in the bottom-left corner, with y pointing up
    let flip = |pt: V2| V2::new(pt.x, page_height - pt.y);

    let mut content = Content::new();
    for elem in image.elements() {
        content.save_state();
        let fill = elem.fill_style();
        let stroke = elem.stroke_style();
        set_fill_attrs(fill, &mut content);
        set_stroke_attrs(stroke, &mut content);

        match elem {
            LoweredElem::Rect(rect, _) => {
                let rect = rect.normalized();
                content.rect(
                    rect.min().x,
                    page_height - rect.max().y,
                    rect.width(),
                    rect.height(),
                );
                paint(fill.is_some(), stroke.is_some(), &mut content);
            }
            LoweredElem::Circle { centre, radius, .. } => {
                add_circle_path(flip(*centre), *radius, &mut content);
                paint(fill.is_some(), stroke.is_some(), &mut content);
            }
            LoweredElem::LineSegment(p1, p2, _) => {
                let (p1, p2) = (flip(*p1), flip(*p2));
                content.move_to(p1.x, p1.y);
                content.line_to(p2.x, p2.y);
                content.stroke();
            }
            LoweredElem::Text {
                position,
                text,
                style,
            } => {
                let baseline = flip(*position);
                let bytes = win_ansi_bytes(text);
                content
                    .begin_text()
                    .set_font(FONT_NAME, style.font_size)
                    .next_line(baseline.x, baseline.y)
                    .show(Str(&bytes))
                    .end_text();
            }
        }
        content.restore_state();
    }
    content.finish()
}

fn paint(fill: bool, stroke: bool, content: &mut Content) {
    match (fill, stroke) {
        (true, true) => content.fill_nonzero_and_stroke(),
        (true, false) => content.fill_nonzero(),
        (false, _) => content.stroke(),
    };
}

/// Appends a closed path approximating a circle
fn add_circle_path(centre: V2, r: f32, content: &mut Content) {
    let k = r * KAPPA;
    let (cx, cy) = (centre.x, centre.y);
    content.move_to(cx + r, cy);
    content.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    content.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    content.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    content.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    content.close_path();
}

fn set_fill_attrs(style: Option<&ConcreteFillStyle>, content: &mut Content) {
    if let Some(s) = style {
        let (r, g, b) = unit_rgb(s.fill_color);
        content.set_fill_rgb(r, g, b);
    }
}

fn set_stroke_attrs(style: Option<&ConcreteStrokeStyle>, content: &mut Content) {
    if let Some(s) = style {
        let (r, g, b) = unit_rgb(s.stroke_color);
        content.set_stroke_rgb(r, g, b);
        content.set_line_width(s.line_width);
    }
}

fn unit_rgb(color: RGB8) -> (f32, f32, f32) {
    let unit = |c: u8| f32::from(c) / 255.0;
    (unit(color.r), unit(color.g), unit(color.b))
}

/// Encodes text for the built-in fonts' WinAnsi encoding.  ASCII passes straight through, a few
/// common typographic characters are mapped and anything else becomes `?`.
fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '…' => 0x85,
            '\u{a0}'..='\u{ff}' => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        image::{Elem, FillStyle, StrokeStyle, Style, TextStyle},
        utils::Rect2,
    };

    fn page() -> Image {
        let mut image = Image::empty(V2::new(600.0, 800.0));
        image.add(Elem::Text {
            position: V2::new(40.0, 50.0),
            text: "Habit Tracker".to_owned(),
            style: TextStyle::Title,
        });
        image.add(Elem::Rect(
            Rect2::from_min_size(V2::new(60.0, 220.0), V2::new(100.0, 50.0)),
            Style::JustStroke(StrokeStyle::DiagramSection),
        ));
        image.add(Elem::Circle {
            centre: V2::new(100.0, 100.0),
            radius: 2.0,
            style: Style::JustFill(FillStyle::Dot),
        });
        image
    }

    #[test]
    fn one_page_per_image() {
        let bytes = gen_pdf(&[page(), page(), page()], &RenderingOpts::default());
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 3"));
        assert!(text.contains("/Helvetica"));
    }

    #[test]
    fn content_flips_y() {
        let opts = RenderingOpts::default();
        let content = gen_page_content(&lower(&page(), &opts));
        let text = String::from_utf8_lossy(&content);
        // Rect from y=220 to y=270 on an 800pt page starts at 530 in PDF space
        assert!(text.contains("60 530 100 50 re"));
        assert!(text.contains("(Habit Tracker) Tj"));
    }

    #[test]
    fn typographic_chars_map_to_win_ansi() {
        assert_eq!(win_ansi_bytes("• a—b"), vec![0x95, b' ', b'a', 0x97, b'b']);
        assert_eq!(win_ansi_bytes("→"), vec![b'?']);
        assert_eq!(win_ansi_bytes("é"), vec![0xe9]);
    }
}
