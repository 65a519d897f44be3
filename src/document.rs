//! Composing a [`LayoutIdea`] into a printable, multi-page document.
//!
//! Every document is made of one or two *layout pages* (decided by the [`PageMode`]) followed by
//! a single *appendix page* reproducing the idea's Markdown.  A layout page shows:
//!
//! - the idea's title and the grid's dimensions
//! - a textual list of the sections
//! - a diagram of the sections, scaled onto the lower part of the page with the same
//!   [`GridScaler`] as the on-screen preview (and mirrored for the facing page of a spread)
//!
//! Pages are composed as [`Image`]s (in points, on A4 paper), which are then written out as PDF.

use std::{fs, path::Path};

use itertools::Itertools;
use log::{debug, info};

use crate::{
    image::{pdf, Elem, Image, RenderingOpts, StrokeStyle, Style, TextStyle},
    markdown::markdown_for_idea,
    utils::slug,
    Bounds, Error, GridScaler, LayoutIdea, Orientation, PageMode, Result, V2,
};

/// The size of a portrait A4 page, in points
pub const A4_SIZE: (f32, f32) = (595.28, 841.89);
/// Distance from the left edge of the page to the start of every line of text
const TEXT_LEFT: f32 = 40.0;
/// Baselines of the fixed lines of text at the top of each page
const TITLE_Y: f32 = 50.0;
const CAPTION_Y: f32 = 65.0;
const SECTION_LIST_Y: f32 = 90.0;
const LISTING_Y: f32 = 70.0;
/// The diagram is fitted into the page below this line...
const DIAGRAM_TOP: f32 = 160.0;
/// ...and above this distance from the bottom of the page
const DIAGRAM_BOTTOM: f32 = 20.0;
/// Padding between the diagram's area and the grid itself
const DIAGRAM_PAD: f32 = 60.0;
/// The average width of a character of Helvetica, as a multiple of the font size
const AVG_CHAR_WIDTH: f32 = 0.5;

/// What to put in a document, apart from the idea itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOpts {
    pub width_dots: i32,
    pub height_dots: i32,
    pub orientation: Orientation,
    pub page_mode: PageMode,
}

/// What a [`Page`] of a [`Document`] shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Layout { mirrored: bool },
    MarkdownAppendix,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub kind: PageKind,
    pub image: Image,
}

/// A composed, printable document.  All pages share the same size.
#[derive(Debug, Clone)]
pub struct Document {
    page_size: V2,
    pages: Vec<Page>,
}

impl Document {
    pub fn page_size(&self) -> V2 {
        self.page_size
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Renders this document as the bytes of a PDF file
    pub fn to_pdf(&self, opts: &RenderingOpts) -> Vec<u8> {
        let images = self.pages.iter().map(|p| p.image.clone()).collect_vec();
        pdf::gen_pdf(&images, opts)
    }
}

/// The A4 page size (in points) for a given [`Orientation`]
pub fn page_size(orientation: Orientation) -> V2 {
    let (w, h) = A4_SIZE;
    match orientation {
        Orientation::Portrait => V2::new(w, h),
        Orientation::Landscape => V2::new(h, w),
    }
}

/// Lays `idea` out over the pages required by `doc_opts.page_mode`, followed by the Markdown
/// appendix
pub fn compose_document(
    idea: &LayoutIdea,
    doc_opts: &DocumentOpts,
    opts: &RenderingOpts,
) -> Document {
    let page_size = page_size(doc_opts.orientation);
    let mut pages = doc_opts
        .page_mode
        .layout_pages()
        .iter()
        .map(|&mirrored| Page {
            kind: PageKind::Layout { mirrored },
            image: layout_page(idea, doc_opts, page_size, mirrored, opts),
        })
        .collect_vec();
    pages.push(Page {
        kind: PageKind::MarkdownAppendix,
        image: appendix_page(idea, doc_opts, page_size, opts),
    });

    debug!(
        "Composed {} page(s) for '{}' in {} mode",
        pages.len(),
        idea.title,
        doc_opts.page_mode
    );
    Document { page_size, pages }
}

/// The scaler which places the diagram of a layout page
pub fn diagram_scaler(width_dots: i32, height_dots: i32, page_size: V2) -> GridScaler {
    GridScaler::with_origin(
        width_dots,
        height_dots,
        V2::new(0.0, DIAGRAM_TOP),
        V2::new(page_size.x, page_size.y - DIAGRAM_TOP - DIAGRAM_BOTTOM),
        DIAGRAM_PAD,
    )
}

/// The one line summarising a section in a layout page's section list
fn section_line(label: &str, b: Bounds) -> String {
    format!("• {}: x={}, y={}, w={}, h={}", label, b.x, b.y, b.w, b.h)
}

fn layout_page(
    idea: &LayoutIdea,
    doc_opts: &DocumentOpts,
    page_size: V2,
    mirrored: bool,
    opts: &RenderingOpts,
) -> Image {
    let (w, h) = (doc_opts.width_dots, doc_opts.height_dots);
    let text_width = page_size.x - TEXT_LEFT * 2.0;
    let mut image = Image::empty(page_size);

    /* TEXT */
    add_line(&mut image, &idea.title, TITLE_Y, TextStyle::Title);
    add_line(
        &mut image,
        &format!("Dimensions: {} x {} dots", w, h),
        CAPTION_Y,
        TextStyle::Caption,
    );
    let section_list = if idea.has_sections() {
        idea.sections
            .iter()
            .map(|s| section_line(&s.label, s.bounds))
            .join("\n")
    } else {
        "Free-form grid".to_owned()
    };
    add_wrapped(
        &mut image,
        &section_list,
        V2::new(TEXT_LEFT, SECTION_LIST_Y),
        text_width,
        TextStyle::Body,
        opts,
    );

    /* DIAGRAM */
    let scaler = diagram_scaler(w, h, page_size);
    for section in &idea.sections {
        let rect = scaler.section_rect(section.bounds, mirrored);
        image.add(Elem::Rect(
            rect,
            Style::JustStroke(StrokeStyle::DiagramSection),
        ));
        let label_offset = opts.diagram_label_offset();
        add_wrapped(
            &mut image,
            &section.label,
            rect.min() + label_offset,
            rect.width() - label_offset.x * 2.0,
            TextStyle::DiagramLabel,
            opts,
        );
    }
    image.add(Elem::Rect(
        scaler.grid_rect(),
        Style::JustStroke(StrokeStyle::DiagramBorder),
    ));

    image
}

fn appendix_page(
    idea: &LayoutIdea,
    doc_opts: &DocumentOpts,
    page_size: V2,
    opts: &RenderingOpts,
) -> Image {
    let (w, h) = (doc_opts.width_dots, doc_opts.height_dots);
    let mut image = Image::empty(page_size);
    let heading = format!("{} ({}x{} dots) (Markdown)", idea.title, w, h);
    add_line(&mut image, &heading, TITLE_Y, TextStyle::Heading);
    add_wrapped(
        &mut image,
        &markdown_for_idea(idea, w, h),
        V2::new(TEXT_LEFT, LISTING_Y),
        page_size.x - TEXT_LEFT * 2.0,
        TextStyle::Listing,
        opts,
    );
    image
}

/// Adds a single line of text at the left margin
fn add_line(image: &mut Image, text: &str, baseline_y: f32, style: TextStyle) {
    image.add(Elem::Text {
        position: V2::new(TEXT_LEFT, baseline_y),
        text: text.to_owned(),
        style,
    });
}

/// Adds `text`, wrapped to `max_width`, with the first baseline starting at `position`
fn add_wrapped(
    image: &mut Image,
    text: &str,
    position: V2,
    max_width: f32,
    style: TextStyle,
    opts: &RenderingOpts,
) {
    let font_size = opts.font_size(&style);
    let line_spacing = opts.line_spacing(&style);
    for (i, line) in wrap_text(text, max_width, font_size).into_iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        image.add(Elem::Text {
            position: position + V2::new(0.0, line_spacing * i as f32),
            text: line,
            style: style.clone(),
        });
    }
}

/// Splits `text` into lines no wider than `max_width` (estimated for Helvetica at `font_size`).
/// Existing newlines are kept (so blank lines survive as empty strings), words are wrapped
/// greedily and words too long for a line on their own are broken between characters.  Every
/// line holds at least one character, however narrow `max_width` is.
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let char_width = font_size * AVG_CHAR_WIDTH;
    let max_chars = ((max_width / char_width).floor() as usize).max(1);

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;
        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let word_len = word.chars().count();
            // Start a new line if the word doesn't fit after a space
            if line_len > 0 && line_len + 1 + word_len > max_chars {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            // Break up any word which can't fit on a line of its own
            for c in word.chars() {
                if line_len == max_chars {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                line.push(c);
                line_len += 1;
            }
        }
        lines.push(line);
    }
    lines
}

/// The name under which [`export_document`] saves `idea`, e.g.
/// `habit-tracker-30x40-spread-mirrored.pdf`
pub fn document_file_name(idea: &LayoutIdea, doc_opts: &DocumentOpts) -> String {
    format!(
        "{}-{}x{}-{}.pdf",
        slug(&idea.title),
        doc_opts.width_dots,
        doc_opts.height_dots,
        doc_opts.page_mode
    )
}

/// Composes `idea` into a PDF and writes it into `dir`, returning the file name used
pub fn export_document(
    idea: &LayoutIdea,
    doc_opts: &DocumentOpts,
    dir: &Path,
    opts: &RenderingOpts,
) -> Result<String> {
    let document = compose_document(idea, doc_opts, opts);
    let file_name = document_file_name(idea, doc_opts);
    let path = dir.join(&file_name);
    fs::write(&path, document.to_pdf(opts)).map_err(Error::io(&path))?;
    info!(
        "Wrote {}-page PDF to {}",
        document.pages().len(),
        path.display()
    );
    Ok(file_name)
}
