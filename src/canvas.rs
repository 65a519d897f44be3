//! The on-screen preview: a dot grid drawn onto a fixed-size surface, optionally with one
//! [`LayoutIdea`]'s sections highlighted over the top.

use std::{fs, path::Path};

use log::{debug, info};

use crate::{
    image::{raster, Elem, FillStyle, Image, RenderingOpts, StrokeStyle, Style, TextStyle},
    utils::Rect2,
    Error, GridScaler, LayoutIdea, Orientation, Result, V2,
};

/// The empty margin (in pixels) kept around the grid on every side
pub const PADDING: f32 = 30.0;
/// Canvas size, in pixels, when the page is held upright
pub const PORTRAIT_SIZE: (f32, f32) = (600.0, 800.0);
/// Canvas size, in pixels, when the page is held sideways
pub const LANDSCAPE_SIZE: (f32, f32) = (800.0, 550.0);

/// Options for [`draw_grid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOpts {
    /// Draw faint lines splitting the grid into thirds in each direction
    pub guides: bool,
}

impl Default for GridOpts {
    fn default() -> Self {
        Self { guides: true }
    }
}

/// A drawing surface with a fixed pixel size.  Its contents are kept as an [`Image`] so they can
/// be exported in any format.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: Image,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            image: Image::empty(V2::new(width, height)),
        }
    }

    /// Creates a blank canvas sized for the preview of a page held in some [`Orientation`]
    pub fn for_orientation(orientation: Orientation) -> Self {
        let (width, height) = match orientation {
            Orientation::Portrait => PORTRAIT_SIZE,
            Orientation::Landscape => LANDSCAPE_SIZE,
        };
        Self::new(width, height)
    }

    pub fn size(&self) -> V2 {
        self.image.size()
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    /// The scaler which maps a `width_dots` by `height_dots` grid onto this canvas
    pub fn scaler(&self, width_dots: i32, height_dots: i32) -> GridScaler {
        GridScaler::new(width_dots, height_dots, self.size(), PADDING)
    }

    pub fn svg_string(&self, opts: &RenderingOpts) -> String {
        self.image.svg_string(opts)
    }

    /// Writes the canvas to `path` as an SVG file
    pub fn export_svg(&self, path: &Path, opts: &RenderingOpts) -> Result<()> {
        fs::write(path, self.svg_string(opts)).map_err(Error::io(path))?;
        info!("Wrote SVG preview to {}", path.display());
        Ok(())
    }

    /// Rasterizes the canvas and writes it to `path` as a PNG file
    pub fn export_raster(&self, path: &Path, opts: &RenderingOpts) -> Result<()> {
        let png = raster::gen_png(&self.image, opts)?;
        fs::write(path, png).map_err(Error::io(path))?;
        info!("Wrote PNG preview to {}", path.display());
        Ok(())
    }
}

/// Clears `canvas` and draws a `width_dots` by `height_dots` dot grid onto it, scaled uniformly
/// to fit inside the padding and centred.  The canvas ends up with, in drawing order: a background
/// fill, one dot per grid point, the guides (if enabled) and a border round the grid.
pub fn draw_grid(
    canvas: &mut Canvas,
    width_dots: i32,
    height_dots: i32,
    grid_opts: GridOpts,
    opts: &RenderingOpts,
) {
    let size = canvas.size();
    let scaler = canvas.scaler(width_dots, height_dots);
    let image = &mut canvas.image;
    image.clear();

    image.add(Elem::Rect(
        Rect2::from_min_size(V2::new(0.0, 0.0), size),
        Style::JustFill(FillStyle::Background),
    ));

    /* DOTS */
    for y in 0..height_dots {
        for x in 0..width_dots {
            image.add(Elem::Circle {
                centre: scaler.point(x as f32, y as f32),
                radius: opts.dot_radius(),
                style: Style::JustFill(FillStyle::Dot),
            });
        }
    }

    /* GUIDES */
    let grid = scaler.grid_rect();
    if grid_opts.guides {
        for fraction in [1.0 / 3.0, 2.0 / 3.0] {
            let x = grid.min().x + grid.width() * fraction;
            image.add(Elem::LineSegment(
                V2::new(x, grid.min().y),
                V2::new(x, grid.max().y),
                StrokeStyle::Guide,
            ));
        }
        for fraction in [1.0 / 3.0, 2.0 / 3.0] {
            let y = grid.min().y + grid.height() * fraction;
            image.add(Elem::LineSegment(
                V2::new(grid.min().x, y),
                V2::new(grid.max().x, y),
                StrokeStyle::Guide,
            ));
        }
    }

    /* BORDER */
    image.add(Elem::Rect(grid, Style::JustStroke(StrokeStyle::GridBorder)));

    debug!(
        "Drew {}x{} grid with spacing {:.2}px",
        width_dots,
        height_dots,
        scaler.spacing()
    );
}

/// Highlights every section of `idea` on top of whatever `canvas` already shows: a translucent
/// tint, an outline and the section's label just inside its top-left corner.  `width_dots` and
/// `height_dots` must be the same values last passed to [`draw_grid`].
pub fn overlay_idea(
    canvas: &mut Canvas,
    idea: &LayoutIdea,
    width_dots: i32,
    height_dots: i32,
    opts: &RenderingOpts,
) {
    let scaler = canvas.scaler(width_dots, height_dots);
    for section in &idea.sections {
        let rect = scaler.rect(section.bounds);
        canvas.image.add(Elem::Rect(
            rect,
            Style::FillAndStroke(FillStyle::Section, StrokeStyle::Section),
        ));
        canvas.image.add(Elem::Text {
            position: rect.min() + opts.label_offset(),
            text: section.label.clone(),
            style: TextStyle::SectionLabel,
        });
    }
    debug!(
        "Overlaid {} sections of '{}'",
        idea.sections.len(),
        idea.title
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{image::Elem, Bounds, Section};

    fn count(canvas: &Canvas, pred: impl Fn(&Elem) -> bool) -> usize {
        canvas.image().elements().iter().filter(|e| pred(e)).count()
    }

    fn is_dot(e: &Elem) -> bool {
        matches!(e, Elem::Circle { .. })
    }

    fn is_guide(e: &Elem) -> bool {
        matches!(e, Elem::LineSegment(_, _, StrokeStyle::Guide))
    }

    #[test]
    fn canvas_size_follows_orientation() {
        let portrait = Canvas::for_orientation(Orientation::Portrait);
        assert_eq!(portrait.size(), V2::new(600.0, 800.0));
        let landscape = Canvas::for_orientation(Orientation::Landscape);
        assert_eq!(landscape.size(), V2::new(800.0, 550.0));
    }

    #[test]
    fn one_dot_per_grid_point() {
        let opts = RenderingOpts::default();
        let mut canvas = Canvas::for_orientation(Orientation::Portrait);
        draw_grid(&mut canvas, 20, 30, GridOpts::default(), &opts);
        assert_eq!(count(&canvas, is_dot), 600);
        assert_eq!(count(&canvas, is_guide), 4);
        // Background, dots, guides and border
        assert_eq!(canvas.image().elements().len(), 1 + 600 + 4 + 1);
    }

    #[test]
    fn guides_can_be_disabled() {
        let opts = RenderingOpts::default();
        let mut canvas = Canvas::for_orientation(Orientation::Landscape);
        draw_grid(&mut canvas, 5, 5, GridOpts { guides: false }, &opts);
        assert_eq!(count(&canvas, is_guide), 0);
        assert_eq!(count(&canvas, is_dot), 25);
    }

    #[test]
    fn redrawing_clears_the_canvas() {
        let opts = RenderingOpts::default();
        let mut canvas = Canvas::for_orientation(Orientation::Portrait);
        draw_grid(&mut canvas, 20, 30, GridOpts::default(), &opts);
        draw_grid(&mut canvas, 10, 10, GridOpts::default(), &opts);
        assert_eq!(count(&canvas, is_dot), 100);
    }

    #[test]
    fn dots_are_centred() {
        let opts = RenderingOpts::default();
        let mut canvas = Canvas::for_orientation(Orientation::Landscape);
        draw_grid(&mut canvas, 20, 30, GridOpts::default(), &opts);
        // Grid is height-limited: the first dot sits on the top padding
        let first = canvas
            .image()
            .elements()
            .iter()
            .find_map(|e| match e {
                Elem::Circle { centre, .. } => Some(*centre),
                _ => None,
            })
            .unwrap();
        assert!((first.y - PADDING).abs() < 1e-3);
        let spacing = 490.0 / 30.0;
        assert!((first.x - (800.0 - 20.0 * spacing) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn overlay_adds_rect_and_label_per_section() {
        let opts = RenderingOpts::default();
        let idea = LayoutIdea::new(
            "Test",
            "",
            vec![
                Section::new("Top", Bounds::new(0, 0, 10, 5)),
                Section::new("Bottom", Bounds::new(0, 6, 10, 5)),
            ],
        );
        let mut canvas = Canvas::for_orientation(Orientation::Portrait);
        draw_grid(&mut canvas, 20, 30, GridOpts::default(), &opts);
        let before = canvas.image().elements().len();
        overlay_idea(&mut canvas, &idea, 20, 30, &opts);
        assert_eq!(canvas.image().elements().len(), before + 4);

        let scaler = canvas.scaler(20, 30);
        let label_pos = canvas.image().elements().iter().find_map(|e| match e {
            Elem::Text { position, text, .. } if text == "Bottom" => Some(*position),
            _ => None,
        });
        assert_eq!(label_pos, Some(scaler.point(0.0, 6.0) + V2::new(4.0, 14.0)));
    }

    #[test]
    fn free_form_idea_overlays_nothing() {
        let opts = RenderingOpts::default();
        let mut canvas = Canvas::for_orientation(Orientation::Portrait);
        draw_grid(&mut canvas, 20, 30, GridOpts::default(), &opts);
        let before = canvas.image().elements().len();
        overlay_idea(&mut canvas, &LayoutIdea::basic_grid(), 20, 30, &opts);
        assert_eq!(canvas.image().elements().len(), before);
    }

    #[test]
    fn exports_write_files() {
        let opts = RenderingOpts::default();
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = Canvas::for_orientation(Orientation::Landscape);
        draw_grid(&mut canvas, 12, 8, GridOpts::default(), &opts);

        let svg_path = dir.path().join("preview.svg");
        canvas.export_svg(&svg_path, &opts).unwrap();
        let svg = std::fs::read_to_string(&svg_path).unwrap();
        assert_eq!(svg.matches("<circle").count(), 96);

        let png_path = dir.path().join("preview.png");
        canvas.export_raster(&png_path, &opts).unwrap();
        let png = std::fs::read(&png_path).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");
    }

    #[test]
    fn export_to_missing_dir_is_io_error() {
        let opts = RenderingOpts::default();
        let dir = tempfile::tempdir().unwrap();
        let canvas = Canvas::for_orientation(Orientation::Portrait);
        let path = dir.path().join("missing").join("preview.svg");
        assert!(matches!(
            canvas.export_svg(&path, &opts),
            Err(Error::Io { .. })
        ));
    }
}
