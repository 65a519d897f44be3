//! Code to rasterize an [`Image`] into a PNG, by way of its SVG rendering

use log::debug;
use resvg::{
    tiny_skia::{Pixmap, Transform},
    usvg,
};

use crate::{Error, Result};

use super::{Image, RenderingOpts};

/// Renders an [`Image`] to the bytes of a PNG file, one pixel per image unit
pub fn gen_png(image: &Image, opts: &RenderingOpts) -> Result<Vec<u8>> {
    svg_to_png(&image.svg_string(opts))
}

/// Rasterizes an SVG document to the bytes of a PNG file at its natural size
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| Error::Raster(format!("failed to parse generated SVG: {err}")))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| Error::Raster(format!("failed to allocate {width}x{height} surface")))?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
    debug!("Rasterized SVG to {}x{} pixels", width, height);

    pixmap
        .encode_png()
        .map_err(|err| Error::Raster(format!("failed to encode PNG: {err}")))
}
