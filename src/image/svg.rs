//! Code to convert an [`Image`] to an SVG string

use simple_xml_builder::XMLElement;

use super::{
    lowering::lower, ConcreteFillStyle, ConcreteStrokeStyle, ConcreteTextStyle, Image, LoweredElem,
    LoweredImage, RenderingOpts,
};

/// Generate an SVG root element for an unlowered [`Image`]
pub fn gen_svg(image: &Image, opts: &RenderingOpts) -> XMLElement {
    gen_svg_from_lowered(&lower(image, opts))
}

/// Generate an SVG root element for a lowered [`Image`] (i.e. one where all styles are stated
/// concretely).  The SVG's user units are the image's units, so nothing is rescaled.
pub fn gen_svg_from_lowered(lowered_image: &LoweredImage) -> XMLElement {
    let size = lowered_image.size();

    let mut root = XMLElement::new("svg");
    root.add_attribute("width", &size.x.to_string());
    root.add_attribute("height", &size.y.to_string());
    root.add_attribute("viewBox", &format!("0 0 {} {}", size.x, size.y));
    root.add_attribute("xmlns", "http://www.w3.org/2000/svg");
    // Translate all `Elem`s to SVG's `XMLElement`s
    for e in lowered_image.elements() {
        root.add_child(gen_svg_elem(e));
    }

    root
}

/// Creates an [`XMLElement`] for a given [`LoweredElem`]
fn gen_svg_elem(elem: &LoweredElem) -> XMLElement {
    // Create an unstyled XML element
    let mut xml_elem = match elem {
        LoweredElem::Rect(rect, _) => {
            // SVG refuses negative sizes, so flip the rect the right way round first
            let rect = rect.normalized();
            let mut elem = XMLElement::new("rect");
            elem.add_attribute("x", &rect.min().x.to_string());
            elem.add_attribute("y", &rect.min().y.to_string());
            elem.add_attribute("width", &rect.width().to_string());
            elem.add_attribute("height", &rect.height().to_string());
            elem
        }
        LoweredElem::Circle { centre, radius, .. } => {
            let mut elem = XMLElement::new("circle");
            elem.add_attribute("cx", &centre.x.to_string());
            elem.add_attribute("cy", &centre.y.to_string());
            elem.add_attribute("r", &radius.to_string());
            elem
        }
        LoweredElem::LineSegment(p1, p2, _) => {
            let mut elem = XMLElement::new("line");
            elem.add_attribute("x1", &p1.x.to_string());
            elem.add_attribute("y1", &p1.y.to_string());
            elem.add_attribute("x2", &p2.x.to_string());
            elem.add_attribute("y2", &p2.y.to_string());
            elem
        }
        LoweredElem::Text {
            position,
            text,
            style: ConcreteTextStyle {
                font_size,
                font_family,
                .. // Fill will be added later
            },
        } => {
            let mut elem = XMLElement::new("text");
            elem.add_attribute("x", &position.x.to_string());
            elem.add_attribute("y", &position.y.to_string());
            elem.add_attribute("font-size", &font_size.to_string());
            elem.add_attribute("font-family", font_family);
            elem.add_text(text);
            elem
        }
    };
    // Add styles
    add_fill_style_attrs(elem.fill_style(), &mut xml_elem);
    add_stroke_style_attrs(elem.stroke_style(), &mut xml_elem);
    xml_elem
}

/// Add SVG attributes to give an [`XMLElement`] a given `FillStyle`
fn add_fill_style_attrs(style: Option<&ConcreteFillStyle>, xml_elem: &mut XMLElement) {
    match style {
        Some(s) => {
            xml_elem.add_attribute("fill", &s.fill_color.to_string());
            if s.opacity < 1.0 {
                xml_elem.add_attribute("fill-opacity", &s.opacity.to_string());
            }
        }
        None => xml_elem.add_attribute("fill", "none"), // We need `fill="none"` to disable the fill
    }
}

/// Add SVG attributes to give an [`XMLElement`] a given `StrokeStyle`
fn add_stroke_style_attrs(style: Option<&ConcreteStrokeStyle>, xml_elem: &mut XMLElement) {
    match style {
        Some(s) => {
            xml_elem.add_attribute("stroke", &s.stroke_color.to_string());
            xml_elem.add_attribute("stroke-width", &s.line_width.to_string());
            if s.opacity < 1.0 {
                xml_elem.add_attribute("stroke-opacity", &s.opacity.to_string());
            }
        }
        None => xml_elem.add_attribute("stroke", "none"), // Put `stroke="none"` if no stroke
    }
}
