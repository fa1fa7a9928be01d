use crate::attributes::Attributes;
use crate::hatch::Hatching;
use crate::units::{Length, Unit};
use geo_types::Rect;
use svg::node::element::Rectangle;

/// A rectangle ready to be handed to the SVG layer. Geometry attributes are
/// kept separate from the style attributes, which can't override them.
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
    pub attributes: Attributes,
}

impl RectShape {
    pub fn new(x: f64, y: f64, width: f64, height: f64, unit: Unit) -> RectShape {
        RectShape {
            x: unit.of(x),
            y: unit.of(y),
            width: unit.of(width),
            height: unit.of(height),
            attributes: Attributes::new(),
        }
    }

    pub fn from_rect(rect: &Rect<f64>, unit: Unit) -> RectShape {
        RectShape::new(rect.min().x, rect.min().y, rect.width(), rect.height(), unit)
    }

    pub fn with_attributes(mut self, attributes: &Attributes) -> Self {
        self.attributes.merge(attributes);
        self
    }

    pub fn to_svg(&self) -> Rectangle {
        let rect = Rectangle::new()
            .set("x", self.x)
            .set("y", self.y)
            .set("width", self.width)
            .set("height", self.height);
        self.attributes
            .iter()
            .fold(rect, |rect, (key, value)| rect.set(key.as_str(), value))
    }
}

/// What a frame hands over to the document: the shapes in paint order, plus
/// the hatch pattern they reference (if any), which belongs in `<defs>`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDrawing {
    pub shapes: Vec<RectShape>,
    pub pattern: Option<Hatching>,
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_rect_to_svg() {
        let shape = RectShape::from_rect(
            &Rect::new(coord! {x: 10.0, y: 20.0}, coord! {x: 360.0, y: 270.0}),
            Unit::Mm,
        )
        .with_attributes(&Attributes::new().with("fill", "white").with("opacity", 0.5));
        assert_eq!(shape.width, Unit::Mm.of(350.0));
        assert_eq!(
            shape.to_svg().to_string(),
            "<rect fill=\"white\" height=\"250mm\" opacity=\"0.5\" width=\"350mm\" x=\"10mm\" y=\"20mm\"/>"
        );
    }
}
