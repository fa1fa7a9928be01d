use crate::units::Unit;
use svg::node::element::{Line, Pattern};
use uuid::Uuid;

/// Parallel line hatching. The pattern tile is a single vertical line, which
/// the pattern transform rotates to the requested angle, so the tile size is
/// also the line spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct Hatching {
    pub id: String,
    /// Degrees
    pub angle: f64,
    pub distance: f64,
    pub stroke_width: f64,
    pub color: String,
    pub unit: Unit,
}

impl Hatching {
    pub fn new(
        id: &str,
        angle: f64,
        distance: f64,
        stroke_width: f64,
        color: &str,
        unit: Unit,
    ) -> Hatching {
        Hatching {
            id: id.to_string(),
            angle,
            distance,
            stroke_width,
            color: color.to_string(),
            unit,
        }
    }

    /// Fresh, document-unique pattern id.
    pub fn generate_id() -> String {
        format!("hatch-{}", Uuid::new_v4().simple())
    }

    /// The value a `fill` attribute needs to paint with this pattern.
    pub fn reference(&self) -> String {
        format!("url(#{})", self.id)
    }

    /// Equal in everything but the id.
    pub fn same_pattern(&self, other: &Hatching) -> bool {
        self.angle == other.angle
            && self.distance == other.distance
            && self.stroke_width == other.stroke_width
            && self.color == other.color
            && self.unit == other.unit
    }

    /// The line runs down the middle of the tile so its stroke isn't cut in
    /// half by the tile edge.
    pub fn to_svg(&self) -> Pattern {
        let tile = self.unit.of(self.distance);
        let middle = self.unit.of(self.distance / 2.0);
        Pattern::new()
            .set("id", self.id.as_str())
            .set("patternUnits", "userSpaceOnUse")
            .set("width", tile)
            .set("height", tile)
            .set("patternTransform", format!("rotate({})", self.angle))
            .add(
                Line::new()
                    .set("x1", middle)
                    .set("y1", 0)
                    .set("x2", middle)
                    .set("y2", tile)
                    .set("stroke", self.color.as_str())
                    .set("stroke-width", self.unit.of(self.stroke_width)),
            )
    }
}
