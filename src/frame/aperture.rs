use super::border::Border;
use crate::attributes::Attributes;
use crate::shape::RectShape;
use crate::units::Unit;

/// A door or window opening. Only ever built by a frame, after the position
/// has been checked against its walls.
#[derive(Debug, Clone, PartialEq)]
pub struct Aperture {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub border: Border,
}

impl Aperture {
    pub(crate) fn new(x: f64, y: f64, width: f64, border: Border) -> Aperture {
        Aperture {
            x,
            y,
            width,
            border,
        }
    }

    pub fn shape(&self, wall_width: f64, unit: Unit) -> RectShape {
        let (width, height) = self.border.aperture_size(wall_width, self.width);
        RectShape::new(self.x, self.y, width, height, unit)
            .with_attributes(&Attributes::new().with("fill", "white"))
    }
}
