use geo_types::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which wall of a rectangular frame a point sits on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Border {
    Left,
    Top,
    Right,
    Bottom,
    Invalid,
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Border::Left => "left",
            Border::Top => "top",
            Border::Right => "right",
            Border::Bottom => "bottom",
            Border::Invalid => "invalid",
        };
        write!(f, "{}", name)
    }
}

impl Border {
    /// Walls running top to bottom. Apertures on these span along y.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Border::Left | Border::Right)
    }

    /// Does an aperture of `width` starting at (x, y) still end within the
    /// outer rectangle along this wall?
    pub fn fits(&self, outer: &Rect<f64>, x: f64, y: f64, width: f64) -> bool {
        match self {
            Border::Left | Border::Right => y + width <= outer.max().y,
            Border::Top | Border::Bottom => x + width <= outer.max().x,
            Border::Invalid => false,
        }
    }

    /// (width, height) of the opening: it always cuts straight across the
    /// wall, so one side is the wall thickness.
    pub fn aperture_size(&self, wall_width: f64, width: f64) -> (f64, f64) {
        if self.is_vertical() {
            (wall_width, width)
        } else {
            (width, wall_width)
        }
    }
}

/// Classify (x, y) against the four border lines of `outer`. A point has to
/// match exactly one of them, so the shared corners count as invalid.
pub fn locate_border(outer: &Rect<f64>, wall_width: f64, x: f64, y: f64) -> Border {
    let min = outer.min();
    let max = outer.max();
    let candidates = [
        (Border::Left, x == min.x && min.y + wall_width <= y),
        (Border::Top, y == min.y && min.x + wall_width <= x),
        (Border::Right, x == max.x - wall_width && min.y + wall_width <= y),
        (Border::Bottom, y == max.y - wall_width && min.x + wall_width <= x),
    ];
    let mut matched = candidates.iter().filter(|(_, hit)| *hit).map(|(b, _)| *b);
    match (matched.next(), matched.next()) {
        (Some(border), None) => border,
        _ => Border::Invalid,
    }
}
