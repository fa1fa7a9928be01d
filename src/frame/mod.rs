//! Wall frames. A frame is a band of wall between an outer and an inner
//! outline, optionally hatched or filled, with apertures cut across it.
use crate::attributes::{AttrValue, Attributes};
use crate::errors::FrameError;
use crate::hatch::Hatching;
use crate::shape::{FrameDrawing, RectShape};
use crate::units::Unit;
use geo_types::{coord, Rect};
use log::{debug, warn};

pub mod border;
pub use border::{locate_border, Border};

pub mod aperture;
pub use aperture::Aperture;

/// Attribute names which are owned by the frame geometry.
const GEOMETRY_ATTRIBUTES: [&str; 4] = ["x", "y", "width", "height"];

/// Anything a [`crate::plan::Plan`] can lay out. Rectangular frames are the
/// only variant for now, but other outlines only need these.
pub trait Frame {
    /// Shapes in paint order, plus any pattern definition they reference.
    fn draw(&self) -> FrameDrawing;

    /// Cut an opening into one of the walls.
    fn add_aperture(&mut self, x: f64, y: f64, width: f64) -> Result<(), FrameError>;

    /// Outer extent of the frame, in frame units.
    fn bounds(&self) -> Rect<f64>;

    /// The unit every coordinate of the drawing is tagged with.
    fn unit(&self) -> Unit;
}

/// # RectFrame
///
/// A rectangular room outline: the outer rectangle at (x, y), and the inner
/// one inset by the wall width on every side.
///
/// ```rust
/// use floor_planner::frame::RectFrame;
///
/// let mut frame = RectFrame::new(10.0, 20.0, 350.0, 250.0, 25.0);
/// frame.add_filling("gray");
/// frame.add_aperture(55.0, 20.0, 50.0).unwrap(); // top wall
/// assert!(frame.add_aperture(0.0, 0.0, 50.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RectFrame {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    wall_width: f64,
    unit: Unit,
    attributes: Attributes,
    hatching: Option<Hatching>,
    apertures: Vec<Aperture>,
}

impl RectFrame {
    pub fn new(x: f64, y: f64, width: f64, height: f64, wall_width: f64) -> RectFrame {
        RectFrame {
            x,
            y,
            width,
            height,
            wall_width,
            unit: Unit::default(),
            attributes: Attributes::new(),
            hatching: None,
            apertures: vec![],
        }
    }

    /// Same as [`RectFrame::new`], but the extra attributes get passed
    /// straight through to the outer rectangle.
    pub fn with_attributes(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        wall_width: f64,
        attributes: Attributes,
    ) -> Result<RectFrame, FrameError> {
        if let Some(key) = attributes
            .keys()
            .find(|key| GEOMETRY_ATTRIBUTES.contains(key))
        {
            return Err(FrameError::ConflictingAttribute(key.to_string()));
        }
        let mut frame = RectFrame::new(x, y, width, height, wall_width);
        frame.attributes = attributes;
        Ok(frame)
    }

    /// Changing the unit changes the pattern too, so a hatched frame gets a
    /// new pattern id and its fill reference follows along.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        if unit == self.unit {
            return self;
        }
        self.unit = unit;
        if let Some(old) = self.hatching.take() {
            let mut hatching = old.clone();
            hatching.unit = unit;
            hatching.id = Hatching::generate_id();
            if self.attributes.get("fill") == Some(&AttrValue::Text(old.reference())) {
                self.attributes.insert("fill", hatching.reference());
            }
            self.hatching = Some(hatching);
        }
        self
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn wall_width(&self) -> f64 {
        self.wall_width
    }

    pub fn outer_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! {x: self.x, y: self.y},
            coord! {x: self.x + self.width, y: self.y + self.height},
        )
    }

    pub fn inner_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! {x: self.x + self.wall_width, y: self.y + self.wall_width},
            coord! {x: self.x + self.width - self.wall_width, y: self.y + self.height - self.wall_width},
        )
    }

    pub fn hatching(&self) -> Option<&Hatching> {
        self.hatching.as_ref()
    }

    pub fn apertures(&self) -> &[Aperture] {
        &self.apertures
    }

    /// Outer rectangle attributes as they stand, including the fill.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Hatch the wall band. Re-hatching with identical parameters keeps the
    /// pattern id; anything else mints a new one, so clones of this frame
    /// never end up sharing an id for two different patterns.
    pub fn add_hatching(
        &mut self,
        angle: f64,
        distance: f64,
        stroke_width: f64,
        color: &str,
    ) -> &mut Self {
        let mut hatching = Hatching::new(
            &Hatching::generate_id(),
            angle,
            distance,
            stroke_width,
            color,
            self.unit,
        );
        if let Some(existing) = &self.hatching {
            if existing.same_pattern(&hatching) {
                hatching.id = existing.id.clone();
            }
        }
        debug!("Hatching frame with {} at {} degrees", hatching.id, angle);
        self.attributes.insert("fill", hatching.reference());
        self.hatching = Some(hatching);
        self
    }

    /// Flat fill for the wall band. Replaces whatever was in `fill` before,
    /// hatch references included; the hatch definition itself stays around.
    pub fn add_filling(&mut self, color: &str) -> &mut Self {
        self.attributes.insert("fill", color);
        self
    }

    pub fn add_aperture(&mut self, x: f64, y: f64, width: f64) -> Result<&mut Self, FrameError> {
        if !(width > 0.0) {
            warn!("Rejected aperture at ({}, {}): width {} is not positive", x, y, width);
            return Err(FrameError::InvalidApertureWidth { x, y, width });
        }
        let outer = self.outer_rect();
        let border = locate_border(&outer, self.wall_width, x, y);
        if border == Border::Invalid {
            warn!("Rejected aperture at ({}, {}): not on a wall", x, y);
            return Err(FrameError::NotOnBorder { x, y });
        }
        if !border.fits(&outer, x, y, width) {
            warn!("Rejected aperture at ({}, {}): {} is too wide", x, y, width);
            return Err(FrameError::ApertureTooWide {
                border,
                x,
                y,
                width,
            });
        }
        debug!("Aperture of {} at ({}, {}) on the {} wall", width, x, y, border);
        self.apertures.push(Aperture::new(x, y, width, border));
        Ok(self)
    }

    /// Outer, inner, then every aperture in the order they were added.
    pub fn draw(&self) -> FrameDrawing {
        let mut outer_attributes = Attributes::new().with("stroke", "black");
        outer_attributes.merge(&self.attributes);

        let mut shapes = vec![
            RectShape::from_rect(&self.outer_rect(), self.unit).with_attributes(&outer_attributes),
            RectShape::from_rect(&self.inner_rect(), self.unit).with_attributes(
                &Attributes::new().with("fill", "white").with("stroke", "black"),
            ),
        ];
        shapes.extend(
            self.apertures
                .iter()
                .map(|aperture| aperture.shape(self.wall_width, self.unit)),
        );
        FrameDrawing {
            shapes,
            pattern: self.hatching.clone(),
        }
    }
}

impl Frame for RectFrame {
    fn draw(&self) -> FrameDrawing {
        RectFrame::draw(self)
    }

    fn add_aperture(&mut self, x: f64, y: f64, width: f64) -> Result<(), FrameError> {
        RectFrame::add_aperture(self, x, y, width).map(|_| ())
    }

    fn bounds(&self) -> Rect<f64> {
        self.outer_rect()
    }

    fn unit(&self) -> Unit {
        self.unit
    }
}
