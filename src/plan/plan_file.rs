use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Plan;
use crate::attributes::Attributes;
use crate::errors::PlanError;
use crate::frame::RectFrame;
use crate::units::Unit;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HatchSpec {
    pub angle: f64,
    pub distance: f64,
    pub stroke_width: f64,
    pub color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApertureSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FrameSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub wall_width: f64,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub hatching: Option<HatchSpec>,
    #[serde(default)]
    pub filling: Option<String>,
    #[serde(default)]
    pub apertures: Vec<ApertureSpec>,
}

impl FrameSpec {
    /// Hatching goes on before filling, so a frame with both ends up with the
    /// flat fill on the outer rectangle.
    pub fn build(&self, unit: Unit) -> Result<RectFrame, PlanError> {
        let mut frame = RectFrame::with_attributes(
            self.x,
            self.y,
            self.width,
            self.height,
            self.wall_width,
            self.attributes.clone(),
        )?
        .with_unit(unit);
        if let Some(hatch) = &self.hatching {
            csscolorparser::parse(&hatch.color)?;
            frame.add_hatching(hatch.angle, hatch.distance, hatch.stroke_width, &hatch.color);
        }
        if let Some(color) = &self.filling {
            csscolorparser::parse(color)?;
            frame.add_filling(color);
        }
        for aperture in &self.apertures {
            frame.add_aperture(aperture.x, aperture.y, aperture.width)?;
        }
        Ok(frame)
    }
}

/// Plan description file, in RON.
///
/// ```text
/// (
///     unit: Mm,
///     frames: [
///         (x: 10.0, y: 20.0, width: 350.0, height: 250.0, wall_width: 25.0,
///          hatching: Some((angle: 30.0, distance: 5.0, stroke_width: 2.0, color: "black")),
///          apertures: [(x: 10.0, y: 50.0, width: 50.0)]),
///     ],
/// )
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlanFile {
    #[serde(default)]
    pub unit: Unit,
    pub frames: Vec<FrameSpec>,
}

impl FromStr for PlanFile {
    type Err = PlanError;

    fn from_str(data: &str) -> Result<PlanFile, PlanError> {
        Ok(ron::from_str(data)?)
    }
}

impl PlanFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<PlanFile, PlanError> {
        let mut reader = std::fs::File::open(path)?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        PlanFile::from_str(data.as_str())
    }

    pub fn to_plan(&self) -> Result<Plan, PlanError> {
        let mut plan = Plan::new(self.unit);
        for spec in &self.frames {
            plan.add_frame(spec.build(self.unit)?)?;
        }
        Ok(plan)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::attributes::AttrValue;
    use crate::errors::FrameError;
    use crate::frame::Frame;

    const ROOM: &str = r##"(
        unit: Cm,
        frames: [
            (
                x: 10.0, y: 20.0, width: 350.0, height: 250.0, wall_width: 25.0,
                attributes: [("opacity", 0.5)],
                hatching: Some((angle: 30.0, distance: 5.0, stroke_width: 2.0, color: "black")),
                apertures: [(x: 10.0, y: 50.0, width: 50.0), (x: 55.0, y: 20.0, width: 50.0)],
            ),
            (x: 400.0, y: 20.0, width: 100.0, height: 100.0, wall_width: 10.0, filling: Some("#55FF66")),
        ],
    )"##;

    #[test]
    fn test_load_plan_file() {
        let file = PlanFile::from_str(ROOM).expect("Failed to parse plan");
        assert_eq!(file.unit, Unit::Cm);
        assert_eq!(file.frames.len(), 2);
        assert_eq!(file.frames[0].apertures.len(), 2);
        assert!(file.frames[1].apertures.is_empty());

        let plan = file.to_plan().expect("Failed to build plan");
        let drawing = plan.frames()[0].draw();
        assert_eq!(drawing.shapes.len(), 4);
        assert_eq!(drawing.shapes[0].x.to_string(), "10cm");
        assert_eq!(
            drawing.shapes[0].attributes.get("opacity"),
            Some(&AttrValue::Number(0.5))
        );
        assert!(drawing.pattern.is_some());
        assert_eq!(
            plan.frames()[1].draw().shapes[0].attributes.get("fill"),
            Some(&AttrValue::from("#55FF66"))
        );
    }

    #[test]
    fn test_hatching_then_filling() {
        let frame = FrameSpec {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            wall_width: 10.0,
            attributes: Attributes::new(),
            hatching: Some(HatchSpec {
                angle: 45.0,
                distance: 3.0,
                stroke_width: 1.0,
                color: "black".into(),
            }),
            filling: Some("gray".into()),
            apertures: vec![],
        }
        .build(Unit::Mm)
        .unwrap();
        assert_eq!(frame.attributes().get("fill"), Some(&AttrValue::from("gray")));
        assert!(frame.hatching().is_some());
    }

    #[test]
    fn test_bad_color() {
        let data = "(frames: [(x: 0.0, y: 0.0, width: 10.0, height: 10.0, wall_width: 1.0, filling: Some(\"notacolor\"))])";
        let file = PlanFile::from_str(data).unwrap();
        assert!(matches!(file.to_plan(), Err(PlanError::InvalidColor(_))));
    }

    #[test]
    fn test_bad_aperture() {
        let data = "(frames: [(x: 0.0, y: 0.0, width: 100.0, height: 100.0, wall_width: 10.0, apertures: [(x: 5.0, y: 5.0, width: 10.0)])])";
        let file = PlanFile::from_str(data).unwrap();
        match file.to_plan() {
            Err(PlanError::Frame(FrameError::NotOnBorder { x, y })) => {
                assert_eq!((x, y), (5.0, 5.0))
            }
            _ => panic!("Expected a border placement error"),
        }
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            PlanFile::from_str("(frames: [(x: 0.0)])"),
            Err(PlanError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            PlanFile::from_file("/nonexistent/plan.ron"),
            Err(PlanError::Io(_))
        ));
    }
}
