//! Provides the [`Plan`], which gathers frames into a complete SVG document.
use crate::errors::PlanError;
use crate::frame::Frame;
use crate::hatch::Hatching;
use crate::units::Unit;
use geo::BoundingRect;
use geo_types::{MultiPolygon, Rect};
use log::info;
use std::collections::HashMap;
use std::path::Path;
use svg::node::element::Definitions;
use svg::Document;

pub mod plan_file;

/// # Plan
///
/// A sheet of frames, all in the plan unit. The sheet runs from (0, 0), or
/// further up and left if a frame sits at negative coordinates, to the far
/// corner of the furthest frame.
///
/// ```rust
/// use floor_planner::prelude::*;
///
/// let mut frame = RectFrame::new(10.0, 20.0, 350.0, 250.0, 25.0).with_unit(Unit::Px);
/// frame.add_hatching(30.0, 5.0, 2.0, "black");
/// let mut plan = Plan::new(Unit::Px);
/// plan.add_frame(frame).unwrap();
/// let doc = plan.to_svg().unwrap();
/// assert!(doc.to_string().contains("<defs>"));
/// ```
pub struct Plan {
    unit: Unit,
    frames: Vec<Box<dyn Frame>>,
}

impl Plan {
    pub fn new(unit: Unit) -> Plan {
        Plan {
            unit,
            frames: vec![],
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn add_frame<F: Frame + 'static>(&mut self, frame: F) -> Result<&mut Self, PlanError> {
        if frame.unit() != self.unit {
            return Err(PlanError::UnitMismatch {
                plan: self.unit,
                frame: frame.unit(),
            });
        }
        self.frames.push(Box::new(frame));
        Ok(self)
    }

    pub fn frames(&self) -> &[Box<dyn Frame>] {
        &self.frames
    }

    /// Union of every frame's bounds, or None for an empty plan.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        MultiPolygon::new(
            self.frames
                .iter()
                .map(|frame| frame.bounds().to_polygon())
                .collect(),
        )
        .bounding_rect()
    }

    /// Assemble the document: patterns first in `<defs>`, then each frame's
    /// shapes in the order the frames were added.
    pub fn to_svg(&self) -> Result<Document, PlanError> {
        let bounds = self.bounds().ok_or(PlanError::EmptyPlan)?;
        let scale = self.unit.user_units();
        let (left, top) = (bounds.min().x.min(0.0), bounds.min().y.min(0.0));
        let (width, height) = (bounds.max().x - left, bounds.max().y - top);

        let mut document = Document::new()
            .set(
                "viewBox",
                (left * scale, top * scale, width * scale, height * scale),
            )
            .set("width", self.unit.of(width))
            .set("height", self.unit.of(height));

        let drawings: Vec<_> = self.frames.iter().map(|frame| frame.draw()).collect();

        // Frames cloned from one another share their pattern, which only
        // needs defining once. One id for two patterns would leave a frame
        // painted with the wrong one.
        let mut seen: HashMap<&str, &Hatching> = HashMap::new();
        let mut defs = Definitions::new();
        let mut has_defs = false;
        for pattern in drawings.iter().filter_map(|drawing| drawing.pattern.as_ref()) {
            match seen.get(pattern.id.as_str()) {
                Some(&existing) if existing == pattern => {}
                Some(_) => return Err(PlanError::PatternConflict(pattern.id.clone())),
                None => {
                    seen.insert(pattern.id.as_str(), pattern);
                    defs = defs.add(pattern.to_svg());
                    has_defs = true;
                }
            }
        }
        if has_defs {
            document = document.add(defs);
        }

        for drawing in &drawings {
            for shape in &drawing.shapes {
                document = document.add(shape.to_svg());
            }
        }
        Ok(document)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PlanError> {
        let document = self.to_svg()?;
        svg::save(path.as_ref(), &document)?;
        info!(
            "Saved plan with {} frame(s) to {}",
            self.frames.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}
