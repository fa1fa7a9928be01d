use crate::frame::Border;
use crate::units::Unit;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameError {
    /// The aperture origin doesn't sit on any of the four wall borders.
    NotOnBorder { x: f64, y: f64 },
    /// The aperture runs past the end of the wall it sits on.
    ApertureTooWide {
        border: Border,
        x: f64,
        y: f64,
        width: f64,
    },
    /// Zero, negative or NaN aperture widths.
    InvalidApertureWidth { x: f64, y: f64, width: f64 },
    /// Extra attributes may not clobber the frame geometry.
    ConflictingAttribute(String),
}

impl std::error::Error for FrameError {}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FrameError::NotOnBorder { x, y } => {
                write!(f, "Aperture at ({}, {}) is not located on the wall border", x, y)
            }
            FrameError::ApertureTooWide {
                border,
                x,
                y,
                width,
            } => write!(
                f,
                "Aperture width exceed wall sizes: {} from ({}, {}) on the {} wall",
                width, x, y, border
            ),
            FrameError::InvalidApertureWidth { x, y, width } => write!(
                f,
                "Aperture at ({}, {}) needs a positive width, got {}",
                x, y, width
            ),
            FrameError::ConflictingAttribute(name) => write!(
                f,
                "Attribute '{}' conflicts with the frame geometry",
                name
            ),
        }
    }
}

#[derive(Debug)]
pub enum PlanError {
    /// Nothing to draw, so there are no bounds for the document either.
    EmptyPlan,
    /// Every frame in a plan has to share the plan unit.
    UnitMismatch { plan: Unit, frame: Unit },
    /// Two different patterns were handed over under one id.
    PatternConflict(String),
    InvalidColor(String),
    Frame(FrameError),
    Parse(String),
    Io(std::io::Error),
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Frame(err) => Some(err),
            PlanError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlanError::EmptyPlan => write!(f, "Plan contains no frames."),
            PlanError::UnitMismatch { plan, frame } => write!(
                f,
                "Frame unit {:?} does not match plan unit {:?}",
                frame, plan
            ),
            PlanError::PatternConflict(id) => {
                write!(f, "Pattern id '{}' used for two different patterns", id)
            }
            PlanError::InvalidColor(msg) => write!(f, "Invalid color: {}", msg),
            PlanError::Frame(err) => write!(f, "Frame error: {}", err),
            PlanError::Parse(msg) => write!(f, "Plan file parse error: {}", msg),
            PlanError::Io(err) => write!(f, "Plan IO error: {}", err),
        }
    }
}

impl From<FrameError> for PlanError {
    fn from(error: FrameError) -> Self {
        PlanError::Frame(error)
    }
}

impl From<ron::error::SpannedError> for PlanError {
    fn from(error: ron::error::SpannedError) -> Self {
        PlanError::Parse(error.to_string())
    }
}

impl From<csscolorparser::ParseColorError> for PlanError {
    fn from(error: csscolorparser::ParseColorError) -> Self {
        PlanError::InvalidColor(error.to_string())
    }
}

impl From<std::io::Error> for PlanError {
    fn from(error: std::io::Error) -> Self {
        PlanError::Io(error)
    }
}
