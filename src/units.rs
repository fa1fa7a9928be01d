use serde::{Deserialize, Serialize};
use std::fmt;

/// The linear unit coordinates are emitted in. Nothing gets converted, the
/// value is simply tagged with the unit suffix when it hits the SVG.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    Mm,
    Cm,
    In,
    Pt,
    Pc,
    Px,
    /// Plain user units, no suffix at all.
    User,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Px => "px",
            Unit::User => "",
        }
    }

    /// How many SVG user units (CSS pixels, 96 per inch) fit in one of these.
    pub fn user_units(&self) -> f64 {
        match self {
            Unit::Mm => 96.0 / 25.4,
            Unit::Cm => 96.0 / 2.54,
            Unit::In => 96.0,
            Unit::Pt => 96.0 / 72.0,
            Unit::Pc => 16.0,
            Unit::Px | Unit::User => 1.0,
        }
    }

    /// Tag a raw value with this unit.
    pub fn of(self, value: f64) -> Length {
        Length::new(value, self)
    }
}

/// A value with a unit attached, eg: `10mm`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Length {
        Length { value, unit }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl From<Length> for svg::node::Value {
    fn from(length: Length) -> Self {
        length.to_string().into()
    }
}
