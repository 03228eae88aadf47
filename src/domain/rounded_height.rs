use crate::domain::{HeightResult, LengthUnit};
use crate::extensions::f64_ext::RoundTo;
use std::fmt::Display;

/// Number of decimals shown for, and copied from, a rounded height.
pub const ROUNDED_DECIMALS: u32 = 3;

/// A height rounded for display and copying, e.g. `40.502 feet`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedHeight {
    value: f64,
    unit: LengthUnit,
}

impl RoundedHeight {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        RoundedHeight {
            value: value.round_to(ROUNDED_DECIMALS),
            unit,
        }
    }

    pub fn meters(result: &HeightResult) -> Self {
        RoundedHeight::new(result.height_meters, LengthUnit::Meters)
    }

    pub fn feet(result: &HeightResult) -> Self {
        RoundedHeight::new(result.height_feet, LengthUnit::Feet)
    }

    /// The text placed on the clipboard.
    pub fn copy_text(&self) -> String {
        self.to_string()
    }
}

impl Display for RoundedHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*} {}", ROUNDED_DECIMALS as usize, self.value, self.unit)
    }
}
