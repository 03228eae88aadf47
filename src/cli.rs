use crate::domain::{AppearanceMode, LengthUnit};
use clap::Parser;

/// Look up the GEOID18 geoid height at a point and copy it in meters or feet.
///
/// Without --lat and --lon an interactive session is started.
#[derive(Debug, Parser)]
#[command(name = "geoid-height", version, about)]
pub struct Cli {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<String>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<String>,

    /// Copy the rounded height in this unit after the lookup
    #[arg(long, value_enum, requires = "lat")]
    pub copy: Option<LengthUnit>,

    /// Use plain output without colors
    #[arg(long)]
    pub plain: bool,

    /// Overrides the configured appearance
    #[arg(long, value_enum)]
    pub appearance: Option<AppearanceMode>,
}

impl Cli {
    /// The coordinates for a one-shot lookup, if both were given.
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        match (&self.lat, &self.lon) {
            (Some(lat), Some(lon)) => Some((lat.as_str(), lon.as_str())),
            _ => None,
        }
    }
}
