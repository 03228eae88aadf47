/// Feet per meter, using the US survey foot.
pub const METERS_TO_FEET: f64 = 3.28083333;

/// The geoid height at a single point, in meters and in feet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightResult {
    pub latitude: f64,
    pub longitude: f64,
    pub height_meters: f64,
    pub height_feet: f64,
}

impl HeightResult {
    pub fn from_meters(latitude: f64, longitude: f64, height_meters: f64) -> Self {
        HeightResult {
            latitude,
            longitude,
            height_meters,
            height_feet: height_meters * METERS_TO_FEET,
        }
    }
}
