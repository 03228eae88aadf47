mod appearance;
mod coordinate;
mod height_result;
mod length_unit;
mod rounded_height;

pub use appearance::{Appearance, AppearanceMode};
pub use coordinate::parse_coordinate;
pub use height_result::HeightResult;
pub use length_unit::LengthUnit;
pub use rounded_height::RoundedHeight;
