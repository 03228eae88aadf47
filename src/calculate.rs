use crate::app_state::AppState;
use crate::domain::{HeightResult, LengthUnit, RoundedHeight, parse_coordinate};
use crate::ngs::{HeightLookup, LookupError};
use tracing::{debug, instrument};

/// What a successful lookup puts on screen: the unrounded summary and the copyable rounded values.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    summary: String,
    rounded_feet: RoundedHeight,
    rounded_meters: RoundedHeight,
}

impl Calculation {
    pub fn from_result(result: &HeightResult) -> Self {
        let summary = format!(
            "Geoid height at latitude {}, longitude {}:\nIn meters (unrounded): {:.6}\nIn feet (unrounded): {:.6}",
            result.latitude, result.longitude, result.height_meters, result.height_feet
        );

        Calculation {
            summary,
            rounded_feet: RoundedHeight::feet(result),
            rounded_meters: RoundedHeight::meters(result),
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn rounded(&self, unit: LengthUnit) -> RoundedHeight {
        match unit {
            LengthUnit::Feet => self.rounded_feet,
            LengthUnit::Meters => self.rounded_meters,
        }
    }
}

/// Runs a lookup for the coordinates currently entered in `state`.
///
/// Unparsable input fails with [`LookupError::InvalidInput`] before anything is sent.
#[instrument(skip_all, fields(latitude = state.latitude_text(), longitude = state.longitude_text()))]
pub async fn calculate(state: &mut AppState, lookup: &dyn HeightLookup) -> Result<Calculation, LookupError> {
    let latitude = parse_coordinate("latitude", state.latitude_text())?;
    let longitude = parse_coordinate("longitude", state.longitude_text())?;

    let result = lookup.lookup(latitude, longitude).await?;
    debug!(?result, "Calculated geoid height");

    state.set_result(result);
    Ok(Calculation::from_result(&result))
}
