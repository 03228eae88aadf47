use crate::ngs::LookupError;

/// Parses a latitude or longitude typed by the user.
///
/// Surrounding whitespace is ignored. Anything that isn't a finite number yields
/// [`LookupError::InvalidInput`] naming the offending `field`.
pub fn parse_coordinate(field: &'static str, text: &str) -> Result<f64, LookupError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LookupError::InvalidInput {
            field,
            value: text.to_string(),
        })
}
