/// Rounds a floating point value to a fixed number of decimals.
///
/// Rounding works on the exact binary value, like Python's `round(x, n)`: `1.0005` is stored as
/// `1.000499999…` and becomes `1.0`, while `2.0005` is stored as `2.000500000…1` and becomes `2.001`.
pub trait RoundTo {
    fn round_to(self, decimals: u32) -> Self;
}

impl RoundTo for f64 {
    fn round_to(self, decimals: u32) -> f64 {
        // Formatting with a precision is exactly rounded, scaling by 10^n first is not
        format!("{:.*}", decimals as usize, self).parse().unwrap_or(self)
    }
}
