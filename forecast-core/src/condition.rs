use crate::model::Condition;

/// Wind speed (km/h) above which a dry day counts as windy.
pub const WINDY_THRESHOLD_KMH: f64 = 15.0;

/// Label a day from its rain, snow and wind values.
///
/// Rules are checked in order and the first match wins, so any rain beats
/// snow and any precipitation beats wind. Negative values are not rejected;
/// they simply fail the `> 0` checks.
pub fn classify(rain: f64, snow: f64, wind: f64) -> Condition {
    if rain > 0.0 {
        Condition::Rainy
    } else if snow > 0.0 {
        Condition::Snowy
    } else if wind > WINDY_THRESHOLD_KMH {
        Condition::Windy
    } else {
        Condition::Sunny
    }
}
