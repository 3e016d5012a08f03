//! Precision helpers for cell values

/// Round towards positive infinity at `precision` decimal digits: 12.3416 -> 12.35
pub fn round_up(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (value * scale).ceil() / scale
}

/// Round towards negative infinity at `precision` decimal digits: 12.3496 -> 12.34
pub fn round_down(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (value * scale).floor() / scale
}

/// Round to nearest (half away from zero) at `precision` decimal digits: 12.3456 -> 12.35
pub fn round(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (value * scale).round() / scale
}
