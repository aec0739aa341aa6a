use std::f64::consts::PI;

pub fn rectangle_area(length: f64, width: f64) -> f64 {
    length * width
}

/// Negative radii are accepted; the square makes the sign irrelevant.
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}
