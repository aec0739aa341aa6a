use crate::services::geometry::{circle_area, rectangle_area};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// A recognized query, built from its parsed tokens and dropped once its area is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle { length: f64, width: f64 },
    Circle { radius: f64 },
}

impl Shape {
    pub fn keyword(&self) -> &'static str {
        match self {
            Shape::Rectangle { .. } => "rectangle",
            Shape::Circle { .. } => "circle",
        }
    }

    pub fn area(&self) -> f64 {
        match *self {
            Shape::Rectangle { length, width } => rectangle_area(length, width),
            Shape::Circle { radius } => circle_area(radius),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct AreaResult {
    pub shape: String,
    pub area: f64,
    pub formatted: String,
}
