use crate::domain::model::{ConversionKind, ConversionRequest};

pub const KILOMETERS_PER_MILE: f64 = 1.60934;

/// Fahrenheit to Celsius. NaN and infinities propagate through the arithmetic.
pub fn convert_temperature(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Miles to kilometers. Negative distances are not clamped.
pub fn convert_distance(miles: f64) -> f64 {
    miles * KILOMETERS_PER_MILE
}

impl ConversionKind {
    pub fn convert(&self, value: f64) -> f64 {
        match self {
            ConversionKind::Temperature => convert_temperature(value),
            ConversionKind::Distance => convert_distance(value),
        }
    }
}

impl ConversionRequest {
    pub fn convert(&self) -> f64 {
        self.kind().convert(self.value())
    }
}
