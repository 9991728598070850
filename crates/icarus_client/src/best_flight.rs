use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The single best option returned by the optimization service.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "BestFlight")]
pub struct BestFlight {
    /// Destination city name as resolved by the service
    pub destination: String,

    /// Total price in currency units
    pub price: f64,

    /// Distance in kilometers
    pub distance: f64,

    /// Price per kilometer
    pub ratio: f64,
}

impl BestFlight {
    pub fn title(&self) -> String {
        format!("Best Option: {}", self.destination)
    }

    pub fn formatted_price(&self) -> String {
        format!("${}", self.price)
    }

    pub fn formatted_distance(&self) -> String {
        format!("{} km", self.distance)
    }

    /// Cost per kilometer, two decimals. Ties round away from zero.
    pub fn formatted_ratio(&self) -> String {
        format!("${:.2} / km", (self.ratio * 100.0).round() / 100.0)
    }
}

impl Display for BestFlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "🏆 {}", self.title())?;
        writeln!(f, "Price: {}", self.formatted_price())?;
        writeln!(f, "Distance: {}", self.formatted_distance())?;
        write!(f, "Value: {}", self.formatted_ratio())
    }
}
