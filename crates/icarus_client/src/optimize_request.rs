use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::destinations::parse_destinations;

/// Body of `POST <endpoint>`.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "OptimizeRequest")]
pub struct OptimizeRequest {
    /// Departure city name
    pub origin: String,

    /// Candidate destination city names, in the order they were entered
    pub destinations: Vec<String>,
}

impl OptimizeRequest {
    pub fn new(origin: impl Into<String>, destinations: Vec<String>) -> Self {
        Self {
            origin: origin.into(),
            destinations,
        }
    }

    /// Builds a request from raw form text, `destinations` being comma separated.
    pub fn from_form_text(origin: &str, destinations: &str) -> Self {
        Self::new(origin.trim(), parse_destinations(destinations))
    }
}
