use std::sync::Mutex;

use crate::{
    best_flight::BestFlight, flight_optimizer::FlightOptimizer,
    optimize_request::OptimizeRequest, optimizer_error::OptimizerError,
};

pub fn best_flight(destination: &str, price: f64, distance: f64, ratio: f64) -> BestFlight {
    BestFlight {
        destination: destination.to_string(),
        price,
        distance,
        ratio,
    }
}

/// Answers every request with the same canned outcome and records what it received.
pub struct StaticOptimizer {
    outcome: Result<BestFlight, (u16, Option<String>)>,
    pub requests: Mutex<Vec<OptimizeRequest>>,
}

impl StaticOptimizer {
    pub fn success(flight: BestFlight) -> Self {
        Self {
            outcome: Ok(flight),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failure(status: u16, message: Option<&str>) -> Self {
        Self {
            outcome: Err((status, message.map(String::from))),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl FlightOptimizer for StaticOptimizer {
    async fn optimize(&self, request: &OptimizeRequest) -> Result<BestFlight, OptimizerError> {
        self.requests.lock().unwrap().push(request.clone());

        match &self.outcome {
            Ok(flight) => Ok(flight.clone()),
            Err((status, message)) => Err(OptimizerError::Server {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
