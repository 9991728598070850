use std::future::Future;

use crate::{
    best_flight::BestFlight, optimize_request::OptimizeRequest, optimizer_error::OptimizerError,
};

/// The external service that picks the cheapest flight per kilometer.
pub trait FlightOptimizer {
    fn optimize(
        &self,
        request: &OptimizeRequest,
    ) -> impl Future<Output = Result<BestFlight, OptimizerError>> + Send;
}
