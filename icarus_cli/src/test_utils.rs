use std::{
    future::Future,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use icarus_client::{
    best_flight::BestFlight, flight_optimizer::FlightOptimizer,
    optimize_request::OptimizeRequest, optimizer_error::OptimizerError,
};

pub fn paris() -> BestFlight {
    BestFlight {
        destination: "Paris".to_string(),
        price: 68.7,
        distance: 343.5,
        ratio: 0.2,
    }
}

/// Settles every request with the same outcome after `delay`.
pub struct DelayedOptimizer {
    delay: Duration,
    outcome: Result<BestFlight, Option<String>>,
    calls: AtomicUsize,
}

impl DelayedOptimizer {
    pub fn success(delay: Duration, flight: BestFlight) -> Self {
        Self {
            delay,
            outcome: Ok(flight),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failure(delay: Duration, message: Option<&str>) -> Self {
        Self {
            delay,
            outcome: Err(message.map(String::from)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FlightOptimizer for DelayedOptimizer {
    // Counts the call when the request is issued, not when it is first polled.
    fn optimize(
        &self,
        _request: &OptimizeRequest,
    ) -> impl Future<Output = Result<BestFlight, OptimizerError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay;
        let outcome = self.outcome.clone();

        async move {
            tokio::time::sleep(delay).await;
            outcome.map_err(|message| OptimizerError::Server {
                status: 404,
                message,
            })
        }
    }
}
