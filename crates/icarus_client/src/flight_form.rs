use thiserror::Error;
use tracing::debug;

use crate::{
    best_flight::BestFlight, destinations::parse_destinations, flight_optimizer::FlightOptimizer,
    form_view::FormView, optimize_request::OptimizeRequest, optimizer_error::OptimizerError,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Departure city is required")]
    MissingOrigin,

    #[error("At least one destination is required")]
    MissingDestinations,

    #[error("A search is already in progress")]
    AlreadyLoading,
}

/// An accepted submission. Completing the form requires handing it back,
/// a ticket made stale by `clear` is ignored.
#[derive(Debug)]
pub struct Submission {
    generation: u64,
    request: OptimizeRequest,
}

impl Submission {
    pub fn request(&self) -> &OptimizeRequest {
        &self.request
    }
}

/// Form state for a single session.
///
/// Invariants: at most one of `result` and `error` is set, and `loading`
/// is true only while the submission stamped with `generation` is outstanding.
#[derive(Debug, Default)]
pub struct FlightForm {
    origin: String,
    destinations: String,
    result: Option<BestFlight>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl FlightForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destinations(&self) -> &str {
        &self.destinations
    }

    pub fn result(&self) -> Option<&BestFlight> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_origin(&mut self, origin: impl Into<String>) {
        self.origin = origin.into();
    }

    pub fn set_destinations(&mut self, destinations: impl Into<String>) {
        self.destinations = destinations.into();
    }

    pub fn destination_list(&self) -> Vec<String> {
        parse_destinations(&self.destinations)
    }

    pub fn validate(&self) -> Result<OptimizeRequest, FormError> {
        if self.origin.trim().is_empty() {
            return Err(FormError::MissingOrigin);
        }

        let request = OptimizeRequest::from_form_text(&self.origin, &self.destinations);
        if request.destinations.is_empty() {
            return Err(FormError::MissingDestinations);
        }

        Ok(request)
    }

    /// Validates the inputs and enters the loading state.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.loading {
            return Err(FormError::AlreadyLoading);
        }

        let request = self.validate()?;

        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.error = None;
        self.result = None;

        debug!(
            "Submission {}: {} -> {:?}",
            self.generation, request.origin, request.destinations
        );

        Ok(Submission {
            generation: self.generation,
            request,
        })
    }

    /// Applies the outcome of `submission`. Returns false when the ticket
    /// is stale and the form was left untouched.
    pub fn complete(
        &mut self,
        submission: Submission,
        outcome: Result<BestFlight, OptimizerError>,
    ) -> bool {
        if !self.loading || submission.generation != self.generation {
            debug!("Discarding stale submission {}", submission.generation);
            return false;
        }

        match outcome {
            Ok(best_flight) => {
                self.result = Some(best_flight);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.user_message());
                self.result = None;
            }
        }

        self.loading = false;
        true
    }

    pub async fn submit<O>(&mut self, optimizer: &O) -> Result<(), FormError>
    where
        O: FlightOptimizer,
    {
        let submission = self.begin_submit()?;
        let outcome = optimizer.optimize(submission.request()).await;
        self.complete(submission, outcome);

        Ok(())
    }

    /// Resets every field and abandons any outstanding submission.
    pub fn clear(&mut self) {
        self.origin.clear();
        self.destinations.clear();
        self.result = None;
        self.error = None;
        self.loading = false;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn view(&self) -> FormView {
        if self.loading {
            return FormView::Loading;
        }

        match (&self.error, &self.result) {
            (Some(message), _) => FormView::Error(message.clone()),
            (None, Some(best_flight)) => FormView::Result(best_flight.clone()),
            (None, None) => FormView::Idle,
        }
    }
}
