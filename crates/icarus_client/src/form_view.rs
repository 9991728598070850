use std::fmt::Display;

use crate::best_flight::BestFlight;

/// What the form currently shows. Exactly one state is visible at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum FormView {
    Idle,
    Loading,
    Error(String),
    Result(BestFlight),
}

impl FormView {
    pub fn is_loading(&self) -> bool {
        matches!(self, FormView::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormView::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn best_flight(&self) -> Option<&BestFlight> {
        match self {
            FormView::Result(best_flight) => Some(best_flight),
            _ => None,
        }
    }
}

impl Display for FormView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormView::Idle => write!(f, "Find the cheapest flight per kilometer."),
            FormView::Loading => write!(f, "Please wait..."),
            FormView::Error(message) => write!(f, "{}", message),
            FormView::Result(best_flight) => write!(f, "{}", best_flight),
        }
    }
}
