pub mod best_flight;
pub mod client_config;
pub mod destinations;
pub mod flight_form;
pub mod flight_optimizer;
pub mod form_view;
pub mod http_optimizer;
pub mod optimize_request;
pub mod optimizer_error;

#[cfg(test)]
pub(crate) mod test_utils;
