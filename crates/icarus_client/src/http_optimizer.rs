use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    best_flight::BestFlight, client_config::ClientConfig, flight_optimizer::FlightOptimizer,
    optimize_request::OptimizeRequest, optimizer_error::OptimizerError,
};

/// Failure body of the service. Only `error` is meaningful, other fields
/// (e.g. `message`) are ignored.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub struct HttpOptimizerParams {
    pub endpoint: String,
}

impl From<&ClientConfig> for HttpOptimizerParams {
    fn from(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.api_url.clone(),
        }
    }
}

pub struct HttpOptimizer {
    params: HttpOptimizerParams,
    client: reqwest::Client,
}

impl HttpOptimizer {
    pub fn new(params: HttpOptimizerParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.params.endpoint
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<BestFlight, OptimizerError> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let best_flight: BestFlight = serde_json::from_slice(&body)?;
            Ok(best_flight)
        } else {
            // An empty `error` is treated like a missing one.
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.error)
                .filter(|message| !message.is_empty());

            Err(OptimizerError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl FlightOptimizer for HttpOptimizer {
    async fn optimize(&self, request: &OptimizeRequest) -> Result<BestFlight, OptimizerError> {
        debug!(
            "OptimizerApi: POST {} origin={} destinations={}",
            self.params.endpoint,
            request.origin,
            request.destinations.len()
        );

        let response = self
            .client
            .post(&self.params.endpoint)
            .json(request)
            .send()
            .await;

        let result = match response {
            Ok(response) => self.handle_response(response).await,
            Err(err) => Err(OptimizerError::Request(err)),
        };

        if let Err(err) = &result {
            warn!("OptimizerApi: request failed: {}", err);
        }

        result
    }
}
