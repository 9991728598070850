use icarus_client::{best_flight::BestFlight, optimize_request::OptimizeRequest};
use schemars::schema_for;
use serde_json::json;

pub fn run() -> Result<(), anyhow::Error> {
    let schemas = json!({
        "request": schema_for!(OptimizeRequest),
        "response": schema_for!(BestFlight),
    });

    println!("{}", serde_json::to_string_pretty(&schemas)?);

    Ok(())
}
