use std::process::ExitCode;

use clap::Args;
use icarus_client::{flight_form::FlightForm, flight_optimizer::FlightOptimizer};

use crate::{render::render_view, submit::submit_with_spinner};

#[derive(Args)]
pub struct SearchArgs {
    /// Departure city name
    #[arg(long = "from")]
    origin: String,

    /// Destination cities, as separate values and/or comma separated
    #[arg(long = "to", num_args = 1.., required = true)]
    destinations: Vec<String>,
}

impl SearchArgs {
    fn fill(&self, form: &mut FlightForm) {
        form.set_origin(self.origin.as_str());
        form.set_destinations(self.destinations.join(","));
    }
}

pub async fn run<O>(args: SearchArgs, optimizer: &O) -> Result<ExitCode, anyhow::Error>
where
    O: FlightOptimizer,
{
    let mut form = FlightForm::new();
    args.fill(&mut form);

    submit_with_spinner(&mut form, optimizer).await?;

    let view = form.view();
    println!("{}", render_view(&view));

    Ok(if view.error_message().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
