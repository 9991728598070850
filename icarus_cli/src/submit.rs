use std::time::Duration;

use icarus_client::{
    flight_form::{FlightForm, FormError},
    flight_optimizer::FlightOptimizer,
};
use indicatif::{ProgressBar, ProgressStyle};

pub fn loading_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Submits the form, showing a spinner for as long as it is loading.
pub async fn submit_with_spinner<O>(form: &mut FlightForm, optimizer: &O) -> Result<(), FormError>
where
    O: FlightOptimizer,
{
    let submission = form.begin_submit()?;
    let spinner = loading_spinner(form.view().to_string());

    let outcome = optimizer.optimize(submission.request()).await;

    spinner.finish_and_clear();
    form.complete(submission, outcome);

    Ok(())
}
