use std::{future::Future, io::Write, pin::Pin, str::FromStr};

use icarus_client::{
    best_flight::BestFlight,
    flight_form::{FlightForm, Submission},
    flight_optimizer::FlightOptimizer,
    optimizer_error::OptimizerError,
};
use indicatif::ProgressBar;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::{render::render_view, submit::loading_spinner};

const HELP: &str = "\
Commands:
  origin <city>          set the departure city
  to <city, city, ...>   set the destinations (comma separated)
  search                 submit the form
  clear                  reset the form
  show                   print the form
  help                   print this message
  quit                   leave";

#[derive(Debug, PartialEq)]
pub enum PromptCommand {
    Origin(String),
    Destinations(String),
    Search,
    Clear,
    Show,
    Help,
    Quit,
}

impl FromStr for PromptCommand {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (command, rest) = input
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((input, ""));

        match command.to_ascii_lowercase().as_str() {
            "origin" | "from" => Ok(PromptCommand::Origin(rest.to_string())),
            "to" | "destinations" => Ok(PromptCommand::Destinations(rest.to_string())),
            "search" | "submit" => Ok(PromptCommand::Search),
            "clear" => Ok(PromptCommand::Clear),
            "show" => Ok(PromptCommand::Show),
            "help" | "?" => Ok(PromptCommand::Help),
            "quit" | "exit" => Ok(PromptCommand::Quit),
            other => Err(format!("Unknown command '{}', type 'help'", other)),
        }
    }
}

type Outcome = Result<BestFlight, OptimizerError>;

/// A submission whose response has not settled yet.
struct InFlight<'a> {
    submission: Submission,
    outcome: Pin<Box<dyn Future<Output = Outcome> + 'a>>,
    spinner: ProgressBar,
}

enum Event {
    Line(Option<String>),
    Settled(Outcome),
}

fn print_form<W: Write>(out: &mut W, form: &FlightForm) -> Result<(), std::io::Error> {
    writeln!(out, "Departure City: {}", form.origin())?;
    writeln!(out, "Destinations (comma separated): {}", form.destinations())?;
    writeln!(out, "{}", render_view(&form.view()))
}

fn prompt<W: Write>(out: &mut W) -> Result<(), std::io::Error> {
    write!(out, "> ")?;
    out.flush()
}

fn settle<W: Write>(
    out: &mut W,
    form: &mut FlightForm,
    in_flight: InFlight<'_>,
    outcome: Outcome,
) -> Result<(), std::io::Error> {
    in_flight.spinner.finish_and_clear();

    if form.complete(in_flight.submission, outcome) {
        writeln!(out, "{}", render_view(&form.view()))?;
    } else {
        debug!("Ignored response of a cleared search");
    }

    Ok(())
}

/// Runs the prompt over `reader` until `quit` or end of input. The response
/// of a search is awaited alongside the next input line, so the other
/// commands stay usable while the form is loading.
pub async fn prompt_loop<'a, R, W, O>(
    reader: R,
    out: &mut W,
    optimizer: &'a O,
) -> Result<FlightForm, anyhow::Error>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    O: FlightOptimizer,
{
    let mut form = FlightForm::new();
    let mut lines = reader.lines();
    let mut in_flight: Option<InFlight<'a>> = None;

    writeln!(out, "✈️ Flight Value Optimizer")?;
    writeln!(out, "{}", HELP)?;
    prompt(out)?;

    loop {
        let event = match in_flight.as_mut() {
            Some(pending) => tokio::select! {
                outcome = &mut pending.outcome => Event::Settled(outcome),
                line = lines.next_line() => Event::Line(line?),
            },
            None => Event::Line(lines.next_line().await?),
        };

        let line = match event {
            Event::Settled(outcome) => {
                if let Some(pending) = in_flight.take() {
                    settle(out, &mut form, pending, outcome)?;
                    prompt(out)?;
                }
                continue;
            }
            Event::Line(Some(line)) => line,
            Event::Line(None) => break,
        };

        if line.trim().is_empty() {
            prompt(out)?;
            continue;
        }

        match line.parse::<PromptCommand>() {
            Ok(PromptCommand::Origin(origin)) => form.set_origin(origin),
            Ok(PromptCommand::Destinations(destinations)) => form.set_destinations(destinations),
            Ok(PromptCommand::Search) => match form.begin_submit() {
                Ok(submission) => {
                    let request = submission.request().clone();
                    let spinner = loading_spinner(form.view().to_string());
                    // Replaces the pending response of a cleared search, if any.
                    in_flight = Some(InFlight {
                        submission,
                        outcome: Box::pin(async move { optimizer.optimize(&request).await }),
                        spinner,
                    });
                }
                Err(err) => writeln!(out, "{}", err)?,
            },
            Ok(PromptCommand::Clear) => {
                form.clear();
                if let Some(pending) = &in_flight {
                    pending.spinner.finish_and_clear();
                }
                print_form(out, &form)?;
            }
            Ok(PromptCommand::Show) => print_form(out, &form)?,
            Ok(PromptCommand::Help) => writeln!(out, "{}", HELP)?,
            Ok(PromptCommand::Quit) => {
                if let Some(pending) = in_flight.take() {
                    pending.spinner.finish_and_clear();
                }
                break;
            }
            Err(message) => writeln!(out, "{}", message)?,
        }

        prompt(out)?;
    }

    // End of input with a search still pending: let it settle before leaving.
    if let Some(mut pending) = in_flight.take() {
        let outcome = (&mut pending.outcome).await;
        settle(out, &mut form, pending, outcome)?;
    }

    Ok(form)
}

pub async fn run<O>(optimizer: &O) -> Result<(), anyhow::Error>
where
    O: FlightOptimizer,
{
    let stdin = BufReader::new(tokio::io::stdin());
    prompt_loop(stdin, &mut std::io::stdout(), optimizer).await?;

    info!("Bye");

    Ok(())
}
