use comfy_table::{Table, presets::UTF8_FULL};
use icarus_client::{best_flight::BestFlight, form_view::FormView};

pub fn result_card(best_flight: &BestFlight) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .add_row(vec!["Price", best_flight.formatted_price().as_str()])
        .add_row(vec!["Distance", best_flight.formatted_distance().as_str()])
        .add_row(vec!["Value", best_flight.formatted_ratio().as_str()]);

    table
}

pub fn render_view(view: &FormView) -> String {
    match view {
        FormView::Result(best_flight) => {
            format!("🏆 {}\n{}", best_flight.title(), result_card(best_flight))
        }
        other => other.to_string(),
    }
}
