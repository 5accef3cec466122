use clap::Subcommand;
use timetiler_core::views::AgendaView;
use timetiler_core::{ChronoLocalizer, Localizer, ViewConfig};

use super::common::{date_instant, parse_date, read_appointments};

#[derive(Subcommand)]
pub enum AgendaAction {
    /// List appointments day by day over a window
    Show {
        /// First day of the window (YYYY-MM-DD)
        date: String,
        /// JSON file of appointments ("-" for stdin)
        file: String,
        /// Window length in days (defaults to the configured agenda length)
        #[arg(long)]
        length: Option<u32>,
    },
}

pub fn run(action: AgendaAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AgendaAction::Show { date, file, length } => {
            let date = parse_date(&date)?;
            let appointments = read_appointments(&file)?;
            let config = ViewConfig::load_or_default();
            let length = length.unwrap_or(config.agenda_length);

            let localizer = ChronoLocalizer::new();
            let view = AgendaView::build(&appointments, date_instant(date), length, &localizer)?;
            if view.is_empty() {
                println!("{}", localizer.messages().no_appointments_in_range);
            } else {
                println!("{}", serde_json::to_string_pretty(&view)?);
            }
        }
    }
    Ok(())
}
