use clap::Subcommand;
use timetiler_core::layout::{
    appointment_levels, appointment_segments, in_range, sort_appointments, styled_appointments,
    DayLayoutAlgorithm, TimeSlotMetrics,
};
use timetiler_core::views::{day_range, week_range, work_week_range, TimeGridView};
use timetiler_core::{Appointment, ChronoLocalizer, DayRange, ViewConfig};

use super::common::{date_instant, parse_date, read_appointments};

#[derive(Subcommand)]
pub enum LayoutAction {
    /// Full time-grid layout for the week containing DATE
    Week {
        /// Date anywhere in the target week (YYYY-MM-DD)
        date: String,
        /// JSON file of appointments ("-" for stdin)
        file: String,
        /// Restrict to the configured working days
        #[arg(long)]
        work_week: bool,
    },
    /// Full time-grid layout for a single day
    Day {
        /// Target date (YYYY-MM-DD)
        date: String,
        /// JSON file of appointments ("-" for stdin)
        file: String,
        /// Packing strategy: overlap or no-overlap
        #[arg(long)]
        algorithm: Option<DayLayoutAlgorithm>,
    },
    /// Day-span segments and levels over an explicit range
    Levels {
        /// First day of the range (YYYY-MM-DD)
        start: String,
        /// Number of days in the range
        days: usize,
        /// JSON file of appointments ("-" for stdin)
        file: String,
        /// Maximum number of levels; the rest becomes "extra"
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Styled geometry for one day column only
    Column {
        /// Target date (YYYY-MM-DD)
        date: String,
        /// JSON file of appointments ("-" for stdin)
        file: String,
        /// Packing strategy: overlap or no-overlap
        #[arg(long)]
        algorithm: Option<DayLayoutAlgorithm>,
    },
}

pub fn run(action: LayoutAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LayoutAction::Week {
            date,
            file,
            work_week,
        } => {
            let date = parse_date(&date)?;
            let appointments = read_appointments(&file)?;
            let config = ViewConfig::load_or_default();
            let range = if work_week {
                work_week_range(date, &config)?
            } else {
                week_range(date, config.week_start)
            };
            print_grid(&appointments, &range, &config)
        }
        LayoutAction::Day {
            date,
            file,
            algorithm,
        } => {
            let date = parse_date(&date)?;
            let appointments = read_appointments(&file)?;
            let mut config = ViewConfig::load_or_default();
            if let Some(algorithm) = algorithm {
                config.day_layout_algorithm = algorithm;
            }
            print_grid(&appointments, &day_range(date), &config)
        }
        LayoutAction::Levels {
            start,
            days,
            file,
            limit,
        } => {
            let start = parse_date(&start)?;
            let appointments = read_appointments(&file)?;
            let range = DayRange::span(start, days)?;

            let range_start = range.first_instant();
            let range_end = range.last_instant();
            let mut visible: Vec<&Appointment> = appointments
                .iter()
                .filter(|a| in_range(*a, range_start, range_end))
                .collect();
            visible.sort_by(|a, b| sort_appointments(a, b));

            let segments = visible
                .iter()
                .map(|a| appointment_segments(*a, &range))
                .collect();
            let result = appointment_levels(segments, limit);
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        LayoutAction::Column {
            date,
            file,
            algorithm,
        } => {
            let date = parse_date(&date)?;
            let appointments = read_appointments(&file)?;
            let config = ViewConfig::load_or_default();
            let algorithm = algorithm.unwrap_or(config.day_layout_algorithm);

            let (min, max) = config.day_bounds(date)?;
            let metrics =
                TimeSlotMetrics::new(min, max, config.slots.step, config.slots.timeslots)?;
            let day = date_instant(date);
            let in_column: Vec<&Appointment> = appointments
                .iter()
                .filter(|a| in_range(*a, day, timetiler_core::dates::end_of_day(day)))
                .collect();
            let styled = styled_appointments(
                in_column,
                &metrics,
                config.minimum_start_difference(),
                algorithm,
            );
            println!("{}", serde_json::to_string_pretty(&styled)?);
            Ok(())
        }
    }
}

fn print_grid(
    appointments: &[Appointment],
    range: &DayRange,
    config: &ViewConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let localizer = ChronoLocalizer::new();
    let view = TimeGridView::build(appointments, range, chrono::Utc::now(), config, &localizer)?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
