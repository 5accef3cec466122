//! View adapters: pure data transforms behind the rendered views.
//!
//! Each adapter reduces appointments plus a display range to renderable
//! row/column data; nothing here measures, mutates, or retains state across
//! calls. Hosts map the results onto whatever widget tree they use.

mod agenda;
mod day;
mod time_grid;
mod week;

pub use agenda::{agenda_navigate, AgendaDay, AgendaRow, AgendaView};
pub use day::{day_navigate, day_range, day_title};
pub use time_grid::{AllDayRow, DayColumn, HeaderCell, TimeGridView};
pub use week::{week_navigate, week_range, week_title, work_week_range};

/// Navigation actions shared by the view adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateAction {
    Previous,
    Next,
    Today,
}
