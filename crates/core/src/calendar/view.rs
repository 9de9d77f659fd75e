//! Render-ready month view

use chrono::NaiveDate;
use creatorhub_domain::constants::MONTHS_PER_YEAR;
use creatorhub_domain::{CalendarViewState, DayCell, Marker, Platform, StreamEvent};
use serde::Serialize;

use super::classify::StreamSchedule;
use super::grid::{build_month_grid, normalize_month};
use super::grouping::group_events_by_date;

/// One non-padding cell with everything the renderer draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub day: DayCell,
    pub marker: Marker,
    pub is_stream_day: bool,
    /// First recorded YouTube stream that day.
    pub youtube_url: Option<String>,
    /// First recorded Twitch stream that day.
    pub twitch_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub month: CalendarViewState,
    /// Leading `None` padding followed by one cell per day.
    pub cells: Vec<Option<CalendarCell>>,
}

impl MonthView {
    pub fn days(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells.iter().flatten()
    }

    pub fn stream_count(&self) -> usize {
        self.days().filter(|c| c.marker.has_stream()).count()
    }
}

/// Build the grid for a month and annotate every day with its marker and
/// stream links.
pub fn annotate_month(
    year: i32,
    month: i32,
    events: &[StreamEvent],
    today: NaiveDate,
    schedule: StreamSchedule,
) -> MonthView {
    let Some((year, month0)) = normalize_month(year, month) else {
        let month0 = month.rem_euclid(MONTHS_PER_YEAR as i32) as u32;
        return MonthView { month: CalendarViewState::new(year, month0), cells: Vec::new() };
    };
    let by_date = group_events_by_date(events);

    let cells = build_month_grid(year, month0 as i32, today)
        .into_iter()
        .map(|slot| {
            slot.map(|day| {
                let summary = by_date.get(&day.iso_date());
                let url_for = |platform: Platform| {
                    summary.and_then(|s| s.first_for(platform)).map(|e| e.url.clone())
                };
                CalendarCell {
                    marker: schedule.classify(&day, summary),
                    is_stream_day: schedule.is_stream_day(&day),
                    youtube_url: url_for(Platform::Youtube),
                    twitch_url: url_for(Platform::Twitch),
                    day,
                }
            })
        })
        .collect();

    MonthView { month: CalendarViewState::new(year, month0), cells }
}
