//! Cell classification

use creatorhub_domain::constants::DEFAULT_STREAM_WEEKDAY_INDEX;
use creatorhub_domain::{DateEventSummary, DayCell, Marker};

/// Weekly stream schedule used for the planned/missed heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSchedule {
    /// 0 = Monday ... 6 = Sunday
    pub weekday: u32,
}

impl Default for StreamSchedule {
    fn default() -> Self {
        Self { weekday: DEFAULT_STREAM_WEEKDAY_INDEX }
    }
}

impl StreamSchedule {
    pub fn new(weekday: u32) -> Self {
        Self { weekday }
    }

    pub fn is_stream_day(&self, cell: &DayCell) -> bool {
        cell.weekday_index == self.weekday
    }

    /// Recorded streams always win over the schedule heuristic.
    pub fn classify(&self, cell: &DayCell, summary: Option<&DateEventSummary>) -> Marker {
        match summary {
            Some(s) if s.has_youtube && s.has_twitch => Marker::Both,
            Some(s) if s.has_youtube => Marker::YouTube,
            Some(s) if s.has_twitch => Marker::Twitch,
            // Only unknown platforms that day; behaves like a recorded day with no dot.
            Some(_) => Marker::None,
            None if self.is_stream_day(cell) && cell.is_past => Marker::Missed,
            None if self.is_stream_day(cell) => Marker::Planned,
            None => Marker::None,
        }
    }
}

/// Classify against the default Friday schedule.
pub fn classify_cell(cell: &DayCell, summary: Option<&DateEventSummary>) -> Marker {
    StreamSchedule::default().classify(cell, summary)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use creatorhub_domain::{Platform, StreamEvent};

    use super::*;

    fn cell(date: &str, today: &str) -> DayCell {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let today = NaiveDate::parse_from_str(today, "%Y-%m-%d").unwrap();
        DayCell {
            date,
            day_number: date.day(),
            is_today: date == today,
            is_past: date < today,
            weekday_index: date.weekday().num_days_from_monday(),
        }
    }

    fn summary(platforms: &[Platform]) -> DateEventSummary {
        let mut s = DateEventSummary::default();
        for p in platforms {
            s.push(StreamEvent::new("2024-02-09", *p, ""));
        }
        s
    }

    #[test]
    fn past_friday_without_stream_is_missed() {
        assert_eq!(classify_cell(&cell("2024-02-09", "2024-02-20"), None), Marker::Missed);
    }

    #[test]
    fn future_or_current_friday_is_planned() {
        assert_eq!(classify_cell(&cell("2024-02-09", "2024-02-01"), None), Marker::Planned);
        assert_eq!(classify_cell(&cell("2024-02-09", "2024-02-09"), None), Marker::Planned);
    }

    #[test]
    fn other_weekdays_have_no_marker() {
        assert_eq!(classify_cell(&cell("2024-02-08", "2024-02-20"), None), Marker::None);
        assert_eq!(classify_cell(&cell("2024-02-10", "2024-02-01"), None), Marker::None);
    }

    #[test]
    fn events_take_priority_over_schedule() {
        let past_friday = cell("2024-02-09", "2024-02-20");
        let both = summary(&[Platform::Youtube, Platform::Twitch]);
        assert_eq!(classify_cell(&past_friday, Some(&both)), Marker::Both);
        assert_eq!(classify_cell(&past_friday, Some(&summary(&[Platform::Twitch]))), Marker::Twitch);
        assert_eq!(
            classify_cell(&cell("2024-02-06", "2024-02-20"), Some(&summary(&[Platform::Youtube]))),
            Marker::YouTube
        );
    }

    #[test]
    fn unknown_platform_only_gives_no_marker() {
        let friday = cell("2024-02-09", "2024-02-20");
        assert_eq!(classify_cell(&friday, Some(&summary(&[Platform::Other]))), Marker::None);
    }

    #[test]
    fn schedule_weekday_is_configurable() {
        let saturday = StreamSchedule::new(5);
        assert_eq!(saturday.classify(&cell("2024-02-10", "2024-02-20"), None), Marker::Missed);
        assert_eq!(saturday.classify(&cell("2024-02-09", "2024-02-20"), None), Marker::None);
    }
}
