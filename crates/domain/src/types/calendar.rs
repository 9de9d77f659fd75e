//! Stream calendar types
//!
//! Derived values only: every render recomputes them from the stream history
//! and the current date. Nothing here is persisted.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::stream::{Platform, StreamEvent};
use crate::constants::MONTHS_PER_YEAR;

/// One day of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// 1..=31
    pub day_number: u32,
    pub is_today: bool,
    /// Strictly before today.
    pub is_past: bool,
    /// 0 = Monday ... 6 = Sunday
    pub weekday_index: u32,
}

impl DayCell {
    /// `YYYY-MM-DD`, the key used by the stream history.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// All stream events sharing one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DateEventSummary {
    pub has_youtube: bool,
    pub has_twitch: bool,
    /// Input order, no de-duplication.
    pub items: Vec<StreamEvent>,
}

impl DateEventSummary {
    /// Fold one more event into the summary.
    pub fn push(&mut self, event: StreamEvent) {
        match event.platform {
            Platform::Youtube => self.has_youtube = true,
            Platform::Twitch => self.has_twitch = true,
            Platform::Other => {}
        }
        self.items.push(event);
    }

    /// First event recorded for the platform; the renderer links only this one.
    pub fn first_for(&self, platform: Platform) -> Option<&StreamEvent> {
        self.items.iter().find(|e| e.platform == platform)
    }
}

/// Classification of a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    None,
    YouTube,
    Twitch,
    Both,
    /// Stream day on or after today with no recorded stream.
    Planned,
    /// Stream day before today with no recorded stream.
    Missed,
}

impl Marker {
    /// CSS class of the dot drawn under the day number, if any.
    pub fn dot_class(&self) -> Option<&'static str> {
        match self {
            Self::YouTube => Some("yt"),
            Self::Twitch => Some("tw"),
            Self::Both => Some("both"),
            Self::Planned => Some("planned"),
            Self::None | Self::Missed => None,
        }
    }

    pub fn has_stream(&self) -> bool {
        matches!(self, Self::YouTube | Self::Twitch | Self::Both)
    }
}

/// The month currently shown by the calendar widget.
///
/// `month` is zero-based (0 = January). Navigation is unbounded in both
/// directions and always keeps `month` in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarViewState {
    pub year: i32,
    pub month: u32,
}

impl CalendarViewState {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month0() }
    }

    /// Month of the current local date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn next(self) -> Self {
        if self.month + 1 >= MONTHS_PER_YEAR {
            Self { year: self.year + 1, month: 0 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 0 {
            Self { year: self.year - 1, month: MONTHS_PER_YEAR - 1 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// `YYYY-MM`, used for calendar page names.
    pub fn slug(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month + 1)
    }
}
