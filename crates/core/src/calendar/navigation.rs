//! Month navigation

use creatorhub_domain::CalendarViewState;

/// A navigation command from the calendar header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Previous,
    Next,
}

impl MonthStep {
    pub fn apply(self, state: CalendarViewState) -> CalendarViewState {
        match self {
            Self::Previous => state.previous(),
            Self::Next => state.next(),
        }
    }
}

/// Every month from `start` through `end`, inclusive. Empty if `start` is
/// after `end`.
pub fn months_between(
    start: CalendarViewState,
    end: CalendarViewState,
) -> impl Iterator<Item = CalendarViewState> {
    std::iter::successors(Some(start), |m| Some(m.next())).take_while(move |m| *m <= end)
}
