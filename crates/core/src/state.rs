//! Explicit application state
//!
//! The language, theme and displayed calendar month. Every change goes through
//! a named transition so rendering is a pure function of this value.

use creatorhub_domain::{CalendarViewState, Locale, Theme};
use serde::Serialize;

use crate::calendar::MonthStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub locale: Locale,
    pub theme: Theme,
    pub calendar: CalendarViewState,
}

impl AppState {
    pub fn new(locale: Locale, theme: Theme, calendar: CalendarViewState) -> Self {
        Self { locale, theme, calendar }
    }

    /// Defaults with the calendar on the current local month.
    pub fn initial(locale: Locale, theme: Theme) -> Self {
        Self::new(locale, theme, CalendarViewState::current())
    }

    pub fn set_language(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle_language(&mut self) {
        self.locale = self.locale.toggled();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn navigate_month(&mut self, step: MonthStep) {
        self.calendar = step.apply(self.calendar);
    }

    /// Copy of this state in another locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.set_language(locale);
        self
    }
}
