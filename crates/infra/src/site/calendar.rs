//! Stream calendar widget and month pages

use creatorhub_core::{CalendarCell, MonthStep, MonthView};
use creatorhub_domain::{CalendarViewState, Marker};
use maud::{html, Markup};

use super::layout::{page, PageContext};

/// Months that have a generated page, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthRange {
    pub first: CalendarViewState,
    pub last: CalendarViewState,
}

impl MonthRange {
    pub fn contains(&self, month: CalendarViewState) -> bool {
        self.first <= month && month <= self.last
    }
}

pub(crate) fn month_page_path(month: CalendarViewState) -> String {
    format!("calendar/{}.html", month.slug())
}

/// CSS classes of a day cell.
pub(crate) fn cell_class(cell: &CalendarCell) -> String {
    let mut class = String::from("cell");
    if cell.is_stream_day {
        class.push_str(" fri");
    }
    if cell.day.is_today {
        class.push_str(" today");
    }
    if cell.marker == Marker::Missed {
        class.push_str(" passed no-stream");
    }
    class
}

fn nav_link(ctx: &PageContext<'_>, view: &MonthView, range: MonthRange, step: MonthStep) -> Markup {
    let target = step.apply(view.month);
    let (class, icon, label) = match step {
        MonthStep::Previous => ("cal-prev", "chevron_left", ctx.t("calendarPrev")),
        MonthStep::Next => ("cal-next", "chevron_right", ctx.t("calendarNext")),
    };

    html! {
        @if range.contains(target) {
            a class=(class) href=(ctx.href(&month_page_path(target))) title=(label) aria-label=(label) {
                span class="material-symbols-outlined" { (icon) }
            }
        } @else {
            span class={ (class) " disabled" } aria-hidden="true" {
                span class="material-symbols-outlined" { (icon) }
            }
        }
    }
}

fn day_cell(cell: &CalendarCell) -> Markup {
    html! {
        div class=(cell_class(cell)) data-date=(cell.day.iso_date()) {
            span class="num" { (cell.day.day_number) }
            @if let Some(dot) = cell.marker.dot_class() {
                span class={ "dot " (dot) } {}
            }
            @if cell.youtube_url.is_some() || cell.twitch_url.is_some() {
                div class="chips" {
                    @if let Some(url) = &cell.youtube_url {
                        a href=(url) target="_blank" rel="noopener" { "YT" }
                    }
                    @if cell.youtube_url.is_some() && cell.twitch_url.is_some() {
                        " · "
                    }
                    @if let Some(url) = &cell.twitch_url {
                        a href=(url) target="_blank" rel="noopener" { "TW" }
                    }
                }
            }
        }
    }
}

fn legend(ctx: &PageContext<'_>) -> Markup {
    html! {
        ul class="cal-legend" {
            @for (dot, key) in [("yt", "legendYoutube"), ("tw", "legendTwitch"), ("both", "legendBoth"), ("planned", "legendPlanned")] {
                li { span class={ "dot " (dot) } {} " " (ctx.t(key)) }
            }
            li class="no-stream" { (ctx.t("legendMissed")) }
        }
    }
}

/// Month grid with header navigation and legend.
pub(crate) fn month_widget(ctx: &PageContext<'_>, view: &MonthView, range: MonthRange) -> Markup {
    let locale = ctx.locale();
    let month_name = ctx.translations.month_name(locale, view.month.month);

    html! {
        div class="calendar card" data-month=(view.month.slug()) {
            div class="cal-head" {
                (nav_link(ctx, view, range, MonthStep::Previous))
                span class="cal-label" { (month_name) " " (view.month.year) }
                (nav_link(ctx, view, range, MonthStep::Next))
            }
            div class="cal-grid" {
                @for name in ctx.translations.weekday_names(locale) {
                    div class="wd" { (name) }
                }
                @for slot in &view.cells {
                    @match slot {
                        Some(cell) => { (day_cell(cell)) }
                        None => { div {} }
                    }
                }
            }
            (legend(ctx))
        }
    }
}

/// Standalone page for one month.
pub(crate) fn month_page(ctx: &PageContext<'_>, view: &MonthView, range: MonthRange) -> Markup {
    let title = format!(
        "{} {}",
        ctx.translations.month_name(ctx.locale(), view.month.month),
        view.month.year
    );

    page(
        ctx,
        &title,
        html! {
            section class="calendar-page" {
                a class="back-link" href=(ctx.href("index.html")) { (ctx.t("backToMainText")) }
                (month_widget(ctx, view, range))
            }
        },
    )
}
