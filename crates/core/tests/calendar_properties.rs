//! Calendar properties across many months.

use chrono::{Datelike, NaiveDate};
use creatorhub_core::calendar::{annotate_month, build_month_grid, days_in_month, group_events_by_date};
use creatorhub_core::{classify_cell, StreamSchedule};
use creatorhub_domain::{Marker, Platform, StreamEvent};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn grid_length_is_padding_plus_days() {
    for year in [1999, 2000, 2023, 2024, 2100] {
        for month in 0..12 {
            let grid = build_month_grid(year, month, today());
            let first = NaiveDate::from_ymd_opt(year, month as u32 + 1, 1).unwrap();
            let leading = (first.weekday().num_days_from_sunday() + 6) % 7;

            assert_eq!(grid.len() as u32, leading + days_in_month(year, month as u32), "{year}-{month}");
            assert_eq!(grid.iter().take_while(|c| c.is_none()).count() as u32, leading);
            assert!(grid.last().unwrap().is_some(), "no trailing padding");
        }
    }
}

#[test]
fn february_2024_example() {
    let grid = build_month_grid(2024, 1, today());
    assert_eq!(grid.iter().filter(|c| c.is_none()).count(), 3);
    assert_eq!(grid.len(), 32);
    assert_eq!(grid[31].unwrap().day_number, 29);
}

#[test]
fn shared_date_is_both() {
    let events = vec![
        StreamEvent::new("2024-02-02", Platform::Youtube, "yt"),
        StreamEvent::new("2024-02-02", Platform::Twitch, "tw"),
    ];
    let grouped = group_events_by_date(&events);
    let cell = build_month_grid(2024, 1, today()).into_iter().flatten().find(|c| c.day_number == 2).unwrap();

    assert_eq!(grouped.len(), 1);
    assert_eq!(classify_cell(&cell, grouped.get(&cell.iso_date())), Marker::Both);
}

#[test]
fn friday_2024_02_09_is_missed_in_the_past_and_planned_in_the_future() {
    let find = |today: NaiveDate| {
        build_month_grid(2024, 1, today).into_iter().flatten().find(|c| c.day_number == 9).unwrap()
    };
    assert_eq!(classify_cell(&find(today()), None), Marker::Missed);
    assert_eq!(classify_cell(&find(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), None), Marker::Planned);
}

#[test]
fn markers_only_on_schedule_day_without_events() {
    let view = annotate_month(2024, 4, &[], today(), StreamSchedule::default());
    for cell in view.days() {
        match cell.marker {
            Marker::Missed => assert!(cell.day.weekday_index == 4 && cell.day.is_past),
            Marker::Planned => assert!(cell.day.weekday_index == 4 && !cell.day.is_past),
            Marker::None => assert_ne!(cell.day.weekday_index, 4),
            other => panic!("unexpected marker {other:?}"),
        }
    }
}
