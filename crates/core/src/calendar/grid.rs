//! Month grid builder

use chrono::{Datelike, Duration, Local, NaiveDate};
use creatorhub_domain::constants::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use creatorhub_domain::DayCell;

/// Resolve an arbitrary zero-based month against its year.
///
/// Month 12 is January of the next year, month -1 is December of the
/// previous one, and so on in both directions. `None` when the year would
/// overflow `i32`.
pub fn normalize_month(year: i32, month: i32) -> Option<(i32, u32)> {
    let per_year = MONTHS_PER_YEAR as i32;
    let year = year.checked_add(month.div_euclid(per_year))?;
    Some((year, month.rem_euclid(per_year) as u32))
}

/// Number of days in a zero-based month, leap years included.
///
/// 0 for months outside `0..12` and years chrono cannot represent.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    first_of_month(year, month0)
        .and_then(|first| first_of_month_after(year, month0).map(|next| (next - first).num_days() as u32))
        .unwrap_or(0)
}

/// Build the cells for one month.
///
/// The result starts with one `None` per weekday before the 1st (Monday
/// first), followed by exactly one cell per day. No trailing padding is
/// added; the layout closes the last row.
///
/// `month` is zero-based and may lie outside `0..12`, see [`normalize_month`].
/// Years outside the supported calendar range yield an empty grid.
pub fn build_month_grid(year: i32, month: i32, today: NaiveDate) -> Vec<Option<DayCell>> {
    let Some((year, month0)) = normalize_month(year, month) else {
        return Vec::new();
    };
    let Some(first) = first_of_month(year, month0) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(year, month0);

    let mut cells: Vec<Option<DayCell>> = Vec::with_capacity(leading + days as usize);
    cells.resize(leading, None);
    cells.extend((0..days).map(|offset| {
        let date = first + Duration::days(i64::from(offset));
        Some(DayCell {
            date,
            day_number: offset + 1,
            is_today: date == today,
            is_past: date < today,
            weekday_index: date.weekday().num_days_from_monday() % DAYS_PER_WEEK,
        })
    }));
    cells
}

/// [`build_month_grid`] against the current local date.
pub fn build_month_grid_now(year: i32, month: i32) -> Vec<Option<DayCell>> {
    build_month_grid(year, month, Local::now().date_naive())
}

fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, 1)
}

fn first_of_month_after(year: i32, month0: u32) -> Option<NaiveDate> {
    let next = i32::try_from(month0).ok()?.checked_add(1)?;
    let (next_year, next_month0) = normalize_month(year, next)?;
    first_of_month(next_year, next_month0)
}
