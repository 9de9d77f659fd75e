//! History grouping

use std::collections::BTreeMap;

use creatorhub_domain::{DateEventSummary, StreamEvent};

/// Fold stream events into one summary per exact date string.
///
/// Items keep input order and are not de-duplicated. Events with an unknown
/// platform land in `items` without setting either flag.
pub fn group_events_by_date(events: &[StreamEvent]) -> BTreeMap<String, DateEventSummary> {
    events.iter().fold(BTreeMap::new(), |mut by_date, event| {
        by_date.entry(event.date.clone()).or_default().push(event.clone());
        by_date
    })
}
