use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::catalog::{CraftEvent, EventCategory};

/// Events of one category, or all of them.
pub fn filter_events(
    events: &[CraftEvent],
    category: Option<EventCategory>,
) -> Vec<&CraftEvent> {
    events
        .iter()
        .filter(|event| category.map_or(true, |c| event.category == c))
        .collect()
}

/// Events keyed by the `YYYY-MM` month they start in.
pub fn group_by_month<'a, I>(events: I) -> BTreeMap<String, Vec<&'a CraftEvent>>
where
    I: IntoIterator<Item = &'a CraftEvent>,
{
    let mut by_month: BTreeMap<String, Vec<&CraftEvent>> = BTreeMap::new();
    for event in events {
        by_month
            .entry(event.start_date.format("%Y-%m").to_string())
            .or_default()
            .push(event);
    }
    by_month
}

/// `2026-04` as `2026年4月`; anything else is returned unchanged.
pub fn format_month(year_month: &str) -> String {
    let parsed = year_month
        .split_once('-')
        .and_then(|(year, month)| {
            Some((year.parse::<i32>().ok()?, month.parse::<u32>().ok()?))
        });

    match parsed {
        Some((year, month)) => format!("{}年{}月", year, month),
        None => year_month.to_owned(),
    }
}

/// Display range of an event, omitting the repeated month.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        format!("{}月{}日", start.month(), start.day())
    } else if start.month() == end.month() {
        format!("{}月{}日〜{}日", start.month(), start.day(), end.day())
    } else {
        format!(
            "{}月{}日〜{}月{}日",
            start.month(),
            start.day(),
            end.month(),
            end.day()
        )
    }
}
