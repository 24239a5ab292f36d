use crate::models::{CodeRow, PaymentFact, TimeRow};

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

/// Derives a categorical dimension: the distinct non-null values of one fact
/// field, sorted ascending, each paired with a description from a static
/// mapping and falling back to the raw code when unmapped
pub fn code_dimension(
    facts: &[PaymentFact],
    select: for<'a> fn(&'a PaymentFact) -> Option<&'a str>,
    describe: fn(&str) -> Option<&'static str>,
) -> Vec<CodeRow> {
    let mut codes: Vec<String> = facts
        .iter()
        .filter_map(|fact| select(fact).map(str::to_string))
        .collect();

    codes.sort();
    codes.dedup();

    codes
        .into_iter()
        .map(|code| {
            let description = describe(&code).unwrap_or(&code).to_string();
            CodeRow { code, description }
        })
        .collect()
}

/// Derives the hourly time grid spanning every observed initiation and
/// settlement timestamp: one row per hour from the floor of the global
/// minimum to the ceiling of the global maximum, inclusive. A complete
/// calendar, not just the hours that appear in the data, so downstream
/// time-series joins have no gaps.
pub fn time_dimension(facts: &[PaymentFact]) -> Vec<TimeRow> {
    let timestamps = facts
        .iter()
        .flat_map(|fact| [fact.payment_date, fact.settlement_date])
        .flatten();

    let mut min: Option<NaiveDateTime> = None;
    let mut max: Option<NaiveDateTime> = None;
    for timestamp in timestamps {
        min = Some(min.map_or(timestamp, |current| current.min(timestamp)));
        max = Some(max.map_or(timestamp, |current| current.max(timestamp)));
    }

    let (Some(min), Some(max)) = (min, max) else {
        return vec![];
    };

    let start = floor_to_hour(min);
    let end = ceil_to_hour(max);

    let mut rows = vec![];
    let mut current = start;
    while current <= end {
        rows.push(time_row(current));
        current += Duration::hours(1);
    }

    return rows;
}

fn time_row(timestamp: NaiveDateTime) -> TimeRow {
    TimeRow {
        timestamp,
        year: timestamp.year(),
        month: timestamp.month(),
        day: timestamp.day(),
        hour: timestamp.hour(),
        minute: timestamp.minute(),
        week_of_year: timestamp.iso_week().week(),
        weekday_name: timestamp.format("%A").to_string(),
    }
}

fn floor_to_hour(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp
        .date()
        .and_hms_opt(timestamp.hour(), 0, 0)
        .unwrap_or(timestamp)
}

fn ceil_to_hour(timestamp: NaiveDateTime) -> NaiveDateTime {
    let floored = floor_to_hour(timestamp);

    if floored == timestamp {
        return timestamp;
    }

    floored + Duration::hours(1)
}
