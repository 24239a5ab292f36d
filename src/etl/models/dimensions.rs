use chrono::NaiveDateTime;

use serde::Serialize;

/// One row of a categorical dimension (status, currency, or purpose)
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CodeRow {
    #[serde(rename = "Code")]
    pub code: String,

    #[serde(rename = "Description")]
    pub description: String,
}

/// One hour of the time dimension's complete hourly calendar
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TimeRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: NaiveDateTime,

    #[serde(rename = "Year")]
    pub year: i32,

    #[serde(rename = "Month")]
    pub month: u32,

    #[serde(rename = "Day")]
    pub day: u32,

    #[serde(rename = "Hour")]
    pub hour: u32,

    #[serde(rename = "Minute")]
    pub minute: u32,

    #[serde(rename = "WeekOfYear")]
    pub week_of_year: u32,

    #[serde(rename = "WeekdayName")]
    pub weekday_name: String,
}
