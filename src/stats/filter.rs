use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::model::AttendanceRecord;

/// Inclusive calendar-day window. A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRange {
    /// Filter from date (YYYY-MM-DD), inclusive
    #[serde(rename = "start_date")]
    #[param(value_type = Option<String>, format = "date", example = "2026-02-10")]
    pub start: Option<NaiveDate>,

    /// Filter to date (YYYY-MM-DD), inclusive
    #[serde(rename = "end_date")]
    #[param(value_type = Option<String>, format = "date", example = "2026-02-15")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// True when both bounds are set and start is after end. Such a range matches nothing.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s > e)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start.is_none_or(|start| day >= start) && self.end.is_none_or(|end| day <= end)
    }
}

pub fn in_range(record: &AttendanceRecord, range: &DateRange) -> bool {
    range.contains(record.day())
}

/// Keeps the records whose day falls in `range`, preserving input order.
pub fn filter_records<'a, I>(records: I, range: &DateRange) -> Vec<&'a AttendanceRecord>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records.into_iter().filter(|r| in_range(r, range)).collect()
}
