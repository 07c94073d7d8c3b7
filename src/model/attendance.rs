use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Outcome recorded for one employee on one day.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": 1,
        "date": "2026-02-10T09:00:00",
        "status": "Present",
        "created_at": "2026-02-10T09:00:05Z"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub employee_id: u64,

    /// Wall-clock timestamp of the marking; only its calendar day matters for filtering.
    #[schema(example = "2026-02-10T09:00:00", value_type = String, format = "date-time")]
    pub date: NaiveDateTime,

    pub status: AttendanceStatus,

    #[schema(example = "2026-02-10T09:00:05Z", value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}

impl AttendanceRecord {
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewAttendance {
    #[schema(example = 1)]
    pub employee_id: u64,

    #[serde(deserialize_with = "deserialize_marking_date")]
    #[schema(example = "2026-02-10T09:00:00.000Z", value_type = String, format = "date-time")]
    pub date: NaiveDateTime,

    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

/// Parses the timestamp of an attendance marking.
///
/// Offsets are dropped rather than converted, so `2026-02-10T09:00:00+05:00` is
/// stored as `2026-02-10T09:00:00`. A bare date is taken as midnight.
pub fn parse_marking_date(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.and_time(chrono::NaiveTime::MIN))
        .map_err(|_| format!("invalid date '{raw}', expected YYYY-MM-DD or an ISO 8601 timestamp"))
}

fn deserialize_marking_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_marking_date(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn offset_is_dropped_not_converted() {
        let parsed = parse_marking_date("2026-02-10T09:00:00+05:00").unwrap();
        assert_eq!(parsed, at(2026, 2, 10, 9, 0));

        let parsed = parse_marking_date("2026-02-10T09:00:00.000Z").unwrap();
        assert_eq!(parsed, at(2026, 2, 10, 9, 0));
    }

    #[test]
    fn naive_and_bare_dates_are_accepted() {
        assert_eq!(
            parse_marking_date("2026-02-10T17:30:00").unwrap(),
            at(2026, 2, 10, 17, 30)
        );
        assert_eq!(
            parse_marking_date("2026-02-10 17:30:00").unwrap(),
            at(2026, 2, 10, 17, 30)
        );
        assert_eq!(parse_marking_date("2026-02-10").unwrap(), at(2026, 2, 10, 0, 0));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse_marking_date("yesterday").unwrap_err();
        assert!(err.contains("yesterday"));
        assert!(parse_marking_date("2026-13-01").is_err());
    }

    #[test]
    fn status_uses_capitalized_wire_names() {
        assert_eq!(AttendanceStatus::Present.to_string(), "Present");
        assert_eq!(AttendanceStatus::Absent.as_ref(), "Absent");
        assert_eq!(
            AttendanceStatus::from_str("Absent").unwrap(),
            AttendanceStatus::Absent
        );
        assert!(AttendanceStatus::from_str("present").is_err());
        assert_eq!(
            serde_json::to_value(AttendanceStatus::Present).unwrap(),
            serde_json::json!("Present")
        );
    }

    #[test]
    fn new_attendance_deserializes_browser_timestamp() {
        let body: NewAttendance = serde_json::from_value(serde_json::json!({
            "employee_id": 3,
            "date": "2026-02-01T09:00:00.000Z",
            "status": "Absent"
        }))
        .unwrap();
        assert_eq!(body.employee_id, 3);
        assert_eq!(body.date, at(2026, 2, 1, 9, 0));
        assert_eq!(body.status, AttendanceStatus::Absent);
    }
}
