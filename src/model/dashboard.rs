use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[schema(
    example = json!({
        "total_employees": 2,
        "total_attendance_records": 5,
        "present_count": 3,
        "absent_count": 2,
        "attendance_rate": 60.0
    })
)]
pub struct DashboardSummary {
    /// Every employee on the roster; not affected by the date range.
    pub total_employees: u64,
    pub total_attendance_records: u64,
    pub present_count: u64,
    pub absent_count: u64,
    /// Percentage of in-range records marked present, one decimal place.
    pub attendance_rate: f64,
}

/// One roster row with attendance counts for the active date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "present_count": 2,
        "absent_count": 1,
        "total_records": 3
    })
)]
pub struct EmployeeAttendanceSummary {
    #[schema(example = 1)]
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub present_count: u64,
    pub absent_count: u64,
    pub total_records: u64,
}
