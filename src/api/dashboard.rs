use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::{
    db::Store,
    error::ApiError,
    model::AttendanceStatus,
    stats::{Aggregation, DateRange},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeAttendanceQuery {
    /// Only employees with at least one record of this status in range
    #[param(value_type = Option<String>, example = "Present")]
    pub status: Option<AttendanceStatus>,
    /// Filter from date (YYYY-MM-DD), inclusive
    #[param(value_type = Option<String>, format = "date", example = "2026-02-10")]
    pub start_date: Option<NaiveDate>,
    /// Filter to date (YYYY-MM-DD), inclusive
    #[param(value_type = Option<String>, format = "date", example = "2026-02-15")]
    pub end_date: Option<NaiveDate>,
}

impl EmployeeAttendanceQuery {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Dashboard summary
///
/// `total_employees` counts the whole roster; every other figure covers the date range only.
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    params(DateRange),
    responses(
        (status = 200, description = "Attendance totals for the range", body = crate::model::DashboardSummary),
        (status = 400, description = "Malformed date"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn get_summary(
    store: web::Data<Store>,
    range: web::Query<DateRange>,
) -> Result<HttpResponse, ApiError> {
    let employees = store.list_employees().await?;
    let records = store.list_attendance(None).await?;

    if range.is_inverted() {
        debug!(?range, "Start date is after end date, nothing will match");
    }

    let summary = Aggregation::compute(&employees, &records, &range).summary();
    Ok(HttpResponse::Ok().json(summary))
}

/// Employees with attendance counts
#[utoipa::path(
    get,
    path = "/api/dashboard/employees",
    params(EmployeeAttendanceQuery),
    responses(
        (status = 200, description = "Roster rows in employee order", body = Vec<crate::model::EmployeeAttendanceSummary>),
        (status = 400, description = "Malformed date or unknown status"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn get_employees_with_attendance(
    store: web::Data<Store>,
    query: web::Query<EmployeeAttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let employees = store.list_employees().await?;
    let records = store.list_attendance(None).await?;

    let rows = Aggregation::compute(&employees, &records, &query.range()).per_employee(query.status);
    Ok(HttpResponse::Ok().json(rows))
}
