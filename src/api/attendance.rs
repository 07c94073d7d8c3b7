use actix_web::{HttpResponse, web};
use std::cmp::Reverse;
use tracing::info;

use crate::{
    db::Store,
    error::ApiError,
    model::{AttendanceRecord, NewAttendance},
    stats::{DateRange, filter_records},
};

/// Mark attendance
///
/// Marking the same day again adds another record; earlier ones are kept.
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = NewAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceRecord),
        (status = 400, description = "Malformed date or status", body = Object, example = json!({
            "detail": "invalid date 'yesterday', expected YYYY-MM-DD or an ISO 8601 timestamp"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with id 1 not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    store: web::Data<Store>,
    payload: web::Json<NewAttendance>,
) -> Result<HttpResponse, ApiError> {
    let new = payload.into_inner();

    if store.get_employee(new.employee_id).await?.is_none() {
        return Err(ApiError::employee_not_found(new.employee_id));
    }

    let record = store.mark_attendance(&new).await?;

    info!(
        attendance_id = record.id,
        employee_id = record.employee_id,
        status = %record.status,
        "Attendance marked"
    );
    Ok(HttpResponse::Created().json(record))
}

/// Attendance history for one employee
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        DateRange
    ),
    responses(
        (status = 200, description = "Records in range, newest first", body = Vec<AttendanceRecord>),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with id 1 not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    store: web::Data<Store>,
    path: web::Path<u64>,
    range: web::Query<DateRange>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    if store.get_employee(employee_id).await?.is_none() {
        return Err(ApiError::employee_not_found(employee_id));
    }

    let records = store.list_attendance(Some(employee_id)).await?;
    Ok(HttpResponse::Ok().json(history(&records, &range)))
}

/// In-range records ordered newest day first, then newest marking first.
pub fn history(records: &[AttendanceRecord], range: &DateRange) -> Vec<AttendanceRecord> {
    let mut in_range: Vec<AttendanceRecord> =
        filter_records(records, range).into_iter().cloned().collect();
    in_range.sort_by_key(|r| Reverse((r.date, r.id)));
    in_range
}
