use crate::model::{
    AttendanceRecord, AttendanceStatus, DashboardSummary, Employee, EmployeeAttendanceSummary,
    NewAttendance, NewEmployee,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small human-resources service: an employee roster and daily attendance marking.

### Key Features
- **Employee Management**
  - Add, list and delete employees (deleting also removes their attendance)
- **Attendance Tracking**
  - Mark an employee Present or Absent for a day, view their history over a date range
- **Dashboard**
  - Totals and attendance rate for a date range, and a roster with per-employee counts

### Date ranges
`start_date` and `end_date` are inclusive calendar dates (`YYYY-MM-DD`); either may be omitted.
Every dashboard figure and list is computed from the same filtered set of records, so the
numbers on one screen always add up.

### Errors
Failures are returned as `{"detail": "..."}` with status 400 (invalid input) or 404 (unknown employee).
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_attendance,

        crate::api::dashboard::get_summary,
        crate::api::dashboard::get_employees_with_attendance
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            AttendanceRecord,
            AttendanceStatus,
            NewAttendance,
            DashboardSummary,
            EmployeeAttendanceSummary
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance tracking APIs"),
        (name = "Dashboard", description = "Attendance summaries over a date range"),
    )
)]
pub struct ApiDoc;
