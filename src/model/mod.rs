pub mod attendance;
pub mod dashboard;
pub mod employee;

pub use attendance::{AttendanceRecord, AttendanceStatus, NewAttendance};
pub use dashboard::{DashboardSummary, EmployeeAttendanceSummary};
pub use employee::{Employee, NewEmployee};
