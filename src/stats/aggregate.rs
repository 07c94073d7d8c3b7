use std::collections::HashMap;

use tracing::debug;

use super::filter::{DateRange, filter_records};
use crate::model::{
    AttendanceRecord, AttendanceStatus, DashboardSummary, Employee, EmployeeAttendanceSummary,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub present: u64,
    pub absent: u64,
}

impl StatusCounts {
    fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
        }
    }

    pub fn count(&self, status: AttendanceStatus) -> u64 {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
        }
    }

    pub fn total(&self) -> u64 {
        self.present + self.absent
    }
}

/// Per-employee counts over one filtered snapshot.
///
/// The dashboard tiles, the status-scoped lists and the roster table are all
/// projections of a single `Aggregation`, which keeps their numbers consistent.
/// Records owned by an id missing from `employees` are dropped during grouping.
#[derive(Debug)]
pub struct Aggregation<'a> {
    employees: &'a [Employee],
    counts: HashMap<u64, StatusCounts>,
}

impl<'a> Aggregation<'a> {
    pub fn compute(
        employees: &'a [Employee],
        records: &[AttendanceRecord],
        range: &DateRange,
    ) -> Self {
        let mut counts: HashMap<u64, StatusCounts> =
            employees.iter().map(|e| (e.id, StatusCounts::default())).collect();

        let mut orphaned = 0usize;
        for record in filter_records(records, range) {
            match counts.get_mut(&record.employee_id) {
                Some(slot) => slot.record(record.status),
                None => orphaned += 1,
            }
        }

        if orphaned > 0 {
            debug!(orphaned, "Skipped attendance records of unknown employees");
        }

        Self { employees, counts }
    }

    pub fn counts_for(&self, employee_id: u64) -> StatusCounts {
        self.counts.get(&employee_id).copied().unwrap_or_default()
    }

    pub fn summary(&self) -> DashboardSummary {
        let totals = self
            .counts
            .values()
            .fold(StatusCounts::default(), |acc, c| StatusCounts {
                present: acc.present + c.present,
                absent: acc.absent + c.absent,
            });

        DashboardSummary {
            total_employees: self.employees.len() as u64,
            total_attendance_records: totals.total(),
            present_count: totals.present,
            absent_count: totals.absent,
            attendance_rate: attendance_rate(totals.present, totals.total()),
        }
    }

    /// Roster rows in input order. With a status, only employees having at
    /// least one in-range record of that status are kept; counts are reported
    /// in full either way.
    pub fn per_employee(&self, status: Option<AttendanceStatus>) -> Vec<EmployeeAttendanceSummary> {
        self.employees
            .iter()
            .filter_map(|employee| {
                let counts = self.counts_for(employee.id);
                if status.is_some_and(|s| counts.count(s) == 0) {
                    return None;
                }
                Some(EmployeeAttendanceSummary {
                    id: employee.id,
                    full_name: employee.full_name.clone(),
                    email: employee.email.clone(),
                    department: employee.department.clone(),
                    present_count: counts.present,
                    absent_count: counts.absent,
                    total_records: counts.total(),
                })
            })
            .collect()
    }
}

pub fn summarize(
    employees: &[Employee],
    records: &[AttendanceRecord],
    range: &DateRange,
) -> DashboardSummary {
    Aggregation::compute(employees, records, range).summary()
}

pub fn summarize_per_employee(
    employees: &[Employee],
    records: &[AttendanceRecord],
    status: Option<AttendanceStatus>,
    range: &DateRange,
) -> Vec<EmployeeAttendanceSummary> {
    Aggregation::compute(employees, records, range).per_employee(status)
}

/// Present share in percent, rounded to one decimal. Zero when there is nothing to count.
pub fn attendance_rate(present: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = present as f64 / total as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}
