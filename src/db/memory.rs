use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use super::{StoreError, StoreResult};
use crate::model::{AttendanceRecord, Employee, NewAttendance, NewEmployee};

#[derive(Debug, Default)]
struct Tables {
    employees: Vec<Employee>,
    attendances: Vec<AttendanceRecord>,
    last_employee_id: u64,
    last_attendance_id: u64,
}

/// Process-local store with the same constraints as the MySQL schema:
/// case-insensitive unique emails, cascade on employee delete, and a
/// foreign key from attendance to employee.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create_employee(&self, new: &NewEmployee) -> StoreResult<Employee> {
        let mut tables = self.write();

        if tables
            .employees
            .iter()
            .any(|e| e.email.eq_ignore_ascii_case(&new.email))
        {
            return Err(StoreError::DuplicateEmail(new.email.clone()));
        }

        tables.last_employee_id += 1;
        let employee = Employee {
            id: tables.last_employee_id,
            full_name: new.full_name.clone(),
            email: new.email.clone(),
            department: new.department.clone(),
            created_at: Utc::now(),
        };
        tables.employees.push(employee.clone());
        Ok(employee)
    }

    pub fn list_employees(&self) -> Vec<Employee> {
        self.read().employees.clone()
    }

    pub fn get_employee(&self, id: u64) -> Option<Employee> {
        self.read().employees.iter().find(|e| e.id == id).cloned()
    }

    pub fn delete_employee(&self, id: u64) -> Option<Employee> {
        let mut tables = self.write();
        let pos = tables.employees.iter().position(|e| e.id == id)?;
        let removed = tables.employees.remove(pos);
        tables.attendances.retain(|a| a.employee_id != id);
        Some(removed)
    }

    pub fn list_emails(&self) -> Vec<String> {
        self.read().employees.iter().map(|e| e.email.clone()).collect()
    }

    pub fn email_exists(&self, email: &str) -> bool {
        self.read()
            .employees
            .iter()
            .any(|e| e.email.eq_ignore_ascii_case(email))
    }

    pub fn mark_attendance(&self, new: &NewAttendance) -> StoreResult<AttendanceRecord> {
        let mut tables = self.write();

        if !tables.employees.iter().any(|e| e.id == new.employee_id) {
            return Err(StoreError::UnknownEmployee(new.employee_id));
        }

        tables.last_attendance_id += 1;
        let record = AttendanceRecord {
            id: tables.last_attendance_id,
            employee_id: new.employee_id,
            date: new.date,
            status: new.status,
            created_at: Utc::now(),
        };
        tables.attendances.push(record.clone());
        Ok(record)
    }

    pub fn list_attendance(&self, employee_id: Option<u64>) -> Vec<AttendanceRecord> {
        self.read()
            .attendances
            .iter()
            .filter(|a| employee_id.is_none_or(|id| a.employee_id == id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttendanceStatus;
    use chrono::NaiveDate;

    fn new_employee(email: &str) -> NewEmployee {
        NewEmployee {
            full_name: "Test Person".into(),
            email: email.into(),
            department: "QA".into(),
        }
    }

    fn new_attendance(employee_id: u64, d: u32) -> NewAttendance {
        NewAttendance {
            employee_id,
            date: NaiveDate::from_ymd_opt(2026, 2, d)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            status: AttendanceStatus::Present,
        }
    }

    #[test]
    fn ids_increase_and_are_not_reused() {
        let store = MemoryStore::default();
        let a = store.create_employee(&new_employee("a@example.com")).unwrap();
        let b = store.create_employee(&new_employee("b@example.com")).unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.delete_employee(b.id).unwrap();
        let c = store.create_employee(&new_employee("c@example.com")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn duplicate_email_is_rejected_case_insensitively() {
        let store = MemoryStore::default();
        store.create_employee(&new_employee("dup@example.com")).unwrap();
        let err = store
            .create_employee(&new_employee("DUP@example.com"))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(e) if e == "DUP@example.com"));
        assert_eq!(store.list_employees().len(), 1);
    }

    #[test]
    fn email_lookup_follows_create_and_delete() {
        let store = MemoryStore::default();
        assert!(!store.email_exists("a@example.com"));
        let a = store.create_employee(&new_employee("a@example.com")).unwrap();
        assert!(store.email_exists("A@Example.com"));
        store.delete_employee(a.id);
        assert!(!store.email_exists("a@example.com"));
    }

    #[test]
    fn delete_cascades_to_attendance() {
        let store = MemoryStore::default();
        let a = store.create_employee(&new_employee("a@example.com")).unwrap();
        let b = store.create_employee(&new_employee("b@example.com")).unwrap();
        store.mark_attendance(&new_attendance(a.id, 1)).unwrap();
        store.mark_attendance(&new_attendance(b.id, 1)).unwrap();
        store.mark_attendance(&new_attendance(a.id, 2)).unwrap();

        assert_eq!(store.delete_employee(a.id).map(|e| e.id), Some(a.id));
        assert!(store.delete_employee(a.id).is_none());
        assert!(store.list_attendance(Some(a.id)).is_empty());
        assert_eq!(store.list_attendance(None).len(), 1);
    }

    #[test]
    fn attendance_requires_existing_employee() {
        let store = MemoryStore::default();
        let err = store.mark_attendance(&new_attendance(42, 1)).unwrap_err();
        assert!(matches!(err, StoreError::UnknownEmployee(42)));
    }

    #[test]
    fn same_day_can_be_marked_twice() {
        let store = MemoryStore::default();
        let a = store.create_employee(&new_employee("a@example.com")).unwrap();
        let first = store.mark_attendance(&new_attendance(a.id, 3)).unwrap();
        let second = store.mark_attendance(&new_attendance(a.id, 3)).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.list_attendance(Some(a.id)).len(), 2);
    }
}
