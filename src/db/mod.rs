//! Data access for employees and attendance records.
//!
//! Backed by MySQL when `DATABASE_URL` is configured, otherwise by a
//! process-local [`MemoryStore`].

mod memory;
mod mysql;

use std::sync::Arc;

use derive_more::Display;
use tracing::info;

use crate::config::Config;
use crate::model::{AttendanceRecord, Employee, NewAttendance, NewEmployee};

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "Employee with email {} already exists", _0)]
    DuplicateEmail(String),

    #[display(fmt = "Employee with id {} not found", _0)]
    UnknownEmployee(u64),

    #[display(fmt = "corrupt row: {}", _0)]
    Corrupt(String),

    #[display(fmt = "database error: {}", _0)]
    Database(sqlx::Error),
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Clone)]
pub enum Store {
    MySql(MySqlStore),
    Memory(Arc<MemoryStore>),
}

impl Store {
    pub fn memory() -> Self {
        Store::Memory(Arc::new(MemoryStore::default()))
    }

    pub fn backend(&self) -> &'static str {
        match self {
            Store::MySql(_) => "mysql",
            Store::Memory(_) => "memory",
        }
    }

    pub async fn create_employee(&self, new: &NewEmployee) -> StoreResult<Employee> {
        match self {
            Store::MySql(s) => s.create_employee(new).await,
            Store::Memory(s) => s.create_employee(new),
        }
    }

    /// All employees, oldest first.
    pub async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        match self {
            Store::MySql(s) => s.list_employees().await,
            Store::Memory(s) => Ok(s.list_employees()),
        }
    }

    pub async fn get_employee(&self, id: u64) -> StoreResult<Option<Employee>> {
        match self {
            Store::MySql(s) => s.get_employee(id).await,
            Store::Memory(s) => Ok(s.get_employee(id)),
        }
    }

    /// Removes the employee and their attendance. Returns the removed employee, if any.
    pub async fn delete_employee(&self, id: u64) -> StoreResult<Option<Employee>> {
        match self {
            Store::MySql(s) => s.delete_employee(id).await,
            Store::Memory(s) => Ok(s.delete_employee(id)),
        }
    }

    pub async fn list_emails(&self) -> StoreResult<Vec<String>> {
        match self {
            Store::MySql(s) => s.list_emails().await,
            Store::Memory(s) => Ok(s.list_emails()),
        }
    }

    /// Case-insensitive lookup of a registered email.
    pub async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        match self {
            Store::MySql(s) => s.email_exists(email).await,
            Store::Memory(s) => Ok(s.email_exists(email)),
        }
    }

    pub async fn mark_attendance(&self, new: &NewAttendance) -> StoreResult<AttendanceRecord> {
        match self {
            Store::MySql(s) => s.mark_attendance(new).await,
            Store::Memory(s) => s.mark_attendance(new),
        }
    }

    /// Attendance in insertion order, optionally for a single employee.
    pub async fn list_attendance(
        &self,
        employee_id: Option<u64>,
    ) -> StoreResult<Vec<AttendanceRecord>> {
        match self {
            Store::MySql(s) => s.list_attendance(employee_id).await,
            Store::Memory(s) => Ok(s.list_attendance(employee_id)),
        }
    }
}

pub async fn init_db(config: &Config) -> anyhow::Result<Store> {
    match &config.database_url {
        Some(url) => {
            let store = MySqlStore::connect(url).await?;
            info!("Connected to MySQL, migrations applied");
            Ok(Store::MySql(store))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory store");
            Ok(Store::memory())
        }
    }
}
