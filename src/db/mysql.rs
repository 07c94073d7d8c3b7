use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use futures_util::TryStreamExt;
use sqlx::{FromRow, MySqlPool};
use tracing::debug;

use super::{StoreError, StoreResult};
use crate::model::{AttendanceRecord, AttendanceStatus, Employee, NewAttendance, NewEmployee};

#[derive(FromRow)]
struct EmployeeRow {
    id: u64,
    full_name: String,
    email: String,
    department: String,
    created_at: DateTime<Utc>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            department: row.department,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct AttendanceRow {
    id: u64,
    employee_id: u64,
    date: NaiveDateTime,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = StoreError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        let status = AttendanceStatus::from_str(&row.status).map_err(|_| {
            StoreError::Corrupt(format!(
                "attendance {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;

        Ok(AttendanceRecord {
            id: row.id,
            employee_id: row.employee_id,
            date: row.date,
            status,
            created_at: row.created_at,
        })
    }
}

const EMPLOYEE_COLUMNS: &str = "id, full_name, email, department, created_at";
const ATTENDANCE_COLUMNS: &str = "id, employee_id, date, status, created_at";

#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = MySqlPool::connect(database_url).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn create_employee(&self, new: &NewEmployee) -> StoreResult<Employee> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (full_name, email, department)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.department)
        .execute(&self.pool)
        .await;

        let id = match result {
            Ok(res) => res.last_insert_id(),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(StoreError::DuplicateEmail(new.email.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        self.get_employee(id)
            .await?
            .ok_or_else(|| StoreError::Corrupt(format!("employee {id} vanished after insert")))
    }

    pub async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY id ASC");
        let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    pub async fn get_employee(&self, id: u64) -> StoreResult<Option<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?");
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    pub async fn delete_employee(&self, id: u64) -> StoreResult<Option<Employee>> {
        let Some(employee) = self.get_employee(id).await? else {
            return Ok(None);
        };

        // attendances go with it through ON DELETE CASCADE
        let res = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok((res.rows_affected() > 0).then_some(employee))
    }

    pub async fn list_emails(&self) -> StoreResult<Vec<String>> {
        let emails: Vec<String> = sqlx::query_as::<_, (String,)>("SELECT email FROM employees")
            .fetch(&self.pool)
            .map_ok(|(email,)| email)
            .try_collect()
            .await?;
        debug!(count = emails.len(), "Loaded employee emails");
        Ok(emails)
    }

    pub async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        // default collation compares case-insensitively, same as the unique index
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    pub async fn mark_attendance(&self, new: &NewAttendance) -> StoreResult<AttendanceRecord> {
        let result = sqlx::query(
            r#"
            INSERT INTO attendances (employee_id, date, status)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(new.employee_id)
        .bind(new.date)
        .bind(new.status.as_ref())
        .execute(&self.pool)
        .await;

        let id = match result {
            Ok(res) => res.last_insert_id(),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                return Err(StoreError::UnknownEmployee(new.employee_id));
            }
            Err(e) => return Err(e.into()),
        };

        let sql = format!("SELECT {ATTENDANCE_COLUMNS} FROM attendances WHERE id = ?");
        sqlx::query_as::<_, AttendanceRow>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?
            .try_into()
    }

    pub async fn list_attendance(
        &self,
        employee_id: Option<u64>,
    ) -> StoreResult<Vec<AttendanceRecord>> {
        let rows = match employee_id {
            Some(employee_id) => {
                let sql = format!(
                    "SELECT {ATTENDANCE_COLUMNS} FROM attendances WHERE employee_id = ? ORDER BY id ASC"
                );
                sqlx::query_as::<_, AttendanceRow>(&sql)
                    .bind(employee_id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("SELECT {ATTENDANCE_COLUMNS} FROM attendances ORDER BY id ASC");
                sqlx::query_as::<_, AttendanceRow>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter().map(AttendanceRecord::try_from).collect()
    }
}
