use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{debug, info};
use validator::Validate;

use crate::{
    db::{Store, StoreError},
    error::ApiError,
    model::NewEmployee,
    utils::EmailRegistry,
};

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = crate::model::Employee),
        (status = 400, description = "Validation failed or email already registered", body = Object, example = json!({
            "detail": "Employee with email john.doe@company.com already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<Store>,
    registry: web::Data<EmailRegistry>,
    payload: web::Json<NewEmployee>,
) -> Result<HttpResponse, ApiError> {
    let new = payload.into_inner().normalized();
    new.validate()?;

    if registry.is_taken(&store, &new.email).await? {
        debug!(email = %new.email, "Email already registered");
        return Err(StoreError::DuplicateEmail(new.email).into());
    }

    let employee = store.create_employee(&new).await?;
    registry.register(&employee.email).await;

    info!(employee_id = employee.id, department = %employee.department, "Employee created");
    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees, oldest first", body = Vec<crate::model::Employee>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let employees = store.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Delete Employee
///
/// Also removes the employee's attendance records.
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Employee 1 deleted successfully"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with id 1 not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<Store>,
    registry: web::Data<EmailRegistry>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let removed = store
        .delete_employee(employee_id)
        .await?
        .ok_or_else(|| ApiError::employee_not_found(employee_id))?;
    registry.release(&removed.email).await;

    info!(employee_id, "Employee deleted");
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Employee {employee_id} deleted successfully")
    })))
}
