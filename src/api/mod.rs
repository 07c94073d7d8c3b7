pub mod attendance;
pub mod dashboard;
pub mod employee;

use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "HRMS Lite API is running" }))
}
