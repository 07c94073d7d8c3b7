use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "created_at": "2026-01-01T00:00:00Z"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "2026-01-01T00:00:00Z", value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 100, message = "full_name must be 1-100 characters"))]
    #[schema(example = "John Doe")]
    pub full_name: String,

    #[validate(email(message = "email must be a valid address"))]
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "department must be 1-100 characters"))]
    #[schema(example = "Engineering")]
    pub department: String,
}

impl NewEmployee {
    /// Trims surrounding whitespace so a blank name fails the length check.
    pub fn normalized(self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }
}
