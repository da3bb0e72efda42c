use models::student::{Student, WaitingStudent};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub ssn: String,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WaitingStudentResponse {
    pub name: String,
}

/// Identifies an existing student by social security number
#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentRequest {
    pub ssn: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            ssn: student.ssn,
            name: student.name,
        }
    }
}

impl From<WaitingStudent> for WaitingStudentResponse {
    fn from(student: WaitingStudent) -> Self {
        Self { name: student.name }
    }
}
