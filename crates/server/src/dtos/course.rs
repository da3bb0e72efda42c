use crate::dtos::student::StudentResponse;
use chrono::NaiveDate;
use models::course::{CourseDetails, CourseSummary, NewCourse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseSummaryResponse {
    pub id: i32,
    pub name: String,
    /// Number of students attached to the course, including waiting and removed ones
    pub number_of_students: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: i32,
    pub name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Enrolled students only
    pub students: Vec<StudentResponse>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseQueryParams {
    /// Semester code such as `20173`; the server's default semester when omitted
    pub semester: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseRequest {
    /// Template code of the course, e.g. `T-514-VEFT`
    pub template: String,
    pub semester: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub max_students: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseDatesRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<CourseSummary> for CourseSummaryResponse {
    fn from(summary: CourseSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            number_of_students: summary.number_of_students,
        }
    }
}

impl From<CourseDetails> for CourseResponse {
    fn from(details: CourseDetails) -> Self {
        Self {
            id: details.id,
            name: details.name,
            start_date: details.start_date,
            end_date: details.end_date,
            students: details.students.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CourseRequest> for NewCourse {
    fn from(request: CourseRequest) -> Self {
        Self {
            template: request.template,
            semester: request.semester,
            start_date: request.start_date,
            end_date: request.end_date,
            max_students: request.max_students,
        }
    }
}
