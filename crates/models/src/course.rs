use crate::student::Student;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of the per-semester course listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: i32,
    /// Name taken from the course template
    pub name: String,
    /// Number of enrollment rows of any status
    pub number_of_students: u64,
}

/// A course together with its enrolled students
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub id: i32,
    /// `None` when the course points at a template that no longer exists
    pub name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub students: Vec<Student>,
}

/// Everything needed to open a new course offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    /// Template code, e.g. `T-514-VEFT`
    pub template: String,
    /// Semester code, e.g. `20173`
    pub semester: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max_students: i32,
}
