use chrono::NaiveDate;
use sea_orm::DbErr;
use thiserror::Error;

/// Everything a course or enrollment operation can fail with
///
/// Apart from [`ServiceError::Database`], each variant describes a conflict
/// between the request and the stored state. None of them are worth retrying.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Student does not exist")]
    StudentNotFound,
    #[error("Course does not exist")]
    CourseNotFound,
    #[error("Course template {0} does not exist")]
    TemplateNotFound(String),
    #[error("Course has reached its maximum number of students")]
    CapacityExceeded,
    #[error("Student is already enrolled in the course")]
    AlreadyEnrolled,
    #[error("Student is already on the waiting list")]
    AlreadyWaiting,
    #[error("Student has already been removed from the course")]
    AlreadyDeleted,
    #[error("Student is not enrolled in the course")]
    NotEnrolled,
    #[error("Maximum number of students must not be negative, got {0}")]
    InvalidCapacity(i32),
    #[error("End date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl ServiceError {
    /// Whether the error means that something the request referred to is missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound
                | Self::CourseNotFound
                | Self::TemplateNotFound(_)
                | Self::NotEnrolled
        )
    }

    /// Whether the error means the request clashes with the current enrollment state
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded
                | Self::AlreadyEnrolled
                | Self::AlreadyWaiting
                | Self::AlreadyDeleted
        )
    }
}

/// Rejects a negative number of seats
pub(crate) fn check_capacity(max_students: i32) -> Result<(), ServiceError> {
    if max_students < 0 {
        return Err(ServiceError::InvalidCapacity(max_students));
    }
    Ok(())
}

/// Rejects a date range that ends before it starts
pub(crate) fn check_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), ServiceError> {
    if end < start {
        return Err(ServiceError::InvalidDateRange { start, end });
    }
    Ok(())
}
