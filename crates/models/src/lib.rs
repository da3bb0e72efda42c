pub mod course;
pub mod enrollment_status;
pub mod student;
