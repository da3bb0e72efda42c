use crate::{
    entities::{course, student},
    error::ServiceError,
    store::CourseStore,
};
use log::{debug, info};
use models::{
    enrollment_status::EnrollmentStatus,
    student::{Student, WaitingStudent},
};

pub struct EnrollmentService;

impl EnrollmentService {
    /// Enrolls a student in a course
    ///
    /// Capacity is checked before anything else about the student's existing
    /// rows, so a full course turns away a waitlisted student as well. A
    /// withdrawn row is reused before a waiting one; a new row is only
    /// inserted when the student has neither.
    pub async fn enroll<S: CourseStore + ?Sized>(
        store: &S,
        course_id: i32,
        ssn: &str,
    ) -> Result<Student, ServiceError> {
        let (student, course) = Self::student_and_course(store, course_id, ssn).await?;

        let enrolled = store
            .count_enrollments(course_id, Some(EnrollmentStatus::Enrolled))
            .await?;
        if enrolled >= course.capacity() {
            debug!(
                "Course {course_id} is full ({enrolled}/{}), rejecting {ssn}",
                course.max_students
            );
            return Err(ServiceError::CapacityExceeded);
        }

        if store
            .find_enrollment(course_id, ssn, Some(EnrollmentStatus::Enrolled))
            .await?
            .is_some()
        {
            debug!("Student {ssn} is already enrolled in course {course_id}");
            return Err(ServiceError::AlreadyEnrolled);
        }

        let waiting = store
            .find_enrollment(course_id, ssn, Some(EnrollmentStatus::Waiting))
            .await?;
        let deleted = store
            .find_enrollment(course_id, ssn, Some(EnrollmentStatus::Deleted))
            .await?;

        match deleted.or(waiting) {
            Some(row) => {
                store
                    .update_enrollment_status(row.id, EnrollmentStatus::Enrolled)
                    .await?;
                info!(
                    "Enrollment {} in course {course_id} moved from {} to Enrolled",
                    row.id, row.status
                );
            }
            None => {
                let row = store
                    .insert_enrollment(course_id, ssn, EnrollmentStatus::Enrolled)
                    .await?;
                info!("Enrollment {} in course {course_id} created as Enrolled", row.id);
            }
        }

        Ok(student.into())
    }

    /// Puts a student on the waiting list of a course
    ///
    /// The waiting list has no capacity, and a student who was withdrawn from
    /// the course gets a fresh row rather than having the old one reused.
    pub async fn add_to_waitlist<S: CourseStore + ?Sized>(
        store: &S,
        course_id: i32,
        ssn: &str,
    ) -> Result<Student, ServiceError> {
        let (student, _) = Self::student_and_course(store, course_id, ssn).await?;

        if store
            .find_enrollment(course_id, ssn, Some(EnrollmentStatus::Waiting))
            .await?
            .is_some()
        {
            debug!("Student {ssn} is already waiting for course {course_id}");
            return Err(ServiceError::AlreadyWaiting);
        }

        if store
            .find_enrollment(course_id, ssn, Some(EnrollmentStatus::Enrolled))
            .await?
            .is_some()
        {
            debug!("Student {ssn} is already enrolled in course {course_id}");
            return Err(ServiceError::AlreadyEnrolled);
        }

        let row = store
            .insert_enrollment(course_id, ssn, EnrollmentStatus::Waiting)
            .await?;
        info!("Enrollment {} in course {course_id} created as Waiting", row.id);
        debug!("Enrollment {} belongs to student {ssn}", row.id);

        Ok(student.into())
    }

    /// Withdraws an enrolled student from a course by marking their row as deleted
    ///
    /// Only enrolled students can be withdrawn. A student who is only on the
    /// waiting list gets [`ServiceError::NotEnrolled`].
    pub async fn withdraw<S: CourseStore + ?Sized>(
        store: &S,
        course_id: i32,
        ssn: &str,
    ) -> Result<bool, ServiceError> {
        Self::student_and_course(store, course_id, ssn).await?;

        if store
            .find_enrollment(course_id, ssn, Some(EnrollmentStatus::Deleted))
            .await?
            .is_some()
        {
            debug!("Student {ssn} was already removed from course {course_id}");
            return Err(ServiceError::AlreadyDeleted);
        }

        let Some(row) = store
            .find_enrollment(course_id, ssn, Some(EnrollmentStatus::Enrolled))
            .await?
        else {
            debug!("Student {ssn} is not enrolled in course {course_id}");
            return Err(ServiceError::NotEnrolled);
        };

        store
            .update_enrollment_status(row.id, EnrollmentStatus::Deleted)
            .await?;
        info!("Enrollment {} in course {course_id} moved to Deleted", row.id);

        Ok(true)
    }

    /// Students currently enrolled in a course
    pub async fn list_roster<S: CourseStore + ?Sized>(
        store: &S,
        course_id: i32,
    ) -> Result<Vec<Student>, ServiceError> {
        Self::require_course(store, course_id).await?;

        let students = store
            .list_students(course_id, Some(EnrollmentStatus::Enrolled))
            .await?;

        Ok(students.into_iter().map(Student::from).collect())
    }

    /// Names of the students on the waiting list of a course
    pub async fn list_waiting<S: CourseStore + ?Sized>(
        store: &S,
        course_id: i32,
    ) -> Result<Vec<WaitingStudent>, ServiceError> {
        Self::require_course(store, course_id).await?;

        let students = store
            .list_students(course_id, Some(EnrollmentStatus::Waiting))
            .await?;

        Ok(students
            .into_iter()
            .map(|student| WaitingStudent { name: student.name })
            .collect())
    }

    /// Looks up the student first, then the course, failing on whichever is missing first
    async fn student_and_course<S: CourseStore + ?Sized>(
        store: &S,
        course_id: i32,
        ssn: &str,
    ) -> Result<(student::Model, course::Model), ServiceError> {
        let Some(student) = store.get_student(ssn).await? else {
            debug!("Student {ssn} does not exist");
            return Err(ServiceError::StudentNotFound);
        };
        let course = Self::require_course(store, course_id).await?;

        Ok((student, course))
    }

    async fn require_course<S: CourseStore + ?Sized>(
        store: &S,
        course_id: i32,
    ) -> Result<course::Model, ServiceError> {
        store
            .get_course(course_id)
            .await?
            .ok_or(ServiceError::CourseNotFound)
    }
}
