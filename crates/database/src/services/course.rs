use crate::{
    entities::course,
    error::{ServiceError, check_capacity, check_date_range},
    store::CourseStore,
};
use chrono::NaiveDate;
use log::info;
use models::{
    course::{CourseDetails, CourseSummary, NewCourse},
    enrollment_status::EnrollmentStatus,
    student::Student,
};

pub struct CourseService;

impl CourseService {
    /// List every course of a semester along with how many students it has
    ///
    /// The count covers enrollment rows of every status, so waiting and
    /// withdrawn students are included. Course details only show enrolled ones.
    pub async fn list_courses<S: CourseStore + ?Sized>(
        store: &S,
        semester: &str,
    ) -> Result<Vec<CourseSummary>, ServiceError> {
        let courses = store.list_courses(semester).await?;

        let mut summaries = Vec::with_capacity(courses.len());
        for (course, template) in courses {
            let number_of_students = store.count_enrollments(course.id, None).await?;
            summaries.push(CourseSummary {
                id: course.id,
                name: template.course_name,
                number_of_students,
            });
        }

        Ok(summaries)
    }

    /// Get a single course with its enrolled students
    pub async fn get_course_details<S: CourseStore + ?Sized>(
        store: &S,
        course_id: i32,
    ) -> Result<Option<CourseDetails>, ServiceError> {
        match store.get_course(course_id).await? {
            Some(course) => Self::details(store, course).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn add_course<S: CourseStore + ?Sized>(
        store: &S,
        new_course: NewCourse,
    ) -> Result<CourseDetails, ServiceError> {
        check_date_range(new_course.start_date, new_course.end_date)?;
        check_capacity(new_course.max_students)?;

        if store
            .get_course_template(&new_course.template)
            .await?
            .is_none()
        {
            return Err(ServiceError::TemplateNotFound(new_course.template));
        }

        let course = store.insert_course(new_course).await?;
        info!(
            "Created course {} ({}) for semester {}",
            course.id, course.template, course.semester
        );

        Self::details(store, course).await
    }

    /// Move a course's start and end dates; nothing else about a course can change
    pub async fn update_course<S: CourseStore + ?Sized>(
        store: &S,
        course_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<CourseDetails>, ServiceError> {
        check_date_range(start_date, end_date)?;

        match store
            .update_course_dates(course_id, start_date, end_date)
            .await?
        {
            Some(course) => {
                info!("Updated dates of course {course_id}");
                Self::details(store, course).await.map(Some)
            }
            None => Ok(None),
        }
    }

    /// Delete a course and its enrollment rows
    pub async fn delete_course<S: CourseStore + ?Sized>(
        store: &S,
        course_id: i32,
    ) -> Result<bool, ServiceError> {
        let deleted = store.delete_course(course_id).await?;
        if deleted {
            info!("Deleted course {course_id}");
        }

        Ok(deleted)
    }

    async fn details<S: CourseStore + ?Sized>(
        store: &S,
        course: course::Model,
    ) -> Result<CourseDetails, ServiceError> {
        let name = store
            .get_course_template(&course.template)
            .await?
            .map(|template| template.course_name);

        let students = store
            .list_students(course.id, Some(EnrollmentStatus::Enrolled))
            .await?
            .into_iter()
            .map(Student::from)
            .collect();

        Ok(CourseDetails {
            id: course.id,
            name,
            start_date: course.start_date,
            end_date: course.end_date,
            students,
        })
    }
}
