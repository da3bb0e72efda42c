use crate::entities::{course, course_template, enrollment, student};
use async_trait::async_trait;
use chrono::NaiveDate;
use models::{course::NewCourse, enrollment_status::EnrollmentStatus};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
    sea_query::JoinType,
};

/// Storage operations the course and enrollment services are written against
///
/// Lookups return `Ok(None)` when nothing matches; only storage failures are errors.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn get_student(&self, ssn: &str) -> Result<Option<student::Model>, DbErr>;

    async fn get_course(&self, course_id: i32) -> Result<Option<course::Model>, DbErr>;

    async fn get_course_template(
        &self,
        template: &str,
    ) -> Result<Option<course_template::Model>, DbErr>;

    /// Finds the enrollment row for a student in a course, optionally only with the given status
    async fn find_enrollment(
        &self,
        course_id: i32,
        ssn: &str,
        status: Option<EnrollmentStatus>,
    ) -> Result<Option<enrollment::Model>, DbErr>;

    /// Counts the enrollment rows of a course, of every status when `status` is `None`
    async fn count_enrollments(
        &self,
        course_id: i32,
        status: Option<EnrollmentStatus>,
    ) -> Result<u64, DbErr>;

    async fn insert_enrollment(
        &self,
        course_id: i32,
        ssn: &str,
        status: EnrollmentStatus,
    ) -> Result<enrollment::Model, DbErr>;

    async fn update_enrollment_status(
        &self,
        enrollment_id: i32,
        status: EnrollmentStatus,
    ) -> Result<(), DbErr>;

    /// Students with an enrollment row in the course, in the order the rows were created
    async fn list_students(
        &self,
        course_id: i32,
        status: Option<EnrollmentStatus>,
    ) -> Result<Vec<student::Model>, DbErr>;

    /// Courses of a semester paired with their template; courses without one are left out
    async fn list_courses(
        &self,
        semester: &str,
    ) -> Result<Vec<(course::Model, course_template::Model)>, DbErr>;

    async fn insert_course(&self, new_course: NewCourse) -> Result<course::Model, DbErr>;

    async fn update_course_dates(
        &self,
        course_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<course::Model>, DbErr>;

    /// Deletes a course along with its enrollment rows, returning `false` if it did not exist
    async fn delete_course(&self, course_id: i32) -> Result<bool, DbErr>;
}

/// [`CourseStore`] backed by a SeaORM connection
#[derive(Debug, Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    fn enrollment_condition(
        course_id: i32,
        ssn: Option<&str>,
        status: Option<EnrollmentStatus>,
    ) -> Condition {
        let mut condition = Condition::all().add(enrollment::Column::CourseId.eq(course_id));

        if let Some(ssn) = ssn {
            condition = condition.add(enrollment::Column::StudentSsn.eq(ssn));
        }
        if let Some(status) = status {
            condition = condition.add(enrollment::Column::Status.eq(status));
        }

        condition
    }
}

#[async_trait]
impl CourseStore for SeaOrmStore {
    async fn get_student(&self, ssn: &str) -> Result<Option<student::Model>, DbErr> {
        student::Entity::find_by_id(ssn.to_owned())
            .one(&self.db)
            .await
    }

    async fn get_course(&self, course_id: i32) -> Result<Option<course::Model>, DbErr> {
        course::Entity::find_by_id(course_id).one(&self.db).await
    }

    async fn get_course_template(
        &self,
        template: &str,
    ) -> Result<Option<course_template::Model>, DbErr> {
        course_template::Entity::find_by_id(template.to_owned())
            .one(&self.db)
            .await
    }

    async fn find_enrollment(
        &self,
        course_id: i32,
        ssn: &str,
        status: Option<EnrollmentStatus>,
    ) -> Result<Option<enrollment::Model>, DbErr> {
        enrollment::Entity::find()
            .filter(Self::enrollment_condition(course_id, Some(ssn), status))
            .order_by_asc(enrollment::Column::Id)
            .one(&self.db)
            .await
    }

    async fn count_enrollments(
        &self,
        course_id: i32,
        status: Option<EnrollmentStatus>,
    ) -> Result<u64, DbErr> {
        enrollment::Entity::find()
            .filter(Self::enrollment_condition(course_id, None, status))
            .count(&self.db)
            .await
    }

    async fn insert_enrollment(
        &self,
        course_id: i32,
        ssn: &str,
        status: EnrollmentStatus,
    ) -> Result<enrollment::Model, DbErr> {
        enrollment::ActiveModel {
            id: NotSet,
            course_id: Set(course_id),
            student_ssn: Set(ssn.to_owned()),
            status: Set(status),
        }
        .insert(&self.db)
        .await
    }

    async fn update_enrollment_status(
        &self,
        enrollment_id: i32,
        status: EnrollmentStatus,
    ) -> Result<(), DbErr> {
        enrollment::ActiveModel {
            id: Set(enrollment_id),
            status: Set(status),
            ..Default::default()
        }
        .update(&self.db)
        .await?;

        Ok(())
    }

    async fn list_students(
        &self,
        course_id: i32,
        status: Option<EnrollmentStatus>,
    ) -> Result<Vec<student::Model>, DbErr> {
        student::Entity::find()
            .join(JoinType::InnerJoin, student::Relation::Enrollments.def())
            .filter(Self::enrollment_condition(course_id, None, status))
            .order_by_asc(enrollment::Column::Id)
            .all(&self.db)
            .await
    }

    async fn list_courses(
        &self,
        semester: &str,
    ) -> Result<Vec<(course::Model, course_template::Model)>, DbErr> {
        let courses = course::Entity::find()
            .find_also_related(course_template::Entity)
            .filter(course::Column::Semester.eq(semester))
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await?;

        Ok(courses
            .into_iter()
            .filter_map(|(course, template)| template.map(|template| (course, template)))
            .collect())
    }

    async fn insert_course(&self, new_course: NewCourse) -> Result<course::Model, DbErr> {
        course::ActiveModel {
            id: NotSet,
            template: Set(new_course.template),
            semester: Set(new_course.semester),
            start_date: Set(new_course.start_date),
            end_date: Set(new_course.end_date),
            max_students: Set(new_course.max_students),
        }
        .insert(&self.db)
        .await
    }

    async fn update_course_dates(
        &self,
        course_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<course::Model>, DbErr> {
        let Some(course) = self.get_course(course_id).await? else {
            return Ok(None);
        };

        let mut active: course::ActiveModel = course.into();
        active.start_date = Set(start_date);
        active.end_date = Set(end_date);

        active.update(&self.db).await.map(Some)
    }

    async fn delete_course(&self, course_id: i32) -> Result<bool, DbErr> {
        if self.get_course(course_id).await?.is_none() {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        enrollment::Entity::delete_many()
            .filter(enrollment::Column::CourseId.eq(course_id))
            .exec(&txn)
            .await?;
        course::Entity::delete_by_id(course_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(true)
    }
}
