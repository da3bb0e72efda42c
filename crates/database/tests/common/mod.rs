#![allow(dead_code)]

use chrono::NaiveDate;
use database::{
    db::create_tables,
    entities::{course_template, enrollment, student},
    services::course::CourseService,
    store::SeaOrmStore,
};
use models::course::NewCourse;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectOptions, Database, EntityTrait, QueryFilter, QueryOrder,
};

pub const SEMESTER: &str = "20173";
pub const TEMPLATE: &str = "T-514-VEFT";
pub const TEMPLATE_NAME: &str = "Web services";

pub const STUDENTS: [(&str, &str); 4] = [
    ("1234567890", "Herpderp Derpsson"),
    ("1234567891", "Jane Doe"),
    ("1234567892", "John Smith"),
    ("1234567893", "Ada Lovelace"),
];

/// Opens a fresh in-memory database with templates and students already in place
pub async fn setup() -> SeaOrmStore {
    // A single connection, otherwise every pooled connection gets its own empty database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("failed to open sqlite database");
    create_tables(&db).await.expect("failed to create tables");

    course_template::Entity::insert_many([
        course_template::ActiveModel {
            template: Set(TEMPLATE.to_string()),
            course_name: Set(TEMPLATE_NAME.to_string()),
        },
        course_template::ActiveModel {
            template: Set("T-111-PROG".to_string()),
            course_name: Set("Programming".to_string()),
        },
    ])
    .exec(&db)
    .await
    .expect("failed to insert templates");

    student::Entity::insert_many(STUDENTS.map(|(ssn, name)| student::ActiveModel {
        ssn: Set(ssn.to_string()),
        name: Set(name.to_string()),
    }))
    .exec(&db)
    .await
    .expect("failed to insert students");

    SeaOrmStore::new(db)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn new_course(max_students: i32) -> NewCourse {
    NewCourse {
        template: TEMPLATE.to_string(),
        semester: SEMESTER.to_string(),
        start_date: date(2017, 8, 17),
        end_date: date(2017, 11, 17),
        max_students,
    }
}

/// Adds a course to the default semester and returns its id
pub async fn add_course(store: &SeaOrmStore, max_students: i32) -> i32 {
    CourseService::add_course(store, new_course(max_students))
        .await
        .expect("failed to add course")
        .id
}

/// All enrollment rows for a student in a course, oldest first
pub async fn rows_for(store: &SeaOrmStore, course_id: i32, ssn: &str) -> Vec<enrollment::Model> {
    enrollment::Entity::find()
        .filter(enrollment::Column::CourseId.eq(course_id))
        .filter(enrollment::Column::StudentSsn.eq(ssn))
        .order_by_asc(enrollment::Column::Id)
        .all(store.connection())
        .await
        .expect("failed to load enrollment rows")
}
