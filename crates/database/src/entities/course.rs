use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub template: String, // e.g. T-514-VEFT
    pub semester: String, // e.g. 20173
    pub start_date: Date,
    pub end_date: Date,
    #[sea_orm(default_value = 0)]
    pub max_students: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_template::Entity",
        from = "Column::Template",
        to = "super::course_template::Column::Template"
    )]
    CourseTemplate,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollments,
}

impl Related<super::course_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseTemplate.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Number of seats as an unsigned count
    ///
    /// New courses are validated, but a row written by something else may still
    /// hold a negative value; that counts as no seats.
    pub fn capacity(&self) -> u64 {
        u64::try_from(self.max_students).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(max_students: i32) -> Model {
        Model {
            id: 1,
            template: "T-514-VEFT".to_string(),
            semester: "20173".to_string(),
            start_date: Date::from_ymd_opt(2017, 8, 17).unwrap(),
            end_date: Date::from_ymd_opt(2017, 11, 17).unwrap(),
            max_students,
        }
    }

    #[test]
    fn test_capacity() {
        assert_eq!(course(25).capacity(), 25);
        assert_eq!(course(0).capacity(), 0);
        assert_eq!(course(-3).capacity(), 0);
    }
}
