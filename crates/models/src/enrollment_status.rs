use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[cfg(feature = "database")]
use sea_orm::Value;

/// Where a student stands in relation to a course
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum EnrollmentStatus {
    /// Holds one of the course's seats
    Enrolled,
    /// On the waiting list, does not count towards capacity
    Waiting,
    /// Withdrawn from the course; the row is kept so a later enrollment can reuse it
    Deleted,
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for EnrollmentStatus {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => s.parse().map_err(|_| sea_orm::sea_query::ValueTypeErr),
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "EnrollmentStatus".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<EnrollmentStatus> for Value {
    fn from(status: EnrollmentStatus) -> Self {
        Value::String(Some(Box::new(status.to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for EnrollmentStatus {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val = <String as sea_orm::TryGetable>::try_get_by(res, index)?;

        val.parse().map_err(|_| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Unknown enrollment status: {val}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for EnrollmentStatus {
    fn null() -> Value {
        Value::String(None)
    }
}
