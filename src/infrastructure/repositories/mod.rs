//! Repository implementations using SeaORM

pub mod analytics_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod faculty_repository;
pub mod node_repository;
pub mod preferences_repository;
pub mod scholarship_repository;
pub mod tutor_session_repository;
pub mod xr_classroom_repository;

pub use analytics_repository::SeaOrmAnalyticsRepository;
pub use course_repository::SeaOrmCourseRepository;
pub use enrollment_repository::SeaOrmEnrollmentRepository;
pub use faculty_repository::SeaOrmFacultyRepository;
pub use node_repository::SeaOrmNodeRepository;
pub use preferences_repository::SeaOrmPreferencesRepository;
pub use scholarship_repository::SeaOrmScholarshipRepository;
pub use tutor_session_repository::SeaOrmTutorSessionRepository;
pub use xr_classroom_repository::SeaOrmXrClassroomRepository;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Fresh primary key for a portal row
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Fixed-width RFC 3339 so stored timestamps sort lexicographically
pub(crate) fn format_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn now() -> String {
    format_time(Utc::now())
}

pub(crate) fn empty_document() -> Value {
    Value::Object(serde_json::Map::new())
}

/// JSON text for a list column; an empty list is stored as NULL
pub(crate) fn encode_list(values: &[String]) -> Result<Option<String>, serde_json::Error> {
    if values.is_empty() {
        return Ok(None);
    }
    serde_json::to_string(values).map(Some)
}
