use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_COMPLETED: &str = "completed";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ai_tutor_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: String,
    pub user_id: String,
    pub portal_course_id: Option<String>,
    pub tutor_type: String, // 'ScrollMentorGPT', 'FacultyAI', 'GeneralAI'
    pub faculty_context: Option<String>,
    pub session_data: Json,
    pub conversation_history: Json,
    pub started_at: String,
    pub ended_at: Option<String>,
    pub satisfaction_rating: Option<i32>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portal_course::Entity",
        from = "Column::PortalCourseId",
        to = "super::portal_course::Column::PortalCourseId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    PortalCourse,
}

impl Related<super::portal_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortalCourse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
