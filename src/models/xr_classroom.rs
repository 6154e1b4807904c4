use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DURATION_MINUTES: i32 = 60;
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 30;
pub const STATUS_SCHEDULED: &str = "scheduled";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "xr_classrooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub classroom_id: String,
    pub portal_course_id: String,
    pub session_name: String,
    pub description: Option<String>,
    pub instructor_id: Option<String>,
    pub scheduled_time: String,
    pub duration_minutes: i32,
    pub max_participants: i32,
    pub current_participants: i32,
    pub xr_environment_id: Option<String>,
    pub recording_enabled: bool,
    pub recording_url: Option<String>,
    pub status: String, // 'scheduled', 'live', 'completed', 'cancelled'
    pub access_requirements: Json,
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
        on_delete = "Cascade"
    )]
    PortalCourse,
    #[sea_orm(has_many = "super::xr_classroom_participant::Entity")]
    Participants,
}

impl Related<super::portal_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortalCourse.def()
    }
}

impl Related<super::xr_classroom_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
