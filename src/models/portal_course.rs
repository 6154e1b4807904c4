use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LEVEL: &str = "Introductory";
pub const DEFAULT_DURATION_WEEKS: i32 = 4;
pub const DEFAULT_XP_REWARD: i32 = 100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portal_courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub portal_course_id: String,
    pub course_spec_id: String,
    pub faculty_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub level: String,
    pub duration_weeks: i32,
    pub xp_reward: i32,
    pub scroll_coin_cost: f64,
    pub prerequisites: Option<String>, // JSON array of course ids
    pub featured: bool,
    pub enrollment_open: bool,
    pub enrollment_count: i32,
    pub rating: f64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portal_enrollment::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::ai_tutor_session::Entity")]
    TutorSessions,
    #[sea_orm(has_many = "super::xr_classroom::Entity")]
    XrClassrooms,
}

impl Related<super::portal_enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::ai_tutor_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TutorSessions.def()
    }
}

impl Related<super::xr_classroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::XrClassrooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// DTO with the prerequisite list decoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalCourse {
    pub portal_course_id: String,
    pub course_spec_id: String,
    pub faculty_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub level: String,
    pub duration_weeks: i32,
    pub xp_reward: i32,
    pub scroll_coin_cost: f64,
    pub prerequisites: Vec<String>,
    pub featured: bool,
    pub enrollment_open: bool,
    pub enrollment_count: i32,
    pub rating: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Model> for PortalCourse {
    fn from(model: Model) -> Self {
        let prerequisites: Vec<String> = model
            .prerequisites
            .map(|s| serde_json::from_str(&s).unwrap_or_default())
            .unwrap_or_default();

        Self {
            portal_course_id: model.portal_course_id,
            course_spec_id: model.course_spec_id,
            faculty_id: model.faculty_id,
            title: model.title,
            description: model.description,
            level: model.level,
            duration_weeks: model.duration_weeks,
            xp_reward: model.xp_reward,
            scroll_coin_cost: model.scroll_coin_cost,
            prerequisites,
            featured: model.featured,
            enrollment_open: model.enrollment_open,
            enrollment_count: model.enrollment_count,
            rating: model.rating,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
