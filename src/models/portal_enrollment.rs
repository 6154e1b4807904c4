use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "active";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portal_enrollments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub enrollment_id: String,
    pub user_id: String,
    pub portal_course_id: String,
    pub enrollment_date: String,
    pub completion_date: Option<String>,
    pub progress_percentage: f64,
    pub xp_earned: i32,
    pub scroll_coins_earned: f64,
    pub current_lesson_id: Option<String>,
    pub status: String, // 'active', 'completed', 'dropped'
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
}

impl Related<super::portal_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortalCourse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
