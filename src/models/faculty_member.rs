use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "faculty_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub member_id: String,
    pub user_id: String,
    pub faculty_id: String,
    pub title: Option<String>,
    pub specializations: Option<String>, // JSON array
    pub bio: Option<String>,
    pub office_hours: Json,
    pub ai_dean_integration: bool,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyMember {
    pub member_id: String,
    pub user_id: String,
    pub faculty_id: String,
    pub title: Option<String>,
    pub specializations: Vec<String>,
    pub bio: Option<String>,
    pub office_hours: Json,
    pub ai_dean_integration: bool,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Model> for FacultyMember {
    fn from(model: Model) -> Self {
        let specializations: Vec<String> = model
            .specializations
            .map(|s| serde_json::from_str(&s).unwrap_or_default())
            .unwrap_or_default();

        Self {
            member_id: model.member_id,
            user_id: model.user_id,
            faculty_id: model.faculty_id,
            title: model.title,
            specializations,
            bio: model.bio,
            office_hours: model.office_hours,
            ai_dean_integration: model.ai_dean_integration,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
