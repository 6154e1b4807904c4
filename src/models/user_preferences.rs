use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: &str = "light";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_preferences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub preference_id: String,
    #[sea_orm(unique)]
    pub user_id: String,
    pub theme: String, // 'light', 'dark', 'auto'
    pub notifications: Json,
    pub privacy_settings: Json,
    pub learning_preferences: Json,
    pub accessibility_settings: Json,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn default_notifications() -> Json {
    serde_json::json!({ "email": true, "push": true, "sms": false })
}

pub fn default_privacy_settings() -> Json {
    serde_json::json!({ "profile_public": true, "progress_public": false })
}
