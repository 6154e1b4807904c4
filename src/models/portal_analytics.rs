use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only analytics event log.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portal_analytics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub analytics_id: String,
    pub user_id: String,
    pub event_type: String,
    pub event_data: Json,
    pub session_id: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub timestamp: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
