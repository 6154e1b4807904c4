use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STATUS: &str = "active";
pub const DEFAULT_NODE_TYPE: &str = "standard";
pub const DEFAULT_CONNECTIVITY_LEVEL: &str = "high";

/// A campus location in the distributed deployment.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scroll_nodes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub node_id: String,
    pub name: String,
    pub location: Option<String>,
    pub country: Option<String>,
    pub coordinator_id: Option<String>,
    pub status: String,
    pub sync_enabled: bool,
    pub node_type: String,          // 'standard', 'rural', 'urban', 'mobile'
    pub connectivity_level: String, // 'high', 'medium', 'low', 'offline'
    pub last_sync_at: Option<String>,
    pub configuration: Json,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
