//! SeaORM implementation of NodeRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{empty_document, new_id, now};
use crate::domain::{DomainError, NewNode, NodeFilter, NodeRepository, NodeUpdate, require};
use crate::models::scroll_node::{
    ActiveModel, Column, DEFAULT_CONNECTIVITY_LEVEL, DEFAULT_NODE_TYPE, DEFAULT_STATUS,
    Entity as NodeEntity, Model,
};

/// SeaORM-based implementation of NodeRepository
pub struct SeaOrmNodeRepository {
    db: DatabaseConnection,
}

impl SeaOrmNodeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load(&self, id: &str) -> Result<Model, DomainError> {
        NodeEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)
    }
}

#[async_trait]
impl NodeRepository for SeaOrmNodeRepository {
    async fn create(&self, input: NewNode) -> Result<Model, DomainError> {
        require("name", &input.name)?;

        let now = now();
        let node = ActiveModel {
            node_id: Set(new_id()),
            name: Set(input.name),
            location: Set(input.location),
            country: Set(input.country),
            coordinator_id: Set(input.coordinator_id),
            status: Set(input.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
            sync_enabled: Set(input.sync_enabled.unwrap_or(true)),
            node_type: Set(input
                .node_type
                .unwrap_or_else(|| DEFAULT_NODE_TYPE.to_string())),
            connectivity_level: Set(input
                .connectivity_level
                .unwrap_or_else(|| DEFAULT_CONNECTIVITY_LEVEL.to_string())),
            last_sync_at: Set(None),
            configuration: Set(input.configuration.unwrap_or_else(empty_document)),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = node.insert(&self.db).await?;
        tracing::debug!(node_id = %result.node_id, name = %result.name, "scroll node registered");
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Model>, DomainError> {
        Ok(NodeEntity::find_by_id(id.to_owned()).one(&self.db).await?)
    }

    async fn find_all(&self, filter: NodeFilter) -> Result<Vec<Model>, DomainError> {
        let mut condition = Condition::all();

        if let Some(name) = filter.name {
            condition = condition.add(Column::Name.eq(name));
        }
        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status));
        }
        if let Some(country) = filter.country {
            condition = condition.add(Column::Country.eq(country));
        }
        if let Some(node_type) = filter.node_type {
            condition = condition.add(Column::NodeType.eq(node_type));
        }
        if let Some(level) = filter.connectivity_level {
            condition = condition.add(Column::ConnectivityLevel.eq(level));
        }
        if let Some(coordinator) = filter.coordinator_id {
            condition = condition.add(Column::CoordinatorId.eq(coordinator));
        }

        Ok(NodeEntity::find()
            .filter(condition)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await?)
    }

    async fn update(&self, id: &str, input: NodeUpdate) -> Result<Model, DomainError> {
        let mut active: ActiveModel = self.load(id).await?.into();

        if let Some(name) = input.name {
            require("name", &name)?;
            active.name = Set(name);
        }
        if let Some(location) = input.location {
            active.location = Set(location);
        }
        if let Some(country) = input.country {
            active.country = Set(country);
        }
        if let Some(coordinator) = input.coordinator_id {
            active.coordinator_id = Set(coordinator);
        }
        if let Some(status) = input.status {
            active.status = Set(status);
        }
        if let Some(sync_enabled) = input.sync_enabled {
            active.sync_enabled = Set(sync_enabled);
        }
        if let Some(node_type) = input.node_type {
            active.node_type = Set(node_type);
        }
        if let Some(level) = input.connectivity_level {
            active.connectivity_level = Set(level);
        }
        if let Some(configuration) = input.configuration {
            active.configuration = Set(configuration);
        }
        active.updated_at = Set(now());

        Ok(active.update(&self.db).await?)
    }

    async fn mark_synced(&self, id: &str) -> Result<Model, DomainError> {
        let mut active: ActiveModel = self.load(id).await?.into();

        let now = now();
        active.last_sync_at = Set(Some(now.clone()));
        active.updated_at = Set(now);

        let result = active.update(&self.db).await?;
        tracing::debug!(node_id = %result.node_id, "node sync recorded");
        Ok(result)
    }
}
