//! SeaORM implementation of PreferencesRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::{empty_document, new_id, now};
use crate::domain::{
    DomainError, NewUserPreferences, PreferencesRepository, PreferencesUpdate, require,
};
use crate::models::user_preferences::{
    ActiveModel, Column, DEFAULT_THEME, Entity as PreferencesEntity, Model, default_notifications,
    default_privacy_settings,
};

/// SeaORM-based implementation of PreferencesRepository
pub struct SeaOrmPreferencesRepository {
    db: DatabaseConnection,
}

impl SeaOrmPreferencesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PreferencesRepository for SeaOrmPreferencesRepository {
    async fn create(&self, input: NewUserPreferences) -> Result<Model, DomainError> {
        require("user_id", &input.user_id)?;

        let now = now();
        let preferences = ActiveModel {
            preference_id: Set(new_id()),
            user_id: Set(input.user_id),
            theme: Set(input.theme.unwrap_or_else(|| DEFAULT_THEME.to_string())),
            notifications: Set(input.notifications.unwrap_or_else(default_notifications)),
            privacy_settings: Set(input
                .privacy_settings
                .unwrap_or_else(default_privacy_settings)),
            learning_preferences: Set(input.learning_preferences.unwrap_or_else(empty_document)),
            accessibility_settings: Set(input
                .accessibility_settings
                .unwrap_or_else(empty_document)),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        Ok(preferences.insert(&self.db).await?)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Option<Model>, DomainError> {
        Ok(PreferencesEntity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await?)
    }

    async fn get_or_create(&self, user_id: &str) -> Result<Model, DomainError> {
        if let Some(existing) = self.find_by_user(user_id).await? {
            return Ok(existing);
        }

        let created = self
            .create(NewUserPreferences {
                user_id: user_id.to_string(),
                ..Default::default()
            })
            .await;

        match created {
            Ok(preferences) => Ok(preferences),
            // Another writer created the row between our read and insert
            Err(DomainError::Conflict(_)) => self
                .find_by_user(user_id)
                .await?
                .ok_or(DomainError::NotFound),
            Err(e) => Err(e),
        }
    }

    async fn update(&self, user_id: &str, input: PreferencesUpdate) -> Result<Model, DomainError> {
        let existing = self
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(theme) = input.theme {
            active.theme = Set(theme);
        }
        if let Some(notifications) = input.notifications {
            active.notifications = Set(notifications);
        }
        if let Some(privacy) = input.privacy_settings {
            active.privacy_settings = Set(privacy);
        }
        if let Some(learning) = input.learning_preferences {
            active.learning_preferences = Set(learning);
        }
        if let Some(accessibility) = input.accessibility_settings {
            active.accessibility_settings = Set(accessibility);
        }
        active.updated_at = Set(now());

        Ok(active.update(&self.db).await?)
    }
}
