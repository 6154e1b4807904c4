//! SeaORM implementation of AnalyticsRepository

use std::net::IpAddr;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{empty_document, format_time, new_id, now};
use crate::domain::{AnalyticsFilter, AnalyticsRepository, DomainError, NewAnalyticsEvent, require};
use crate::models::portal_analytics::{ActiveModel, Column, Entity as AnalyticsEntity, Model};

/// SeaORM-based implementation of AnalyticsRepository
pub struct SeaOrmAnalyticsRepository {
    db: DatabaseConnection,
}

impl SeaOrmAnalyticsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Normalise a client address (IPv4 or IPv6) to its canonical text form.
fn parse_ip(raw: &str) -> Result<String, DomainError> {
    raw.trim()
        .parse::<IpAddr>()
        .map(|ip| ip.to_string())
        .map_err(|_| DomainError::Validation(format!("invalid ip_address: {}", raw)))
}

#[async_trait]
impl AnalyticsRepository for SeaOrmAnalyticsRepository {
    async fn record(&self, input: NewAnalyticsEvent) -> Result<Model, DomainError> {
        require("user_id", &input.user_id)?;
        require("event_type", &input.event_type)?;

        let ip_address = input.ip_address.as_deref().map(parse_ip).transpose()?;

        let now = now();
        let event = ActiveModel {
            analytics_id: Set(new_id()),
            user_id: Set(input.user_id),
            event_type: Set(input.event_type),
            event_data: Set(input.event_data.unwrap_or_else(empty_document)),
            session_id: Set(input.session_id),
            ip_address: Set(ip_address),
            user_agent: Set(input.user_agent),
            timestamp: Set(input.timestamp.map(format_time).unwrap_or_else(|| now.clone())),
            created_at: Set(now),
        };

        let result = event.insert(&self.db).await?;
        tracing::trace!(event_type = %result.event_type, "analytics event recorded");
        Ok(result)
    }

    async fn find_all(&self, filter: AnalyticsFilter) -> Result<Vec<Model>, DomainError> {
        let mut condition = Condition::all();

        if let Some(user_id) = filter.user_id {
            condition = condition.add(Column::UserId.eq(user_id));
        }
        if let Some(event_type) = filter.event_type {
            condition = condition.add(Column::EventType.eq(event_type));
        }
        if let Some(session_id) = filter.session_id {
            condition = condition.add(Column::SessionId.eq(session_id));
        }
        if let Some(since) = filter.since {
            condition = condition.add(Column::Timestamp.gte(format_time(since)));
        }

        let mut query = AnalyticsEntity::find()
            .filter(condition)
            .order_by_asc(Column::Timestamp);
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        Ok(query.all(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ip_accepts_v4_and_v6() {
        assert_eq!(parse_ip("192.168.1.1").unwrap(), "192.168.1.1");
        assert_eq!(parse_ip(" ::1 ").unwrap(), "::1");
        assert_eq!(
            parse_ip("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap(),
            "2001:db8::1"
        );
    }

    #[test]
    fn parse_ip_rejects_garbage() {
        let err = parse_ip("not-an-ip").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
