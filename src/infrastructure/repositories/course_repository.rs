//! SeaORM implementation of CourseRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{encode_list, new_id, now};
use crate::domain::{CourseFilter, CourseRepository, CourseUpdate, DomainError, NewCourse, require};
use crate::models::portal_course::{
    ActiveModel, Column, DEFAULT_DURATION_WEEKS, DEFAULT_LEVEL, DEFAULT_XP_REWARD,
    Entity as CourseEntity,
};
use crate::models::PortalCourse;

/// SeaORM-based implementation of CourseRepository
pub struct SeaOrmCourseRepository {
    db: DatabaseConnection,
}

impl SeaOrmCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for SeaOrmCourseRepository {
    async fn create(&self, input: NewCourse) -> Result<PortalCourse, DomainError> {
        require("course_spec_id", &input.course_spec_id)?;
        require("title", &input.title)?;

        let now = now();
        let course = ActiveModel {
            portal_course_id: Set(new_id()),
            course_spec_id: Set(input.course_spec_id),
            faculty_id: Set(input.faculty_id),
            title: Set(input.title),
            description: Set(input.description),
            level: Set(input.level.unwrap_or_else(|| DEFAULT_LEVEL.to_string())),
            duration_weeks: Set(input.duration_weeks.unwrap_or(DEFAULT_DURATION_WEEKS)),
            xp_reward: Set(input.xp_reward.unwrap_or(DEFAULT_XP_REWARD)),
            scroll_coin_cost: Set(input.scroll_coin_cost.unwrap_or(0.0)),
            prerequisites: Set(encode_list(&input.prerequisites)?),
            featured: Set(input.featured.unwrap_or(false)),
            enrollment_open: Set(input.enrollment_open.unwrap_or(true)),
            enrollment_count: Set(0),
            rating: Set(0.0),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let result = course.insert(&self.db).await?;
        tracing::debug!(course_id = %result.portal_course_id, "portal course created");

        Ok(result.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PortalCourse>, DomainError> {
        let course = CourseEntity::find_by_id(id.to_owned()).one(&self.db).await?;
        Ok(course.map(PortalCourse::from))
    }

    async fn find_all(&self, filter: CourseFilter) -> Result<Vec<PortalCourse>, DomainError> {
        let mut condition = Condition::all();

        if let Some(spec_id) = filter.course_spec_id {
            condition = condition.add(Column::CourseSpecId.eq(spec_id));
        }
        if let Some(faculty_id) = filter.faculty_id {
            condition = condition.add(Column::FacultyId.eq(faculty_id));
        }
        if let Some(level) = filter.level {
            condition = condition.add(Column::Level.eq(level));
        }
        if let Some(featured) = filter.featured {
            condition = condition.add(Column::Featured.eq(featured));
        }
        if let Some(open) = filter.enrollment_open {
            condition = condition.add(Column::EnrollmentOpen.eq(open));
        }

        let courses = CourseEntity::find()
            .filter(condition)
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(courses.into_iter().map(PortalCourse::from).collect())
    }

    async fn update(&self, id: &str, input: CourseUpdate) -> Result<PortalCourse, DomainError> {
        let existing = CourseEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(title) = input.title {
            require("title", &title)?;
            active.title = Set(title);
        }
        if let Some(faculty_id) = input.faculty_id {
            active.faculty_id = Set(faculty_id);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(level) = input.level {
            active.level = Set(level);
        }
        if let Some(weeks) = input.duration_weeks {
            active.duration_weeks = Set(weeks);
        }
        if let Some(xp) = input.xp_reward {
            active.xp_reward = Set(xp);
        }
        if let Some(cost) = input.scroll_coin_cost {
            active.scroll_coin_cost = Set(cost);
        }
        if let Some(prerequisites) = input.prerequisites {
            active.prerequisites = Set(encode_list(&prerequisites)?);
        }
        if let Some(featured) = input.featured {
            active.featured = Set(featured);
        }
        if let Some(open) = input.enrollment_open {
            active.enrollment_open = Set(open);
        }
        if let Some(rating) = input.rating {
            active.rating = Set(rating);
        }
        active.updated_at = Set(now());

        let result = active.update(&self.db).await?;
        Ok(result.into())
    }
}
