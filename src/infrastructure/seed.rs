use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::{
    CourseFilter, DomainError, NewCourse, NewNode, NewScholarship, NewXrClassroom,
};
use crate::infrastructure::AppState;

/// Insert a small demo catalogue. Does nothing when any course already exists.
///
/// Returns `true` when rows were written.
pub async fn seed_demo_data(state: &AppState) -> Result<bool, DomainError> {
    if !state.course_repo.find_all(CourseFilter::default()).await?.is_empty() {
        tracing::debug!("portal already has courses, skipping demo seed");
        return Ok(false);
    }

    // 1. Course
    let course = state
        .course_repo
        .create(NewCourse {
            course_spec_id: "scroll-foundations-101".to_owned(),
            title: "Foundations of Scroll Learning".to_owned(),
            description: Some("Orientation course for new students".to_owned()),
            prerequisites: vec![],
            featured: Some(true),
            ..Default::default()
        })
        .await?;

    // 2. Node
    state
        .node_repo
        .create(NewNode {
            name: "Nairobi Hub".to_owned(),
            location: Some("Nairobi".to_owned()),
            country: Some("KE".to_owned()),
            configuration: Some(json!({
                "offline_cache": { "enabled": true, "max_mb": 2048 },
                "languages": ["en", "sw"]
            })),
            ..Default::default()
        })
        .await?;

    // 3. Scholarship
    state
        .scholarship_repo
        .create(NewScholarship {
            name: "First Scroll Merit Award".to_owned(),
            amount: Some(500.0),
            eligibility_criteria: Some(json!({ "min_progress": 80 })),
            application_deadline: Some(Utc::now() + Duration::days(60)),
            max_recipients: Some(10),
            ..Default::default()
        })
        .await?;

    // 4. XR classroom for the course
    state
        .xr_repo
        .create(NewXrClassroom {
            portal_course_id: course.portal_course_id.clone(),
            session_name: "Welcome session".to_owned(),
            scheduled_time: Utc::now() + Duration::days(7),
            description: None,
            instructor_id: None,
            duration_minutes: None,
            max_participants: None,
            xr_environment_id: Some("amphitheatre".to_owned()),
            recording_enabled: None,
            access_requirements: None,
        })
        .await?;

    tracing::info!(course_id = %course.portal_course_id, "demo portal data seeded");
    Ok(true)
}
