//! Column defaults for every portal table
//!
//! Each entity is checked twice: through its repository with only the required
//! inputs, and through a raw ORM insert that leaves every optional column unset
//! so the schema defaults apply.

use chrono::Utc;
use scroll_portal::db;
use scroll_portal::domain::{
    NewAnalyticsEvent, NewCourse, NewEnrollment, NewFacultyMember, NewNode, NewParticipant,
    NewScholarship, NewScholarshipApplication, NewTutorSession, NewUserPreferences,
    NewXrClassroom,
};
use scroll_portal::infrastructure::AppState;
use scroll_portal::models::{
    ai_tutor_session, faculty_member, portal_analytics, portal_course, portal_enrollment,
    scholarship, scholarship_application, scroll_node, user_preferences, xr_classroom,
    xr_classroom_participant,
};
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use serde_json::json;

async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

async fn setup_state() -> AppState {
    AppState::new(setup_test_db().await)
}

// Minimal raw course row so child tables have something to point at
async fn insert_raw_course(db: &DatabaseConnection, id: &str) {
    let course = portal_course::ActiveModel {
        portal_course_id: Set(id.to_string()),
        course_spec_id: Set("spec-raw".to_string()),
        title: Set("Raw Course".to_string()),
        ..Default::default()
    };
    portal_course::Entity::insert(course)
        .exec(db)
        .await
        .expect("Failed to insert raw course");
}

fn new_course(title: &str) -> NewCourse {
    NewCourse {
        course_spec_id: "spec-001".to_string(),
        title: title.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_course_defaults_via_repository() {
    let state = setup_state().await;

    let course = state.course_repo.create(new_course("Test Course")).await.unwrap();

    assert_eq!(course.level, "Introductory");
    assert_eq!(course.duration_weeks, 4);
    assert_eq!(course.xp_reward, 100);
    assert_eq!(course.scroll_coin_cost, 0.0);
    assert_eq!(course.enrollment_count, 0);
    assert_eq!(course.rating, 0.0);
    assert!(!course.featured);
    assert!(course.enrollment_open);
    assert!(course.prerequisites.is_empty());
    assert!(course.faculty_id.is_none());
    assert!(!course.created_at.is_empty());
    assert_eq!(course.created_at, course.updated_at);
}

#[tokio::test]
async fn test_course_defaults_via_raw_insert() {
    let db = setup_test_db().await;
    insert_raw_course(&db, "course-raw").await;

    let course = portal_course::Entity::find_by_id("course-raw".to_string())
        .one(&db)
        .await
        .unwrap()
        .expect("course row missing");

    assert_eq!(course.level, portal_course::DEFAULT_LEVEL);
    assert_eq!(course.duration_weeks, portal_course::DEFAULT_DURATION_WEEKS);
    assert_eq!(course.xp_reward, portal_course::DEFAULT_XP_REWARD);
    assert_eq!(course.scroll_coin_cost, 0.0);
    assert_eq!(course.enrollment_count, 0);
    assert!(!course.featured);
    assert!(course.enrollment_open);
    assert!(course.prerequisites.is_none());
    assert!(!course.created_at.is_empty());
}

#[tokio::test]
async fn test_enrollment_defaults() {
    let state = setup_state().await;
    let course = state.course_repo.create(new_course("Enroll Me")).await.unwrap();

    let enrollment = state
        .enrollment_repo
        .enroll(NewEnrollment {
            user_id: "user-1".to_string(),
            portal_course_id: course.portal_course_id.clone(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(enrollment.progress_percentage, 0.0);
    assert_eq!(enrollment.xp_earned, 0);
    assert_eq!(enrollment.scroll_coins_earned, 0.0);
    assert_eq!(enrollment.status, "active");
    assert!(enrollment.completion_date.is_none());
    assert!(enrollment.current_lesson_id.is_none());
    assert!(!enrollment.enrollment_date.is_empty());

    // Raw insert relies on the schema defaults alone
    insert_raw_course(state.db(), "course-raw").await;
    let raw = portal_enrollment::ActiveModel {
        enrollment_id: Set("enrollment-raw".to_string()),
        user_id: Set("user-2".to_string()),
        portal_course_id: Set("course-raw".to_string()),
        ..Default::default()
    };
    portal_enrollment::Entity::insert(raw)
        .exec(state.db())
        .await
        .unwrap();

    let stored = portal_enrollment::Entity::find_by_id("enrollment-raw".to_string())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.progress_percentage, 0.0);
    assert_eq!(stored.xp_earned, 0);
    assert_eq!(stored.status, portal_enrollment::STATUS_ACTIVE);
    assert!(!stored.enrollment_date.is_empty());
}

#[tokio::test]
async fn test_tutor_session_defaults() {
    let state = setup_state().await;

    let session = state
        .tutor_repo
        .create(NewTutorSession {
            user_id: "user-1".to_string(),
            tutor_type: "ai_dean".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(session.session_data, json!({}));
    assert_eq!(session.conversation_history, json!([]));
    assert_eq!(session.status, "active");
    assert!(session.ended_at.is_none());
    assert!(session.portal_course_id.is_none());
    assert!(session.satisfaction_rating.is_none());

    let raw = ai_tutor_session::ActiveModel {
        session_id: Set("session-raw".to_string()),
        user_id: Set("user-2".to_string()),
        tutor_type: Set("faculty".to_string()),
        ..Default::default()
    };
    ai_tutor_session::Entity::insert(raw)
        .exec(state.db())
        .await
        .unwrap();

    let stored = ai_tutor_session::Entity::find_by_id("session-raw".to_string())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.session_data, json!({}));
    assert_eq!(stored.conversation_history, json!([]));
    assert_eq!(stored.status, ai_tutor_session::STATUS_ACTIVE);
    assert!(!stored.started_at.is_empty());
}

#[tokio::test]
async fn test_scroll_node_defaults() {
    let state = setup_state().await;

    let node = state
        .node_repo
        .create(NewNode {
            name: "Test Node".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(node.status, "active");
    assert!(node.sync_enabled);
    assert_eq!(node.node_type, "standard");
    assert_eq!(node.connectivity_level, "high");
    assert_eq!(node.configuration, json!({}));
    assert!(node.last_sync_at.is_none());

    let raw = scroll_node::ActiveModel {
        node_id: Set("node-raw".to_string()),
        name: Set("Raw Node".to_string()),
        ..Default::default()
    };
    scroll_node::Entity::insert(raw).exec(state.db()).await.unwrap();

    let stored = scroll_node::Entity::find_by_id("node-raw".to_string())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, scroll_node::DEFAULT_STATUS);
    assert!(stored.sync_enabled);
    assert_eq!(stored.node_type, scroll_node::DEFAULT_NODE_TYPE);
    assert_eq!(stored.connectivity_level, scroll_node::DEFAULT_CONNECTIVITY_LEVEL);
    assert_eq!(stored.configuration, json!({}));
}

#[tokio::test]
async fn test_scholarship_and_application_defaults() {
    let state = setup_state().await;

    let award = state
        .scholarship_repo
        .create(NewScholarship {
            name: "Test Scholarship".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(award.currency, "ScrollCoin");
    assert_eq!(award.scholarship_type, "merit");
    assert_eq!(award.current_recipients, 0);
    assert!(award.is_active);
    assert_eq!(award.eligibility_criteria, json!({}));
    assert!(award.amount.is_none());
    assert!(award.max_recipients.is_none());

    let application = state
        .scholarship_repo
        .apply(NewScholarshipApplication {
            scholarship_id: award.scholarship_id.clone(),
            user_id: "user-1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(application.status, "submitted");
    assert_eq!(application.application_data, json!({}));
    assert!(application.reviewed_at.is_none());
    assert!(application.reviewed_by.is_none());
    assert!(!application.applied_at.is_empty());

    let raw_award = scholarship::ActiveModel {
        scholarship_id: Set("award-raw".to_string()),
        name: Set("Raw Award".to_string()),
        ..Default::default()
    };
    scholarship::Entity::insert(raw_award)
        .exec(state.db())
        .await
        .unwrap();
    let raw_application = scholarship_application::ActiveModel {
        application_id: Set("application-raw".to_string()),
        scholarship_id: Set("award-raw".to_string()),
        user_id: Set("user-2".to_string()),
        ..Default::default()
    };
    scholarship_application::Entity::insert(raw_application)
        .exec(state.db())
        .await
        .unwrap();

    let stored_award = scholarship::Entity::find_by_id("award-raw".to_string())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored_award.currency, scholarship::DEFAULT_CURRENCY);
    assert_eq!(stored_award.scholarship_type, scholarship::DEFAULT_TYPE);
    assert!(stored_award.is_active);

    let stored_application =
        scholarship_application::Entity::find_by_id("application-raw".to_string())
            .one(state.db())
            .await
            .unwrap()
            .unwrap();
    assert_eq!(
        stored_application.status,
        scholarship_application::STATUS_SUBMITTED
    );
    assert_eq!(stored_application.application_data, json!({}));
}

#[tokio::test]
async fn test_xr_classroom_and_participant_defaults() {
    let state = setup_state().await;
    let course = state.course_repo.create(new_course("XR Course")).await.unwrap();

    let classroom = state
        .xr_repo
        .create(NewXrClassroom {
            portal_course_id: course.portal_course_id.clone(),
            session_name: "Test XR Session".to_string(),
            scheduled_time: Utc::now(),
            description: None,
            instructor_id: None,
            duration_minutes: None,
            max_participants: None,
            xr_environment_id: None,
            recording_enabled: None,
            access_requirements: None,
        })
        .await
        .unwrap();

    assert_eq!(classroom.duration_minutes, 60);
    assert_eq!(classroom.max_participants, 30);
    assert_eq!(classroom.current_participants, 0);
    assert!(classroom.recording_enabled);
    assert_eq!(classroom.status, "scheduled");
    assert_eq!(classroom.access_requirements, json!({}));
    assert!(classroom.recording_url.is_none());

    let participant = state
        .xr_repo
        .join(NewParticipant {
            classroom_id: classroom.classroom_id.clone(),
            user_id: "user-1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(participant.joined_at.is_some());
    assert!(participant.left_at.is_none());
    assert!(participant.participation_score.is_none());
    assert_eq!(participant.interaction_data, json!({}));

    insert_raw_course(state.db(), "course-raw").await;
    let raw_classroom = xr_classroom::ActiveModel {
        classroom_id: Set("classroom-raw".to_string()),
        portal_course_id: Set("course-raw".to_string()),
        session_name: Set("Raw Session".to_string()),
        scheduled_time: Set("2026-11-01T10:00:00.000000Z".to_string()),
        ..Default::default()
    };
    xr_classroom::Entity::insert(raw_classroom)
        .exec(state.db())
        .await
        .unwrap();
    let raw_participant = xr_classroom_participant::ActiveModel {
        participant_id: Set("participant-raw".to_string()),
        classroom_id: Set("classroom-raw".to_string()),
        user_id: Set("user-2".to_string()),
        ..Default::default()
    };
    xr_classroom_participant::Entity::insert(raw_participant)
        .exec(state.db())
        .await
        .unwrap();

    let stored = xr_classroom::Entity::find_by_id("classroom-raw".to_string())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.duration_minutes, xr_classroom::DEFAULT_DURATION_MINUTES);
    assert_eq!(stored.max_participants, xr_classroom::DEFAULT_MAX_PARTICIPANTS);
    assert_eq!(stored.current_participants, 0);
    assert!(stored.recording_enabled);
    assert_eq!(stored.status, xr_classroom::STATUS_SCHEDULED);

    let stored_participant =
        xr_classroom_participant::Entity::find_by_id("participant-raw".to_string())
            .one(state.db())
            .await
            .unwrap()
            .unwrap();
    assert!(stored_participant.joined_at.is_none());
    assert_eq!(stored_participant.interaction_data, json!({}));
}

#[tokio::test]
async fn test_faculty_member_defaults() {
    let state = setup_state().await;

    let member = state
        .faculty_repo
        .add_member(NewFacultyMember {
            user_id: "user-1".to_string(),
            faculty_id: "faculty-1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(!member.ai_dean_integration);
    assert!(member.is_active);
    assert_eq!(member.office_hours, json!({}));
    assert!(member.specializations.is_empty());
    assert!(member.title.is_none());

    let raw = faculty_member::ActiveModel {
        member_id: Set("member-raw".to_string()),
        user_id: Set("user-2".to_string()),
        faculty_id: Set("faculty-1".to_string()),
        ..Default::default()
    };
    faculty_member::Entity::insert(raw)
        .exec(state.db())
        .await
        .unwrap();

    let stored = faculty_member::Entity::find_by_id("member-raw".to_string())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.ai_dean_integration);
    assert!(stored.is_active);
    assert_eq!(stored.office_hours, json!({}));
}

#[tokio::test]
async fn test_user_preferences_defaults() {
    let state = setup_state().await;

    let prefs = state
        .preferences_repo
        .create(NewUserPreferences {
            user_id: "user-1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(prefs.theme, "light");
    assert_eq!(
        prefs.notifications,
        json!({"email": true, "push": true, "sms": false})
    );
    assert_eq!(
        prefs.privacy_settings,
        json!({"profile_public": true, "progress_public": false})
    );
    assert_eq!(prefs.learning_preferences, json!({}));
    assert_eq!(prefs.accessibility_settings, json!({}));

    let raw = user_preferences::ActiveModel {
        preference_id: Set("prefs-raw".to_string()),
        user_id: Set("user-2".to_string()),
        ..Default::default()
    };
    user_preferences::Entity::insert(raw)
        .exec(state.db())
        .await
        .unwrap();

    let stored = user_preferences::Entity::find_by_id("prefs-raw".to_string())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.theme, user_preferences::DEFAULT_THEME);
    assert_eq!(stored.notifications, user_preferences::default_notifications());
    assert_eq!(
        stored.privacy_settings,
        user_preferences::default_privacy_settings()
    );
}

#[tokio::test]
async fn test_analytics_defaults() {
    let state = setup_state().await;

    let event = state
        .analytics_repo
        .record(NewAnalyticsEvent {
            user_id: "user-1".to_string(),
            event_type: "page_view".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(event.event_data, json!({}));
    assert!(event.session_id.is_none());
    assert!(event.ip_address.is_none());
    assert!(!event.timestamp.is_empty());

    let raw = portal_analytics::ActiveModel {
        analytics_id: Set("event-raw".to_string()),
        user_id: Set("user-2".to_string()),
        event_type: Set("login".to_string()),
        ..Default::default()
    };
    portal_analytics::Entity::insert(raw)
        .exec(state.db())
        .await
        .unwrap();

    let stored = portal_analytics::Entity::find_by_id("event-raw".to_string())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.event_data, json!({}));
    assert!(!stored.timestamp.is_empty());
}

#[tokio::test]
async fn test_raw_timestamps_share_repository_format() {
    let state = setup_state().await;
    let since = Utc::now() - chrono::Duration::minutes(5);

    let recorded = state
        .analytics_repo
        .record(NewAnalyticsEvent {
            user_id: "user-1".to_string(),
            event_type: "login".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let raw = portal_analytics::ActiveModel {
        analytics_id: Set("event-raw".to_string()),
        user_id: Set("user-2".to_string()),
        event_type: Set("page_view".to_string()),
        ..Default::default()
    };
    portal_analytics::Entity::insert(raw)
        .exec(state.db())
        .await
        .unwrap();

    let stored = portal_analytics::Entity::find_by_id("event-raw".to_string())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.timestamp.len(), recorded.timestamp.len());
    assert_eq!(&stored.timestamp[10..11], "T");
    assert!(stored.timestamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&stored.timestamp).is_ok());
    assert!(chrono::DateTime::parse_from_rfc3339(&stored.created_at).is_ok());

    let recent = state
        .analytics_repo
        .find_all(scroll_portal::domain::AnalyticsFilter {
            since: Some(since),
            ..Default::default()
        })
        .await
        .unwrap();
    let ids: Vec<&str> = recent.iter().map(|e| e.analytics_id.as_str()).collect();
    assert_eq!(recent.len(), 2);
    assert!(ids.contains(&"event-raw"));
}

#[tokio::test]
async fn test_empty_lists_are_stored_as_null() {
    let state = setup_state().await;

    let course = state.course_repo.create(new_course("No Prereqs")).await.unwrap();
    let stored = portal_course::Entity::find_by_id(course.portal_course_id.clone())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert!(stored.prerequisites.is_none());
    assert!(course.prerequisites.is_empty());

    let with_prereqs = state
        .course_repo
        .create(NewCourse {
            prerequisites: vec!["intro".to_string()],
            ..new_course("Has Prereqs")
        })
        .await
        .unwrap();
    let stored = portal_course::Entity::find_by_id(with_prereqs.portal_course_id.clone())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.prerequisites.as_deref(), Some(r#"["intro"]"#));

    let member = state
        .faculty_repo
        .add_member(NewFacultyMember {
            user_id: "user-1".to_string(),
            faculty_id: "faculty-1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let stored = faculty_member::Entity::find_by_id(member.member_id.clone())
        .one(state.db())
        .await
        .unwrap()
        .unwrap();
    assert!(stored.specializations.is_none());
    assert!(member.specializations.is_empty());
}
