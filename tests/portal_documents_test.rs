//! JSON document columns keep their structure through a store/load cycle

use chrono::Utc;
use scroll_portal::db;
use scroll_portal::domain::{
    NewCourse, NewFacultyMember, NewNode, NewParticipant, NewScholarship,
    NewScholarshipApplication, NewTutorSession, NewUserPreferences, NewXrClassroom,
    ParticipantExit,
};
use scroll_portal::infrastructure::AppState;
use serde_json::json;

async fn setup_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

#[tokio::test]
async fn test_tutor_session_documents_round_trip() {
    let state = setup_state().await;

    let session_data = json!({
        "topic": "Hebrew Grammar",
        "difficulty": "intermediate",
        "progress": {
            "completed_exercises": 5,
            "total_exercises": 10,
            "scores": [85, 92, 78, 95, 88]
        }
    });
    let history = vec![
        json!({"role": "user", "content": "Explain the qal stem"}),
        json!({"role": "assistant", "content": "The qal is the simple active stem.", "tokens": 12}),
    ];

    let created = state
        .tutor_repo
        .create(NewTutorSession {
            user_id: "user-1".to_string(),
            tutor_type: "ai_dean".to_string(),
            faculty_context: Some("languages".to_string()),
            session_data: Some(session_data.clone()),
            conversation_history: history.clone(),
            ..Default::default()
        })
        .await
        .unwrap();

    let loaded = state
        .tutor_repo
        .find_by_id(&created.session_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded.session_data, session_data);
    assert_eq!(loaded.session_data["progress"]["scores"][3], json!(95));
    assert_eq!(loaded.conversation_history, json!(history));
    assert_eq!(loaded.faculty_context.as_deref(), Some("languages"));
}

#[tokio::test]
async fn test_node_configuration_round_trips() {
    let state = setup_state().await;

    let configuration = json!({
        "sync_schedule": {"interval_minutes": 30, "windows": ["02:00-04:00", "14:00-15:00"]},
        "storage": {"offline_cache_mb": 4096, "compression": null},
        "features": ["xr", "ai_tutor", "offline_exams"],
        "bandwidth_limit": 2.5,
        "mirrors": [{"host": "mirror-a", "priority": 1}, {"host": "mirror-b", "priority": 2}]
    });

    let node = state
        .node_repo
        .create(NewNode {
            name: "Configured Node".to_string(),
            country: Some("GH".to_string()),
            configuration: Some(configuration.clone()),
            ..Default::default()
        })
        .await
        .unwrap();

    let loaded = state.node_repo.find_by_id(&node.node_id).await.unwrap().unwrap();
    assert_eq!(loaded.configuration, configuration);
    assert!(loaded.configuration["storage"]["compression"].is_null());
}

#[tokio::test]
async fn test_scholarship_documents_round_trip() {
    let state = setup_state().await;

    let criteria = json!({
        "min_gpa": 3.5,
        "regions": ["West Africa", "South Asia"],
        "essay": {"required": true, "max_words": 800}
    });
    let award = state
        .scholarship_repo
        .create(NewScholarship {
            name: "Regional Award".to_string(),
            amount: Some(1250.75),
            eligibility_criteria: Some(criteria.clone()),
            ..Default::default()
        })
        .await
        .unwrap();

    let application_data = json!({
        "essay": "Why I study",
        "references": [{"name": "Dr. A", "email": "a@example.org"}],
        "gpa": 3.8
    });
    let application = state
        .scholarship_repo
        .apply(NewScholarshipApplication {
            scholarship_id: award.scholarship_id.clone(),
            user_id: "user-1".to_string(),
            application_data: Some(application_data.clone()),
            ..Default::default()
        })
        .await
        .unwrap();

    let loaded_award = state
        .scholarship_repo
        .find_by_id(&award.scholarship_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded_award.eligibility_criteria, criteria);
    assert_eq!(loaded_award.amount, Some(1250.75));

    let loaded_application = state
        .scholarship_repo
        .find_application(&application.application_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded_application.application_data, application_data);
}

#[tokio::test]
async fn test_classroom_documents_round_trip() {
    let state = setup_state().await;
    let course = state
        .course_repo
        .create(NewCourse {
            course_spec_id: "spec-xr".to_string(),
            title: "XR".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let requirements = json!({"headset": ["quest", "vision"], "min_bandwidth_mbps": 20});
    let classroom = state
        .xr_repo
        .create(NewXrClassroom {
            portal_course_id: course.portal_course_id.clone(),
            session_name: "Temple walkthrough".to_string(),
            scheduled_time: Utc::now(),
            description: None,
            instructor_id: Some("instructor-1".to_string()),
            duration_minutes: Some(90),
            max_participants: Some(12),
            xr_environment_id: Some("temple".to_string()),
            recording_enabled: Some(false),
            access_requirements: Some(requirements.clone()),
        })
        .await
        .unwrap();
    assert_eq!(classroom.access_requirements, requirements);
    assert_eq!(classroom.duration_minutes, 90);
    assert!(!classroom.recording_enabled);

    let interactions = json!({
        "gestures": 14,
        "questions": [{"at": 120, "text": "Where is the altar?"}],
        "gaze": {"hotspots": ["altar", "veil"]}
    });
    state
        .xr_repo
        .join(NewParticipant {
            classroom_id: classroom.classroom_id.clone(),
            user_id: "user-1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let left = state
        .xr_repo
        .leave(
            &classroom.classroom_id,
            "user-1",
            ParticipantExit {
                participation_score: Some(87.5),
                interaction_data: Some(interactions.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(left.interaction_data, interactions);
    assert_eq!(left.participation_score, Some(87.5));

    let participants = state
        .xr_repo
        .list_participants(&classroom.classroom_id)
        .await
        .unwrap();
    assert_eq!(participants[0].interaction_data, interactions);
}

#[tokio::test]
async fn test_list_columns_decode_to_vectors() {
    let state = setup_state().await;

    let course = state
        .course_repo
        .create(NewCourse {
            course_spec_id: "spec-advanced".to_string(),
            title: "Advanced".to_string(),
            prerequisites: vec!["course-a".to_string(), "course-b".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();
    let loaded = state
        .course_repo
        .find_by_id(&course.portal_course_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.prerequisites, vec!["course-a", "course-b"]);

    let member = state
        .faculty_repo
        .add_member(NewFacultyMember {
            user_id: "user-1".to_string(),
            faculty_id: "faculty-1".to_string(),
            specializations: vec!["Prophetic Studies".to_string(), "Greek".to_string()],
            office_hours: Some(json!({"monday": ["09:00-11:00"], "thursday": ["14:00-16:00"]})),
            ..Default::default()
        })
        .await
        .unwrap();
    let loaded = state.faculty_repo.find_by_id(&member.member_id).await.unwrap().unwrap();
    assert_eq!(loaded.specializations, vec!["Prophetic Studies", "Greek"]);
    assert_eq!(loaded.office_hours["monday"][0], json!("09:00-11:00"));
}

#[tokio::test]
async fn test_preference_documents_round_trip() {
    let state = setup_state().await;

    let learning = json!({"pace": "fast", "languages": ["en", "he"], "reminders": {"daily": true}});
    let accessibility = json!({"font_scale": 1.25, "captions": true});

    state
        .preferences_repo
        .create(NewUserPreferences {
            user_id: "user-1".to_string(),
            theme: Some("dark".to_string()),
            learning_preferences: Some(learning.clone()),
            accessibility_settings: Some(accessibility.clone()),
            ..Default::default()
        })
        .await
        .unwrap();

    let loaded = state
        .preferences_repo
        .find_by_user("user-1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.theme, "dark");
    assert_eq!(loaded.learning_preferences, learning);
    assert_eq!(loaded.accessibility_settings, accessibility);
}
