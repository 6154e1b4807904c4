use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Relationships between portal tables are enforced by the engine
    execute(&db, "PRAGMA foreign_keys = ON").await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    tracing::debug!("portal schema ready");
    Ok(db)
}

async fn execute(db: &DatabaseConnection, sql: &str) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        sql.to_owned(),
    ))
    .await?;
    Ok(())
}

async fn execute_all(db: &DatabaseConnection, statements: &[&str]) -> Result<(), DbErr> {
    for sql in statements {
        execute(db, sql).await?;
    }
    Ok(())
}

/// Tables created by `run_migrations`, in dependency order.
pub const PORTAL_TABLES: [&str; 11] = [
    "portal_courses",
    "portal_enrollments",
    "ai_tutor_sessions",
    "scroll_nodes",
    "scholarships",
    "scholarship_applications",
    "xr_classrooms",
    "xr_classroom_participants",
    "faculty_members",
    "user_preferences",
    "portal_analytics",
];

/// Create every portal table and index if missing. Safe to run repeatedly.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Portal courses (course_spec_id references the external course spec catalogue)
    execute_all(
        db,
        &[
            r#"
            CREATE TABLE IF NOT EXISTS portal_courses (
                portal_course_id TEXT PRIMARY KEY NOT NULL,
                course_spec_id TEXT NOT NULL,
                faculty_id TEXT,
                title TEXT NOT NULL,
                description TEXT,
                level TEXT NOT NULL DEFAULT 'Introductory',
                duration_weeks INTEGER NOT NULL DEFAULT 4,
                xp_reward INTEGER NOT NULL DEFAULT 100,
                scroll_coin_cost REAL NOT NULL DEFAULT 0.0,
                prerequisites TEXT,
                featured INTEGER NOT NULL DEFAULT 0,
                enrollment_open INTEGER NOT NULL DEFAULT 1,
                enrollment_count INTEGER NOT NULL DEFAULT 0,
                rating REAL NOT NULL DEFAULT 0.0,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now'))
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_portal_courses_course_spec_id ON portal_courses(course_spec_id)",
            "CREATE INDEX IF NOT EXISTS idx_portal_courses_faculty_id ON portal_courses(faculty_id)",
            "CREATE INDEX IF NOT EXISTS idx_portal_courses_featured ON portal_courses(featured)",
            "CREATE INDEX IF NOT EXISTS idx_portal_courses_enrollment_open ON portal_courses(enrollment_open)",
            "CREATE INDEX IF NOT EXISTS idx_portal_courses_level ON portal_courses(level)",
        ],
    )
    .await?;

    // Enrollments: one per (user, course)
    execute_all(
        db,
        &[
            r#"
            CREATE TABLE IF NOT EXISTS portal_enrollments (
                enrollment_id TEXT PRIMARY KEY NOT NULL,
                user_id TEXT NOT NULL,
                portal_course_id TEXT NOT NULL,
                enrollment_date TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                completion_date TEXT,
                progress_percentage REAL NOT NULL DEFAULT 0.0,
                xp_earned INTEGER NOT NULL DEFAULT 0,
                scroll_coins_earned REAL NOT NULL DEFAULT 0.0,
                current_lesson_id TEXT,
                status TEXT NOT NULL DEFAULT 'active',
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                UNIQUE(user_id, portal_course_id),
                FOREIGN KEY (portal_course_id) REFERENCES portal_courses(portal_course_id) ON DELETE CASCADE
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_portal_enrollments_user_id ON portal_enrollments(user_id)",
            "CREATE INDEX IF NOT EXISTS idx_portal_enrollments_portal_course_id ON portal_enrollments(portal_course_id)",
            "CREATE INDEX IF NOT EXISTS idx_portal_enrollments_status ON portal_enrollments(status)",
            "CREATE INDEX IF NOT EXISTS idx_portal_enrollments_enrollment_date ON portal_enrollments(enrollment_date)",
        ],
    )
    .await?;

    // AI tutor sessions (course link is optional)
    execute_all(
        db,
        &[
            r#"
            CREATE TABLE IF NOT EXISTS ai_tutor_sessions (
                session_id TEXT PRIMARY KEY NOT NULL,
                user_id TEXT NOT NULL,
                portal_course_id TEXT,
                tutor_type TEXT NOT NULL,
                faculty_context TEXT,
                session_data TEXT NOT NULL DEFAULT '{}',
                conversation_history TEXT NOT NULL DEFAULT '[]',
                started_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                ended_at TEXT,
                satisfaction_rating INTEGER,
                status TEXT NOT NULL DEFAULT 'active',
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                FOREIGN KEY (portal_course_id) REFERENCES portal_courses(portal_course_id) ON DELETE SET NULL
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_ai_tutor_sessions_user_id ON ai_tutor_sessions(user_id)",
            "CREATE INDEX IF NOT EXISTS idx_ai_tutor_sessions_portal_course_id ON ai_tutor_sessions(portal_course_id)",
            "CREATE INDEX IF NOT EXISTS idx_ai_tutor_sessions_tutor_type ON ai_tutor_sessions(tutor_type)",
            "CREATE INDEX IF NOT EXISTS idx_ai_tutor_sessions_started_at ON ai_tutor_sessions(started_at)",
            "CREATE INDEX IF NOT EXISTS idx_ai_tutor_sessions_status ON ai_tutor_sessions(status)",
        ],
    )
    .await?;

    // Scroll nodes (distributed campuses)
    execute_all(
        db,
        &[
            r#"
            CREATE TABLE IF NOT EXISTS scroll_nodes (
                node_id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                location TEXT,
                country TEXT,
                coordinator_id TEXT,
                status TEXT NOT NULL DEFAULT 'active',
                sync_enabled INTEGER NOT NULL DEFAULT 1,
                node_type TEXT NOT NULL DEFAULT 'standard',
                connectivity_level TEXT NOT NULL DEFAULT 'high',
                last_sync_at TEXT,
                configuration TEXT NOT NULL DEFAULT '{}',
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now'))
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_scroll_nodes_coordinator_id ON scroll_nodes(coordinator_id)",
            "CREATE INDEX IF NOT EXISTS idx_scroll_nodes_status ON scroll_nodes(status)",
            "CREATE INDEX IF NOT EXISTS idx_scroll_nodes_country ON scroll_nodes(country)",
            "CREATE INDEX IF NOT EXISTS idx_scroll_nodes_node_type ON scroll_nodes(node_type)",
            "CREATE INDEX IF NOT EXISTS idx_scroll_nodes_connectivity_level ON scroll_nodes(connectivity_level)",
        ],
    )
    .await?;

    // Scholarships and their applications
    execute_all(
        db,
        &[
            r#"
            CREATE TABLE IF NOT EXISTS scholarships (
                scholarship_id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                description TEXT,
                amount REAL,
                currency TEXT NOT NULL DEFAULT 'ScrollCoin',
                scholarship_type TEXT NOT NULL DEFAULT 'merit',
                eligibility_criteria TEXT NOT NULL DEFAULT '{}',
                application_deadline TEXT,
                max_recipients INTEGER,
                current_recipients INTEGER NOT NULL DEFAULT 0,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_by TEXT,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now'))
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_scholarships_scholarship_type ON scholarships(scholarship_type)",
            "CREATE INDEX IF NOT EXISTS idx_scholarships_is_active ON scholarships(is_active)",
            "CREATE INDEX IF NOT EXISTS idx_scholarships_application_deadline ON scholarships(application_deadline)",
            "CREATE INDEX IF NOT EXISTS idx_scholarships_created_by ON scholarships(created_by)",
            r#"
            CREATE TABLE IF NOT EXISTS scholarship_applications (
                application_id TEXT PRIMARY KEY NOT NULL,
                scholarship_id TEXT NOT NULL,
                user_id TEXT NOT NULL,
                application_data TEXT NOT NULL DEFAULT '{}',
                status TEXT NOT NULL DEFAULT 'submitted',
                applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                reviewed_at TEXT,
                reviewed_by TEXT,
                decision_reason TEXT,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                UNIQUE(scholarship_id, user_id),
                FOREIGN KEY (scholarship_id) REFERENCES scholarships(scholarship_id) ON DELETE CASCADE
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_scholarship_applications_scholarship_id ON scholarship_applications(scholarship_id)",
            "CREATE INDEX IF NOT EXISTS idx_scholarship_applications_user_id ON scholarship_applications(user_id)",
            "CREATE INDEX IF NOT EXISTS idx_scholarship_applications_status ON scholarship_applications(status)",
            "CREATE INDEX IF NOT EXISTS idx_scholarship_applications_applied_at ON scholarship_applications(applied_at)",
        ],
    )
    .await?;

    // XR classrooms and participants
    execute_all(
        db,
        &[
            r#"
            CREATE TABLE IF NOT EXISTS xr_classrooms (
                classroom_id TEXT PRIMARY KEY NOT NULL,
                portal_course_id TEXT NOT NULL,
                session_name TEXT NOT NULL,
                description TEXT,
                instructor_id TEXT,
                scheduled_time TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL DEFAULT 60,
                max_participants INTEGER NOT NULL DEFAULT 30,
                current_participants INTEGER NOT NULL DEFAULT 0,
                xr_environment_id TEXT,
                recording_enabled INTEGER NOT NULL DEFAULT 1,
                recording_url TEXT,
                status TEXT NOT NULL DEFAULT 'scheduled',
                access_requirements TEXT NOT NULL DEFAULT '{}',
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                FOREIGN KEY (portal_course_id) REFERENCES portal_courses(portal_course_id) ON DELETE CASCADE
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_xr_classrooms_portal_course_id ON xr_classrooms(portal_course_id)",
            "CREATE INDEX IF NOT EXISTS idx_xr_classrooms_instructor_id ON xr_classrooms(instructor_id)",
            "CREATE INDEX IF NOT EXISTS idx_xr_classrooms_scheduled_time ON xr_classrooms(scheduled_time)",
            "CREATE INDEX IF NOT EXISTS idx_xr_classrooms_status ON xr_classrooms(status)",
            r#"
            CREATE TABLE IF NOT EXISTS xr_classroom_participants (
                participant_id TEXT PRIMARY KEY NOT NULL,
                classroom_id TEXT NOT NULL,
                user_id TEXT NOT NULL,
                joined_at TEXT,
                left_at TEXT,
                participation_score REAL,
                interaction_data TEXT NOT NULL DEFAULT '{}',
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                UNIQUE(classroom_id, user_id),
                FOREIGN KEY (classroom_id) REFERENCES xr_classrooms(classroom_id) ON DELETE CASCADE
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_xr_classroom_participants_classroom_id ON xr_classroom_participants(classroom_id)",
            "CREATE INDEX IF NOT EXISTS idx_xr_classroom_participants_user_id ON xr_classroom_participants(user_id)",
            "CREATE INDEX IF NOT EXISTS idx_xr_classroom_participants_joined_at ON xr_classroom_participants(joined_at)",
        ],
    )
    .await?;

    // Faculty membership: one row per (user, faculty)
    execute_all(
        db,
        &[
            r#"
            CREATE TABLE IF NOT EXISTS faculty_members (
                member_id TEXT PRIMARY KEY NOT NULL,
                user_id TEXT NOT NULL,
                faculty_id TEXT NOT NULL,
                title TEXT,
                specializations TEXT,
                bio TEXT,
                office_hours TEXT NOT NULL DEFAULT '{}',
                ai_dean_integration INTEGER NOT NULL DEFAULT 0,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                UNIQUE(user_id, faculty_id)
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_faculty_members_user_id ON faculty_members(user_id)",
            "CREATE INDEX IF NOT EXISTS idx_faculty_members_faculty_id ON faculty_members(faculty_id)",
            "CREATE INDEX IF NOT EXISTS idx_faculty_members_is_active ON faculty_members(is_active)",
        ],
    )
    .await?;

    // User preferences: one row per user
    execute_all(
        db,
        &[
            r#"
            CREATE TABLE IF NOT EXISTS user_preferences (
                preference_id TEXT PRIMARY KEY NOT NULL,
                user_id TEXT NOT NULL UNIQUE,
                theme TEXT NOT NULL DEFAULT 'light',
                notifications TEXT NOT NULL DEFAULT '{"email": true, "push": true, "sms": false}',
                privacy_settings TEXT NOT NULL DEFAULT '{"profile_public": true, "progress_public": false}',
                learning_preferences TEXT NOT NULL DEFAULT '{}',
                accessibility_settings TEXT NOT NULL DEFAULT '{}',
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now'))
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_user_preferences_user_id ON user_preferences(user_id)",
        ],
    )
    .await?;

    // Analytics event log (append-only)
    execute_all(
        db,
        &[
            r#"
            CREATE TABLE IF NOT EXISTS portal_analytics (
                analytics_id TEXT PRIMARY KEY NOT NULL,
                user_id TEXT NOT NULL,
                event_type TEXT NOT NULL,
                event_data TEXT NOT NULL DEFAULT '{}',
                session_id TEXT,
                ip_address TEXT,
                user_agent TEXT,
                timestamp TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now')),
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f000Z', 'now'))
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_portal_analytics_user_id ON portal_analytics(user_id)",
            "CREATE INDEX IF NOT EXISTS idx_portal_analytics_event_type ON portal_analytics(event_type)",
            "CREATE INDEX IF NOT EXISTS idx_portal_analytics_timestamp ON portal_analytics(timestamp)",
            "CREATE INDEX IF NOT EXISTS idx_portal_analytics_session_id ON portal_analytics(session_id)",
        ],
    )
    .await?;

    Ok(())
}

/// Row count per portal table, in `PORTAL_TABLES` order.
pub async fn table_counts(db: &DatabaseConnection) -> Result<Vec<(&'static str, i64)>, DbErr> {
    let mut counts = Vec::with_capacity(PORTAL_TABLES.len());
    for table in PORTAL_TABLES {
        let row = db
            .query_one(Statement::from_string(
                db.get_database_backend(),
                format!("SELECT COUNT(*) AS count FROM {}", table),
            ))
            .await?;
        let count = match row {
            Some(row) => row.try_get::<i64>("", "count")?,
            None => 0,
        };
        counts.push((table, count));
    }
    Ok(counts)
}
