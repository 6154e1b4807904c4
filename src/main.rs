use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scroll_portal::infrastructure::AppState;
use scroll_portal::{config, db, seed};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scroll_portal=debug,sea_orm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let cli_profile = args
        .iter()
        .position(|arg| arg == "--profile")
        .and_then(|pos| args.get(pos + 1).cloned());

    let config = config::Config::from_lookup(|key| match (key, &cli_profile) {
        ("PROFILE", Some(profile)) => Some(profile.clone()),
        _ => std::env::var(key).ok(),
    });
    tracing::info!(profile = %config.profile, "starting scroll portal");

    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database {}: {}", config.database_url, e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(db);

    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        match seed::seed_demo_data(&state).await {
            Ok(true) => tracing::info!("Demo data seeded successfully."),
            Ok(false) => tracing::info!("Demo data already present."),
            Err(e) => tracing::error!("Failed to seed data: {}", e),
        }
    }

    match db::table_counts(state.db()).await {
        Ok(counts) => {
            for (table, count) in counts {
                tracing::info!(table, count, "portal table");
            }
        }
        Err(e) => {
            tracing::error!("Failed to summarise tables: {}", e);
            std::process::exit(1);
        }
    }
}
