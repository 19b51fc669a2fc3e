use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use importer::{ActivityImporter, ImportContext, StravaClient, StravaConfig, StravaImporter};
use sqlx::postgres::PgPoolOptions;
use storage::models::Zone;
use storage::services::pace_zones;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "runlog-import")]
#[command(about = "Runlog activity import and pace zone tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List a user's Strava activities for one day
    Activities {
        #[arg(long)]
        user_id: Uuid,

        #[arg(long)]
        date: NaiveDate,

        /// Strava activity type, e.g. Run
        #[arg(long)]
        activity_type: Option<String>,
    },
    /// Print the training paces for a 5K time
    Zones {
        #[arg(long)]
        minutes: i64,

        #[arg(long)]
        seconds: i64,

        /// Also append the result to this user's zone history
        #[arg(long)]
        user_id: Option<Uuid>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("runlog_import={},importer={},storage={}", log_level, log_level, log_level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Activities {
            user_id,
            date,
            activity_type,
        } => {
            let database_url = require_database_url(cli.database_url.as_deref())?;
            handle_activities(database_url, user_id, date, activity_type.as_deref()).await?;
        }
        Commands::Zones {
            minutes,
            seconds,
            user_id,
        } => {
            handle_zones(cli.database_url.as_deref(), minutes, seconds, user_id).await?;
        }
    }

    Ok(())
}

fn require_database_url(url: Option<&str>) -> Result<&str, String> {
    url.ok_or_else(|| "DATABASE_URL must be set (or pass --database-url)".to_string())
}

async fn connect(database_url: &str) -> importer::Result<ImportContext> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(ImportContext { pool })
}

async fn handle_activities(
    database_url: &str,
    user_id: Uuid,
    date: NaiveDate,
    activity_type: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = StravaClient::new(StravaConfig::from_env()?)?;
    let importer = StravaImporter::new(client);
    let context = connect(database_url).await?;

    tracing::info!("Fetching {} activities for {} on {}", importer.name(), user_id, date);
    let activities = importer
        .activities_for_day(user_id, date, activity_type, &context)
        .await?;

    if activities.is_empty() {
        tracing::warn!("No activities found on {}", date);
    } else {
        tracing::info!("Found {} activit(ies)", activities.len());
    }
    println!("{}", serde_json::to_string_pretty(&activities)?);

    Ok(())
}

async fn handle_zones(
    database_url: Option<&str>,
    minutes: i64,
    seconds: i64,
    user_id: Option<Uuid>,
) -> Result<(), Box<dyn std::error::Error>> {
    let computed = match user_id {
        Some(user_id) => {
            let context = connect(require_database_url(database_url)?).await?;
            let outcome =
                pace_zones::compute_and_store_zones(&context.pool, user_id, minutes, seconds)
                    .await?;
            if let Err(e) = &outcome.saved {
                tracing::error!("Zones computed but not saved: {}", e);
            }
            outcome.computed
        }
        None => pace_zones::compute_zones(minutes, seconds)?,
    };

    println!("VDOT {} ({}:{:02} 5K)", computed.vdot_score, minutes, seconds);
    for zone in Zone::ALL {
        println!("{:<14} {} /km", zone.label(), computed.zones.get(zone));
    }

    Ok(())
}
