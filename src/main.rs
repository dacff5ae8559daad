use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use sportmatch::config::{LogFormat, LoggingSettings, Settings};
use sportmatch::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use sportmatch::services::{FileStorage, MemoryStorage, Repository, Storage, SwipeSessions};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // LOG_LEVEL / LOG_FORMAT win over the config file
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let format = std::env::var("LOG_FORMAT")
        .map(|name| LogFormat::parse(&name))
        .unwrap_or_else(|_| logging.output_format());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Plain => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);
    info!("Starting SportMatch service...");

    let storage: Arc<dyn Storage> = match &settings.storage.session_dir {
        Some(dir) => {
            let storage = FileStorage::new(dir).map_err(|e| {
                error!("Failed to open session directory {}: {}", dir, e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;
            info!("Swipe sessions stored in {}", dir);
            Arc::new(storage)
        }
        None => {
            info!("Swipe sessions kept in memory");
            Arc::new(MemoryStorage::new())
        }
    };

    let sessions = SwipeSessions::new(storage, settings.swipe.match_probability).map_err(|e| {
        error!("Invalid swipe settings: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Match probability set to {}", sessions.match_probability());

    let app_state = AppState {
        repository: Arc::new(Repository::seeded()),
        sessions: Arc::new(sessions),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
