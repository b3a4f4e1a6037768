use poem::{listener::TcpListener, Server};

use item_service::app::create_app;
use item_service::config::{init_database, init_logging, migrate_database, AppSettings};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let settings = match AppSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&settings.log_level);

    let db = match init_database(&settings).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "failed to connect to database");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate_database(&db).await {
        tracing::error!(error = %e, "failed to run database migrations");
        std::process::exit(1);
    }

    let app = create_app(&settings, db);

    tracing::info!("starting server on http://{}:{}", settings.host, settings.port);
    tracing::info!(
        "swagger ui available at http://{}:{}/swagger",
        settings.host,
        settings.port
    );

    Server::new(TcpListener::bind(format!(
        "{}:{}",
        settings.host, settings.port
    )))
    .run(app)
    .await
}
