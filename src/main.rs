use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Result;

use volunteer_shifts::database::init_database;
use volunteer_shifts::middleware::{RequestId, cors_for};
use volunteer_shifts::{Config, ShiftRepository, routes};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    log::info!("Starting Volunteer Shifts API server...");

    // Load configuration
    let config = Config::from_env()?;
    log::info!(
        "Configuration loaded (environment: {}, shift grouping: {})",
        config.environment,
        config.shift_grouping
    );

    // Initialize database
    let pool = init_database(&config).await?;
    log::info!("Database initialized");

    let shift_repo_data = web::Data::new(ShiftRepository::new(pool));
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(shift_repo_data.clone())
            .app_data(config_data.clone())
            .wrap(cors_for(&config))
            .wrap(RequestId)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
