#![allow(dead_code)]

use std::time::Duration;

use actix_web::{App, web};
use anyhow::Result;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use volunteer_shifts::database::init_database;
use volunteer_shifts::middleware::RequestId;
use volunteer_shifts::{Config, ShiftRepository, routes};

pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Shared test state. `new` connects lazily, so tests that never reach the
/// repository run without a database.
pub struct TestContext {
    pub pool: PgPool,
    pub config: Config,
}

impl TestContext {
    /// Context backed by a migrated, emptied test database. Returns `None`
    /// when `TEST_DATABASE_URL` is unset; the tables it names are truncated.
    pub async fn with_database() -> Result<Option<Self>> {
        let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
            log::warn!("TEST_DATABASE_URL not set; skipping database-backed test");
            return Ok(None);
        };

        let mut config = Config::test_config();
        config.database_url = database_url;
        let pool = init_database(&config).await?;

        sqlx::query(
            "TRUNCATE op_volunteer_shifts, op_volunteers, op_shift_time_position, \
             op_shift_position, op_position_type, op_shift_times, op_dates, op_shift_name, \
             op_shift_category RESTART IDENTITY CASCADE",
        )
        .execute(&pool)
        .await?;

        Ok(Some(TestContext { pool, config }))
    }

    pub async fn seed(&self, statements: &[&str]) -> Result<()> {
        for statement in statements {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub fn new() -> Result<Self> {
        let config = Config::test_config();
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(Duration::from_secs(2))
            .connect_lazy(&config.database_url)?;

        Ok(TestContext { pool, config })
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(ShiftRepository::new(self.pool.clone())))
            .app_data(web::Data::new(self.config.clone()))
            .wrap(RequestId)
            .configure(routes::configure)
    }
}
