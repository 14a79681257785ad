use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::Config;

pub struct Database {
    pub pool: MySqlPool,
}

impl Database {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .connect_with(config.connect_options())
            .await?;

        // Fail fast on bad credentials instead of on the first request
        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self { pool })
    }
}
