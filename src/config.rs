use sqlx::mysql::MySqlConnectOptions;

/// Runtime configuration, resolved once at startup and passed by reference
/// from then on. No module reads the environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_port: u16,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            db_host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_user: std::env::var("DB_USER").unwrap_or_else(|_| "user_gotrip".to_string()),
            db_password: std::env::var("DB_PASSWORD").unwrap_or_else(|_| "gotrip123".to_string()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "go_trip".to_string()),
            db_port: std::env::var("DB_PORT")
                .unwrap_or_else(|_| "3306".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("DB_PORT must be a valid number between 1-65535"))?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::debug!(
            "Database: {}@{}:{}/{}",
            config.db_user,
            config.db_host,
            config.db_port,
            config.db_name
        );
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Connection options for the reservations database. utf8mb4 so customer
    /// names and destinations survive the full Unicode range.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .charset("utf8mb4")
    }
}
