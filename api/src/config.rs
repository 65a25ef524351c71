use std::env;

/// Port the API listens on
pub const PORT: u16 = 5555;

/// Database used when `DB_URI` is not set: a SQLite file in the working
/// directory, created on first run
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";

#[derive(Clone, Debug)]
pub struct Config {
    /// Database connection string (`DB_URI`)
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DB_URI")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            port: PORT,
        }
    }
}
