use std::env;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://candidates.db";

/// Process configuration, read once before the listener binds.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Reads `PORT` and `DATABASE_URL` from the environment, falling back to
    /// the defaults when unset or unparsable.
    pub fn from_env() -> Config {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Config { port, database_url }
    }
}
