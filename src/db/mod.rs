use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Opens the process-lifetime handle to the embedded database file.
///
/// The caller gates the HTTP listener on this returning `Ok`; the schema
/// itself is provisioned out of band and never created here.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}
