use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Reference record a candidate may point at. This system only ever reads
/// parties; provisioning them belongs to whoever owns the database file.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Party {
    pub id: i64,
    pub name: String,
}

impl Party {
    pub async fn all<'a>(conn: &'a SqlitePool) -> Result<Vec<Party>, sqlx::Error> {
        sqlx::query_as::<_, Party>(
            r#"
            SELECT id, name FROM parties ORDER BY id
            "#,
        )
        .fetch_all(conn)
        .await
    }

    pub async fn find<'a>(conn: &'a SqlitePool, id: i64) -> Result<Option<Party>, sqlx::Error> {
        sqlx::query_as::<_, Party>(
            r#"
            SELECT id, name FROM parties WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }
}
