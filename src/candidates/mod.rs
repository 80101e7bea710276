use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// A candidate as read back from the register, joined against the party
/// reference table. `party_name` is null when the reference is absent or
/// points at no known party.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub industry_connected: i64,
    pub party_id: Option<i64>,
    pub party_name: Option<String>,
}

impl Candidate {
    pub async fn list<'a>(conn: &'a SqlitePool) -> Result<Vec<Candidate>, sqlx::Error> {
        sqlx::query_as::<_, Candidate>(
            r#"
            SELECT
                c.id,
                c.first_name,
                c.last_name,
                c.industry_connected,
                c.party_id,
                p.name AS party_name
            FROM
                candidates c
            LEFT JOIN
                parties p ON p.id = c.party_id
            "#,
        )
        .fetch_all(conn)
        .await
    }

    pub async fn find<'a>(conn: &'a SqlitePool, id: i64) -> Result<Option<Candidate>, sqlx::Error> {
        sqlx::query_as::<_, Candidate>(
            r#"
            SELECT
                c.id,
                c.first_name,
                c.last_name,
                c.industry_connected,
                c.party_id,
                p.name AS party_name
            FROM
                candidates c
            LEFT JOIN
                parties p ON p.id = c.party_id
            WHERE
                c.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// Deletes by id and reports the number of rows removed. Deleting an id
    /// that was never assigned is not an error; it reports zero changes.
    pub async fn delete<'a>(conn: &'a SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM candidates WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected())
    }
}

/// Insert-side shape; the database assigns the id.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub industry_connected: i64,
    pub party_id: Option<i64>,
}

impl NewCandidate {
    pub async fn create<'a>(&self, conn: &'a SqlitePool) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO candidates (first_name, last_name, industry_connected, party_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(self.industry_connected)
        .bind(self.party_id)
        .execute(conn)
        .await?;

        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup() -> SqlitePool {
        let conn = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("open in-memory database");

        sqlx::query(
            r#"
            CREATE TABLE candidates (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                industry_connected INTEGER NOT NULL,
                party_id INTEGER
            )
            "#,
        )
        .execute(&conn)
        .await
        .expect("create candidates table");

        sqlx::query("CREATE TABLE parties (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
            .execute(&conn)
            .await
            .expect("create parties table");

        sqlx::query("INSERT INTO parties (id, name) VALUES (1, 'Progressive Alliance')")
            .execute(&conn)
            .await
            .expect("seed parties");

        conn
    }

    #[actix_web::test]
    async fn create_assigns_increasing_ids() {
        let conn = setup().await;
        let record = NewCandidate {
            first_name: "Ada".to_string(),
            last_name: "Quinn".to_string(),
            industry_connected: 1,
            party_id: Some(1),
        };

        let first = record.create(&conn).await.expect("first insert");
        let second = record.create(&conn).await.expect("second insert");
        assert!(first > 0);
        assert!(second > first);
    }

    #[actix_web::test]
    async fn find_joins_the_party_name() {
        let conn = setup().await;
        let id = NewCandidate {
            first_name: "Ada".to_string(),
            last_name: "Quinn".to_string(),
            industry_connected: 0,
            party_id: Some(1),
        }
        .create(&conn)
        .await
        .expect("insert");

        let candidate = Candidate::find(&conn, id)
            .await
            .expect("query")
            .expect("row exists");
        assert_eq!(candidate.first_name, "Ada");
        assert_eq!(candidate.industry_connected, 0);
        assert_eq!(
            candidate.party_name.as_deref(),
            Some("Progressive Alliance")
        );
    }

    #[actix_web::test]
    async fn dangling_party_reference_reads_as_null() {
        let conn = setup().await;
        let id = NewCandidate {
            first_name: "Ada".to_string(),
            last_name: "Quinn".to_string(),
            industry_connected: 1,
            party_id: Some(42),
        }
        .create(&conn)
        .await
        .expect("insert");

        let candidate = Candidate::find(&conn, id)
            .await
            .expect("query")
            .expect("row exists");
        assert_eq!(candidate.party_id, Some(42));
        assert_eq!(candidate.party_name, None);
    }

    #[actix_web::test]
    async fn find_missing_id_is_none() {
        let conn = setup().await;
        let candidate = Candidate::find(&conn, 9999).await.expect("query");
        assert!(candidate.is_none());
    }

    #[actix_web::test]
    async fn delete_reports_changes_once() {
        let conn = setup().await;
        let id = NewCandidate {
            first_name: "Ada".to_string(),
            last_name: "Quinn".to_string(),
            industry_connected: 1,
            party_id: None,
        }
        .create(&conn)
        .await
        .expect("insert");

        assert_eq!(Candidate::delete(&conn, id).await.expect("delete"), 1);
        assert_eq!(Candidate::delete(&conn, id).await.expect("redelete"), 0);
        assert!(Candidate::list(&conn).await.expect("list").is_empty());
    }
}
