//! Database query functions (Data Access Objects).
//!
//! This module centralizes all SQL issued against the `profiles` table. Every
//! function runs on a connection borrowed from the caller, so the caller
//! decides how long that connection is held.

use adapters::NewProfile;
use sqlx::types::Json;
use sqlx::PgConnection;

use super::models::ProfileRow;

pub async fn create_schema(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id      TEXT PRIMARY KEY NOT NULL,
            name    TEXT NOT NULL,
            fields  JSONB NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_profiles_name ON profiles (name)")
        .execute(&mut *conn)
        .await?;

    Ok(())
}

pub async fn insert_profile(
    conn: &mut PgConnection,
    id: &str,
    profile: &NewProfile,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO profiles (id, name, fields)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(id)
    .bind(&profile.name)
    .bind(Json(&profile.fields))
    .execute(conn)
    .await?;

    Ok(())
}

pub async fn select_profile(
    conn: &mut PgConnection,
    id: &str,
) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT id, name, fields
        FROM profiles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}
