//! Rust structs that represent database table mappings.
//!
//! `ProfileRow` mirrors the `profiles` table. The contact fields live in a
//! JSONB column and are decoded straight into the shared `ProfileField` model.

use adapters::{Profile, ProfileField};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct ProfileRow {
    pub id: String,
    pub name: String,
    pub fields: Json<Vec<ProfileField>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            name: row.name,
            fields: row.fields.0,
        }
    }
}
