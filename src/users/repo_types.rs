use serde::Serialize;
use sqlx::FromRow;

/// Row of the `users` table as returned by the list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Columns the detail query reads for a single user.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserProfileRow {
    pub name: String,
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct MessageRow {
    pub id: i32,
    pub msg: String,
}
