use crate::schema::*;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

/// A todo row, field order follows the `todos` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable)]
pub struct Todo {
    pub id: i64,
    pub subject: String,
    pub description: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// Values written on insert. `id` and both timestamps are left to the database.
#[derive(Debug, Insertable)]
#[table_name = "todos"]
pub struct NewTodo<'a> {
    pub subject: &'a str,
    pub description: &'a str,
}
