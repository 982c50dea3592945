use serde::{Deserialize, Serialize};

/// Employee row joined with its department, if any. `department_name` comes
/// from a LEFT JOIN and is NULL both when no department is set and when the
/// referenced department has been deleted (dangling references stay).
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
}
