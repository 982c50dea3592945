use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::utils::validation::{double_option, require_string};

const SELECT_EMPLOYEE: &str = "SELECT e.id, e.first_name, e.last_name, e.department_id, \
     d.name AS department_name \
     FROM employees e LEFT JOIN departments d ON d.id = e.department_id";

#[derive(Deserialize)]
pub struct EmployeePayload {
    #[serde(default, deserialize_with = "double_option")]
    first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    last_name: Option<Option<String>>,
    #[serde(default)]
    department_id: Option<i64>,
}

struct ValidEmployee {
    first_name: String,
    last_name: String,
    department_id: Option<i64>,
}

impl EmployeePayload {
    fn validate(self) -> Result<ValidEmployee, ApiError> {
        let mut errors = Vec::new();
        let first_name = require_string("first_name", self.first_name, &mut errors);
        let last_name = require_string("last_name", self.last_name, &mut errors);
        match (first_name, last_name) {
            (Some(first_name), Some(last_name)) => Ok(ValidEmployee {
                first_name,
                last_name,
                department_id: self.department_id,
            }),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

#[derive(Serialize)]
struct EmployeeResponse {
    id: i64,
    first_name: String,
    last_name: String,
    department: Option<Department>,
}

impl From<Employee> for EmployeeResponse {
    fn from(row: Employee) -> Self {
        // A dangling department_id (department deleted after assignment)
        // serializes the same as no department at all.
        let department = match (row.department_id, row.department_name) {
            (Some(id), Some(name)) => Some(Department { id, name }),
            _ => None,
        };
        EmployeeResponse {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            department,
        }
    }
}

async fn fetch_employee(pool: &SqlitePool, id: i64) -> Result<EmployeeResponse, ApiError> {
    let row = sqlx::query_as::<_, Employee>(&format!("{} WHERE e.id = ?", SELECT_EMPLOYEE))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| ApiError::Database(err.to_string()))?
        .ok_or(ApiError::NotFound)?;
    Ok(row.into())
}

pub async fn get_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees =
        sqlx::query_as::<_, Employee>(&format!("{} ORDER BY e.id", SELECT_EMPLOYEE))
            .fetch_all(&**pool)
            .await
            .map_err(|err| ApiError::Database(err.to_string()))?;

    let employees: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee = fetch_employee(&pool, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, ApiError> {
    let employee = payload.into_inner().validate()?;

    let result =
        sqlx::query("INSERT INTO employees (first_name, last_name, department_id) VALUES (?, ?, ?)")
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(employee.department_id)
            .execute(&**pool)
            .await
            .map_err(|err| ApiError::Database(err.to_string()))?;

    let created = fetch_employee(&pool, result.last_insert_rowid()).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, ApiError> {
    let employee = payload.into_inner().validate()?;
    let id = id.into_inner();

    let result = sqlx::query(
        "UPDATE employees SET first_name = ?, last_name = ?, department_id = ? WHERE id = ?",
    )
    .bind(&employee.first_name)
    .bind(&employee.last_name)
    .bind(employee.department_id)
    .bind(id)
    .execute(&**pool)
    .await
    .map_err(|err| ApiError::Database(err.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    let updated = fetch_employee(&pool, id).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id.into_inner())
        .execute(&**pool)
        .await
        .map_err(|err| ApiError::Database(err.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::NonAuthoritativeInformation().finish())
}
