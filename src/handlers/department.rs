use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::department::Department;
use crate::utils::validation::{double_option, require_string};

#[derive(Deserialize)]
pub struct DepartmentPayload {
    #[serde(default, deserialize_with = "double_option")]
    name: Option<Option<String>>,
}

impl DepartmentPayload {
    fn validate(self) -> Result<String, ApiError> {
        let mut errors = Vec::new();
        match require_string("name", self.name, &mut errors) {
            Some(name) => Ok(name),
            None => Err(ApiError::Validation(errors)),
        }
    }
}

pub async fn get_departments(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let departments =
        sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY id")
            .fetch_all(&**pool)
            .await
            .map_err(|err| ApiError::Database(err.to_string()))?;

    Ok(HttpResponse::Ok().json(departments))
}

pub async fn get_department(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let department =
        sqlx::query_as::<_, Department>("SELECT id, name FROM departments WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(&**pool)
            .await
            .map_err(|err| ApiError::Database(err.to_string()))?
            .ok_or(ApiError::NotFound)?;

    Ok(HttpResponse::Ok().json(department))
}

pub async fn create_department(
    pool: web::Data<SqlitePool>,
    payload: web::Json<DepartmentPayload>,
) -> Result<HttpResponse, ApiError> {
    let name = payload.into_inner().validate()?;

    let result = sqlx::query("INSERT INTO departments (name) VALUES (?)")
        .bind(&name)
        .execute(&**pool)
        .await
        .map_err(|err| ApiError::Database(err.to_string()))?;

    Ok(HttpResponse::Created().json(Department {
        id: result.last_insert_rowid(),
        name,
    }))
}

pub async fn update_department(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
    payload: web::Json<DepartmentPayload>,
) -> Result<HttpResponse, ApiError> {
    // Payload shape is checked before the lookup, so a bad body on a
    // missing id still answers 422.
    let name = payload.into_inner().validate()?;
    let id = id.into_inner();

    let result = sqlx::query("UPDATE departments SET name = ? WHERE id = ?")
        .bind(&name)
        .bind(id)
        .execute(&**pool)
        .await
        .map_err(|err| ApiError::Database(err.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::Ok().json(Department { id, name }))
}

pub async fn delete_department(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let result = sqlx::query("DELETE FROM departments WHERE id = ?")
        .bind(id.into_inner())
        .execute(&**pool)
        .await
        .map_err(|err| ApiError::Database(err.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::NonAuthoritativeInformation().finish())
}
