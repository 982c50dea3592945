pub mod department;
pub mod employee;

use crate::errors::{ApiError, FieldError};
use actix_web::web;

/// Undecodable bodies surface as 422 with a detail list, not actix's
/// default 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::Validation(vec![FieldError::undecodable_body(err.to_string())]).into()
    })
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/department")
                .route(web::get().to(department::get_departments))
                .route(web::post().to(department::create_department)),
        )
        .service(
            web::resource("/department/{id}")
                .route(web::get().to(department::get_department))
                .route(web::put().to(department::update_department))
                .route(web::delete().to(department::delete_department)),
        )
        .service(
            web::resource("/employee")
                .route(web::get().to(employee::get_employees))
                .route(web::post().to(employee::create_employee)),
        )
        .service(
            web::resource("/employee/{id}")
                .route(web::get().to(employee::get_employee))
                .route(web::put().to(employee::update_employee))
                .route(web::delete().to(employee::delete_employee)),
        );
}
