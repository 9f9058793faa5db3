use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::services::employee::EmployeeService;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employee")
            .route("/all", web::get().to(get_all_employees))
            .route("/find/{id}", web::get().to(get_employee_by_id))
            .route("/add", web::post().to(add_employee))
            .route("/update", web::put().to(update_employee))
            .route("/delete/{id}", web::delete().to(delete_employee)),
    );
}

pub async fn get_all_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.find_all_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee_by_id(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.find_employee_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn add_employee(
    service: web::Data<EmployeeService>,
    employee: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let created = service.add_employee(employee.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    employee: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let updated = service.update_employee(employee.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_employee(id.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}
