use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::CategoryForm;
use crate::repository::DieselRepository;
use crate::routes::MessageBody;
use crate::services::{ServiceError, categories};

const NOT_FOUND_MESSAGE: &str = "No category found with that id!";

#[get("/categories")]
pub async fn show_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match categories::list_categories(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().json(MessageBody::new(err.to_string()))
        }
    }
}

#[get("/categories/{category_id}")]
pub async fn show_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = category_id.into_inner();

    match categories::get_category(repo.get_ref(), category_id) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageBody::new(NOT_FOUND_MESSAGE))
        }
        Err(err) => {
            log::error!("Failed to load category {category_id}: {err}");
            HttpResponse::InternalServerError().json(MessageBody::new(err.to_string()))
        }
    }
}

#[post("/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    match categories::create_category(repo.get_ref(), form) {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => {
            log::warn!("Failed to create a category: {err}");
            HttpResponse::BadRequest().json(MessageBody::new(err.to_string()))
        }
    }
}

#[put("/categories/{category_id}")]
pub async fn edit_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let category_id = category_id.into_inner();

    match categories::rename_category(repo.get_ref(), category_id, form) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageBody::new(NOT_FOUND_MESSAGE))
        }
        Err(err) => {
            log::warn!("Failed to update category {category_id}: {err}");
            HttpResponse::BadRequest().json(MessageBody::new(err.to_string()))
        }
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = category_id.into_inner();

    match categories::delete_category(repo.get_ref(), category_id) {
        Ok(()) => HttpResponse::Ok().json(MessageBody::new("Category has been deleted")),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageBody::new(NOT_FOUND_MESSAGE))
        }
        Err(err) => {
            log::error!("Failed to delete category {category_id}: {err}");
            HttpResponse::InternalServerError().json(MessageBody::new(err.to_string()))
        }
    }
}
