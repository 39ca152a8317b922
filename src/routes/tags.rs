use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::tags::TagForm;
use crate::repository::DieselRepository;
use crate::routes::MessageBody;
use crate::services::{ServiceError, tags};

const NOT_FOUND_MESSAGE: &str = "No tag found with that id!";

#[get("/tags")]
pub async fn show_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match tags::list_tags(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => {
            log::error!("Failed to list tags: {err}");
            HttpResponse::InternalServerError().json(MessageBody::new(err.to_string()))
        }
    }
}

#[get("/tags/{tag_id}")]
pub async fn show_tag(tag_id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let tag_id = tag_id.into_inner();

    match tags::get_tag(repo.get_ref(), tag_id) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageBody::new(NOT_FOUND_MESSAGE))
        }
        Err(err) => {
            log::error!("Failed to load tag {tag_id}: {err}");
            HttpResponse::InternalServerError().json(MessageBody::new(err.to_string()))
        }
    }
}

#[post("/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<TagForm>,
) -> impl Responder {
    match tags::create_tag(repo.get_ref(), form) {
        Ok(tag) => HttpResponse::Created().json(tag),
        Err(err) => {
            log::warn!("Failed to create a tag: {err}");
            HttpResponse::BadRequest().json(MessageBody::new(err.to_string()))
        }
    }
}

#[put("/tags/{tag_id}")]
pub async fn edit_tag(
    tag_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<TagForm>,
) -> impl Responder {
    let tag_id = tag_id.into_inner();

    match tags::rename_tag(repo.get_ref(), tag_id, form) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageBody::new(NOT_FOUND_MESSAGE))
        }
        Err(err) => {
            log::warn!("Failed to update tag {tag_id}: {err}");
            HttpResponse::BadRequest().json(MessageBody::new(err.to_string()))
        }
    }
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(
    tag_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let tag_id = tag_id.into_inner();

    match tags::delete_tag(repo.get_ref(), tag_id) {
        Ok(()) => HttpResponse::Ok().json(MessageBody::new("Tag has been deleted")),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageBody::new(NOT_FOUND_MESSAGE))
        }
        Err(err) => {
            log::error!("Failed to delete tag {tag_id}: {err}");
            HttpResponse::InternalServerError().json(MessageBody::new(err.to_string()))
        }
    }
}
