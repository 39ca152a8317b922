use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::{CreateProductForm, UpdateProductForm};
use crate::repository::DieselRepository;
use crate::routes::MessageBody;
use crate::services::{ServiceError, products};

const NOT_FOUND_MESSAGE: &str = "No product found with that id!";

#[get("/products")]
pub async fn show_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match products::list_products(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError().json(MessageBody::new(err.to_string()))
        }
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = product_id.into_inner();

    match products::get_product(repo.get_ref(), product_id) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageBody::new(NOT_FOUND_MESSAGE))
        }
        Err(err) => {
            log::error!("Failed to load product {product_id}: {err}");
            HttpResponse::InternalServerError().json(MessageBody::new(err.to_string()))
        }
    }
}

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateProductForm>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(ServiceError::TagAssignment { .. }) => {
            HttpResponse::BadRequest().json(MessageBody::new("Unable to create product tags."))
        }
        Err(err) => {
            log::error!("Failed to create a product: {err}");
            HttpResponse::InternalServerError().json(MessageBody::new("Unable to create product."))
        }
    }
}

/// Responds with `[removed_count, [created associations]]`; every failure,
/// including an unknown product id, is a 400.
#[put("/products/{product_id}")]
pub async fn edit_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateProductForm>,
) -> impl Responder {
    let product_id = product_id.into_inner();

    match products::update_product(repo.get_ref(), product_id, form) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => {
            log::warn!("Failed to update product {product_id}: {err}");
            HttpResponse::BadRequest().json(MessageBody::new(err.to_string()))
        }
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = product_id.into_inner();

    match products::delete_product(repo.get_ref(), product_id) {
        Ok(()) => HttpResponse::Ok().json(MessageBody::new("Product Has been deleted")),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageBody::new(NOT_FOUND_MESSAGE))
        }
        Err(err) => {
            log::error!("Failed to delete product {product_id}: {err}");
            HttpResponse::InternalServerError().json(MessageBody::new(err.to_string()))
        }
    }
}
