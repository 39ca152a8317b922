use actix_web::web;
use serde::Serialize;

pub mod categories;
pub mod products;
pub mod tags;

/// JSON body returned alongside non-success statuses and confirmations.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Register every JSON endpoint under the `/api` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(products::show_products)
            .service(products::show_product)
            .service(products::add_product)
            .service(products::edit_product)
            .service(products::delete_product)
            .service(categories::show_categories)
            .service(categories::show_category)
            .service(categories::add_category)
            .service(categories::edit_category)
            .service(categories::delete_category)
            .service(tags::show_tags)
            .service(tags::show_tag)
            .service(tags::add_tag)
            .service(tags::edit_tag)
            .service(tags::delete_tag),
    );
}
