use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use storefront_api::repository::DieselRepository;
use storefront_api::routes;

mod common;

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn product_lifecycle_over_http() {
    let test_db = common::TestDb::new("routes_product_lifecycle_over_http.db");
    let repo = DieselRepository::new(test_db.pool());
    let (category_id, tag_ids) = common::seed_catalog(&repo, 4);
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "product_name": "Basketball",
            "price_cents": 20000,
            "stock": 3,
            "category_id": category_id,
            "tagIds": [tag_ids[0], tag_ids[1], tag_ids[2]],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let product_id = created["id"].as_i64().expect("id");
    assert_eq!(created["category"]["id"], category_id);
    assert_eq!(created["product_tags"].as_array().map(Vec::len), Some(3));

    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{product_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::put()
        .uri(&format!("/api/products/{product_id}"))
        .set_json(json!({ "tagIds": [tag_ids[1], tag_ids[2], tag_ids[3]] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let outcome: Value = test::read_body_json(resp).await;
    assert_eq!(outcome[0], 1);
    assert_eq!(outcome[1].as_array().map(Vec::len), Some(1));
    assert_eq!(outcome[1][0]["tag_id"], tag_ids[3]);

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Value = test::read_body_json(resp).await;
    let listed = listed.as_array().expect("array body");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["category"]["category_name"], "Shirts");
    let tag_names: Vec<&str> = listed[0]["product_tags"]
        .as_array()
        .expect("tags array")
        .iter()
        .filter_map(|tag| tag["tag_name"].as_str())
        .collect();
    assert_eq!(tag_names, vec!["tag-2", "tag-3", "tag-4"]);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/products/{product_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Product Has been deleted");

    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{product_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn missing_products_yield_not_found_except_on_update() {
    let test_db = common::TestDb::new("routes_missing_products_yield_not_found_except_on_update.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    let req = test::TestRequest::get().uri("/api/products/404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "No product found with that id!");

    let req = test::TestRequest::delete()
        .uri("/api/products/404")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/api/products/404")
        .set_json(json!({ "stock": 2, "tagIds": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn update_with_unknown_tag_is_bad_request_after_removal() {
    let test_db = common::TestDb::new("routes_update_with_unknown_tag.db");
    let repo = DieselRepository::new(test_db.pool());
    let (category_id, tag_ids) = common::seed_catalog(&repo, 1);
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "product_name": "Running Shoes",
            "price_cents": 9000,
            "category_id": category_id,
            "tagIds": [tag_ids[0]],
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let product_id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::put()
        .uri(&format!("/api/products/{product_id}"))
        .set_json(json!({ "tagIds": [999] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let message = body["message"].as_str().expect("message text");
    assert!(message.contains("constraint violation"), "got {message}");

    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{product_id}"))
        .to_request();
    let product: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(product["product_tags"].as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn create_with_unknown_tag_is_bad_request_and_keeps_product() {
    let test_db = common::TestDb::new("routes_create_with_unknown_tag.db");
    let repo = DieselRepository::new(test_db.pool());
    let (category_id, _) = common::seed_catalog(&repo, 0);
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "product_name": "Vinyl Record",
            "price_cents": 1299,
            "category_id": category_id,
            "tagIds": [999],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Unable to create product tags.");

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["stock"], 10);
}

#[actix_web::test]
async fn create_with_unknown_category_is_server_error() {
    let test_db = common::TestDb::new("routes_create_with_unknown_category.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "product_name": "Orphan",
            "price_cents": 100,
            "category_id": 31337,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Unable to create product.");
}

#[actix_web::test]
async fn tag_and_category_endpoints_round_out_the_catalog() {
    let test_db = common::TestDb::new("routes_tag_and_category_endpoints.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = init_app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "category_name": "Music" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let category: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .set_json(json!({ "tag_name": "rock music" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let tag: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "product_name": "Vinyl Record",
            "price_cents": 1299,
            "category_id": category["id"],
            "tagIds": [tag["id"]],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tags/{}", tag["id"]))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["tag_name"], "rock music");
    assert_eq!(body["products"][0]["product_name"], "Vinyl Record");

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{}", category["id"]))
        .set_json(json!({ "category_name": "Records" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["category_name"], "Records");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/tags/{}", tag["id"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed[0]["product_tags"].as_array().map(Vec::len), Some(0));

    let req = test::TestRequest::delete().uri("/api/tags/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/categories/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
