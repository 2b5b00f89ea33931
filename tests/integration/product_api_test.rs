// HTTP surface of the product catalog: status codes, JSON bodies, and the
// error envelope, driven through the actix test harness with the in-memory
// store behind the service.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use product_catalog::modules::products::controllers::product_controller;
use product_catalog::modules::products::services::ProductService;

#[path = "../helpers/memory_repository.rs"]
mod memory_repository;

use memory_repository::InMemoryProductRepository;

fn product_service() -> web::Data<Arc<ProductService>> {
    web::Data::new(Arc::new(ProductService::new(Arc::new(
        InMemoryProductRepository::default(),
    ))))
}

macro_rules! test_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data($service.clone())
                .configure(product_controller::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_create_product_returns_201_with_assigned_id() {
    let service = product_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({
            "name": "Pen",
            "description": "Ballpoint pen",
            "price": "1.5"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["name"], json!("Pen"));
    assert_eq!(body["price"], json!("1.5"));
}

#[actix_web::test]
async fn test_client_supplied_id_is_ignored_on_create() {
    let service = product_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({
            "id": 999,
            "name": "Pen",
            "price": "1.5"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], json!(1));
}

#[actix_web::test]
async fn test_get_product_roundtrip() {
    let service = product_service();
    let app = test_app!(service);

    let create = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Notebook", "price": "4.25"}))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, create).await;

    let req = test::TestRequest::get().uri("/products/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, created);
}

#[actix_web::test]
async fn test_get_missing_product_returns_404_envelope() {
    let service = product_service();
    let app = test_app!(service);

    let req = test::TestRequest::get().uri("/products/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], json!(404));
    assert_eq!(
        body["error"]["message"],
        json!("Product with id 999 not found")
    );
}

#[actix_web::test]
async fn test_update_product_replaces_record() {
    let service = product_service();
    let app = test_app!(service);

    let create = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({
            "name": "Pen",
            "description": "Ballpoint pen",
            "price": "1.5"
        }))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, create).await;

    // The embedded id is ignored; the path id addresses the record.
    let update = test::TestRequest::put()
        .uri("/products/1")
        .set_json(json!({
            "id": 42,
            "name": "Fountain pen",
            "price": "12.0"
        }))
        .to_request();

    let resp = test::call_service(&app, update).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["name"], json!("Fountain pen"));
    assert_eq!(body["description"], Value::Null);
}

#[actix_web::test]
async fn test_update_missing_product_returns_404() {
    let service = product_service();
    let app = test_app!(service);

    let req = test::TestRequest::put()
        .uri("/products/7")
        .set_json(json!({"name": "Pen", "price": "1.5"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_product_returns_204_then_404() {
    let service = product_service();
    let app = test_app!(service);

    let create = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({"name": "Pen", "price": "1.5"}))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, create).await;

    let delete = test::TestRequest::delete().uri("/products/1").to_request();
    let resp = test::call_service(&app, delete).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let get = test::TestRequest::get().uri("/products/1").to_request();
    let resp = test::call_service(&app, get).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let delete_again = test::TestRequest::delete().uri("/products/1").to_request();
    let resp = test::call_service(&app, delete_again).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_list_products() {
    let service = product_service();
    let app = test_app!(service);

    let req = test::TestRequest::get().uri("/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));

    for (name, price) in [("Pen", "1.5"), ("Notebook", "4.25")] {
        let create = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({"name": name, "price": price}))
            .to_request();
        let _: Value = test::call_and_read_body_json(&app, create).await;
    }

    let req = test::TestRequest::get().uri("/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Pen"));
    assert!(names.contains(&"Notebook"));
}
