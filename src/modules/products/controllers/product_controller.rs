use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::models::Product;
use crate::modules::products::services::product_service::ProductService;

/// List all products
/// GET /products
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
) -> Result<HttpResponse, AppError> {
    let products = service.get_all_products().await?;

    Ok(HttpResponse::Ok().json(products))
}

/// Get product by ID
/// GET /products/{id}
pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let product = service.get_product_by_id(product_id).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Create a new product
/// POST /products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    payload: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    let product = service.create_product(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(product))
}

/// Replace an existing product
/// PUT /products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    payload: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let product = service
        .update_product(product_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Delete a product
/// DELETE /products/{id}
pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    service.delete_product(product_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::post().to(create_product))
            .route("", web::get().to(list_products))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::put().to(update_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
}
