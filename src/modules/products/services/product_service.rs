use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::products::models::Product;
use crate::modules::products::repositories::ProductRepository;

/// Service for product catalog CRUD operations.
///
/// Stateless mediation between callers and the product store: it enforces
/// the existence invariant before mutation and translates a missing record
/// into `AppError::NotFound`. Everything else delegates to the repository
/// in a single call, so the service is safe for concurrent callers.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Return every persisted product, in store-defined order
    pub async fn get_all_products(&self) -> Result<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Fetch a single product, failing with `NotFound` if absent
    pub async fn get_product_by_id(&self, id: i64) -> Result<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Persist a new product; the store assigns the identifier
    pub async fn create_product(&self, mut product: Product) -> Result<Product> {
        // Whatever identifier the payload carries, the store decides.
        product.id = None;

        let created = self.repository.save(product).await?;
        tracing::info!(product_id = ?created.id, "Created product");

        Ok(created)
    }

    /// Replace the product stored under `id` with the given payload.
    ///
    /// The payload's identifier is forced to `id`; the replacement is
    /// wholesale, not a field-level merge.
    pub async fn update_product(&self, id: i64, mut product: Product) -> Result<Product> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::NotFound(id));
        }

        product.id = Some(id);
        self.repository.save(product).await
    }

    /// Remove the product stored under `id`.
    ///
    /// Fails with `NotFound` when the identifier is absent, so a repeated
    /// delete on the same id keeps failing after the first success.
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::NotFound(id));
        }

        self.repository.delete_by_id(id).await?;
        tracing::info!(product_id = id, "Deleted product");

        Ok(())
    }
}
