use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::products::models::Product;

/// Persistence contract for catalog products.
///
/// `save` inserts when the product carries no identifier yet and performs a
/// full replacement of the stored payload when it does. All other store
/// failures surface as `AppError::Database` untranslated.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Return every persisted product, in store-defined order
    async fn find_all(&self) -> Result<Vec<Product>>;

    /// Look up a product by identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;

    /// Insert (no identifier) or fully replace (identifier set) a product
    async fn save(&self, product: Product) -> Result<Product>;

    /// Check whether a product with the given identifier exists
    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Remove a product by identifier
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// MySQL-backed product repository
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, created_at, updated_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, created_at, updated_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn save(&self, product: Product) -> Result<Product> {
        let now = Utc::now();

        match product.id {
            // Full replacement of the stored payload; created_at stays.
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE products
                    SET name = ?, description = ?, price = ?, updated_at = ?
                    WHERE id = ?
                    "#,
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(now)
                .bind(id)
                .execute(&self.pool)
                .await?;

                // Re-fetch so the caller sees store-managed timestamps.
                self.find_by_id(id).await?.ok_or(AppError::NotFound(id))
            }
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO products (name, description, price, created_at, updated_at)
                    VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(now)
                .bind(now)
                .execute(&self.pool)
                .await?;

                let id = result.last_insert_id() as i64;

                Ok(Product {
                    id: Some(id),
                    created_at: Some(now),
                    updated_at: Some(now),
                    ..product
                })
            }
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
