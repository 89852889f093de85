//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate, ProductsQuery},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord, ProductsPage},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        query: ProductsQuery,
    ) -> Result<ProductsPage, ProductsServiceError> {
        let mut tx = self.db.begin_snapshot().await?;

        let items = self
            .repository
            .list_products(&mut tx, query.pagination, query.is_offer)
            .await?;

        let total = self
            .repository
            .count_products(&mut tx, query.is_offer)
            .await?;

        tx.commit().await?;

        Ok(ProductsPage { total, items })
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, product).await?;

        tx.commit().await?;

        debug!(product_id = %created.id, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(deleted) = self.repository.delete_product(&mut tx, product).await? else {
            return Err(ProductsServiceError::NotFound);
        };

        tx.commit().await?;

        debug!(product_id = %deleted.id, "deleted product");

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves a page of products with the total matching the filter.
    async fn list_products(
        &self,
        query: ProductsQuery,
    ) -> Result<ProductsPage, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product; the store assigns its id.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites the fields set in `update`, refreshing `updated_at`.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Permanently deletes a product, returning the removed row.
    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError>;
}
