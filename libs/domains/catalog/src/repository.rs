use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{Product, ProductFilter, ProductRequest};

/// Store contract for product persistence.
///
/// Presence decisions (`Option`/`bool`) are left to the caller; the service
/// owns the error semantics. Each call runs against the store's own isolation
/// scope; concurrent writers to the same id race with last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product, assigning its id.
    async fn create(&self, input: ProductRequest) -> CatalogResult<Product>;

    /// Every product, in the store's natural order.
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// Products passing every supplied filter dimension.
    async fn search(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>>;

    /// Copy the request's fields onto an existing record, id untouched.
    /// `None` if no record has that id.
    async fn update(&self, id: Uuid, input: ProductRequest) -> CatalogResult<Option<Product>>;

    /// Remove a record; `false` if no record had that id.
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;
}

/// In-memory implementation of [`ProductRepository`].
///
/// The write lock stands in for single-record transaction isolation: every
/// operation either fully completes or leaves the map untouched.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductRequest) -> CatalogResult<Product> {
        let mut products = self.products.write().await;

        let product = Product::new(input);
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn search(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, input: ProductRequest) -> CatalogResult<Option<Product>> {
        let mut products = self.products.write().await;

        match products.get_mut(&id) {
            Some(product) => {
                product.apply(input);
                let updated = product.clone();
                tracing::info!(product_id = %id, "Updated product");
                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
