use event_channel::Publisher;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{ProductCreated, ProductFilter, ProductRequest, ProductResponse};
use crate::repository::ProductRepository;

/// Service layer owning the catalog's operation and error semantics.
///
/// Holds the store and the creation-event publisher as explicitly injected
/// handles. Inputs are validated at the HTTP boundary before they get here.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    events: Publisher<ProductCreated>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R, events: Publisher<ProductCreated>) -> Self {
        Self {
            repository: Arc::new(repository),
            events,
        }
    }

    /// Every product, in the store's natural order.
    pub async fn list(&self) -> CatalogResult<Vec<ProductResponse>> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// A single product by id.
    pub async fn get_by_id(&self, id: Uuid) -> CatalogResult<ProductResponse> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProductResponse::from)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Products passing every supplied filter; zero matches is an empty list,
    /// never an error.
    pub async fn search(&self, filter: ProductFilter) -> CatalogResult<Vec<ProductResponse>> {
        let products = self.repository.search(filter).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Persist a new product and announce it.
    ///
    /// The event is published after the save returns, carrying the persisted
    /// (id-assigned) snapshot. Delivery is fire-and-forget: a lost event
    /// never fails the create.
    pub async fn create(&self, input: ProductRequest) -> CatalogResult<ProductResponse> {
        let product = self.repository.create(input).await?;

        self.events.publish(ProductCreated {
            product: product.clone(),
        });

        Ok(ProductResponse::from(product))
    }

    /// Overwrite name/price/category of an existing product; the id never
    /// changes. No event is published on update.
    pub async fn update(&self, id: Uuid, input: ProductRequest) -> CatalogResult<ProductResponse> {
        self.repository
            .update(id, input)
            .await?
            .map(ProductResponse::from)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Remove a product. No event is published on delete.
    pub async fn delete(&self, id: Uuid) -> CatalogResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::PRODUCT_CREATED_QUEUE;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::time::Duration;

    fn request(name: &str, price: &str, category: &str) -> ProductRequest {
        serde_json::from_value(serde_json::json!({
            "nome": name,
            "preco": price,
            "categoria": category,
        }))
        .unwrap()
    }

    fn service_with_memory_store() -> (
        ProductService<InMemoryProductRepository>,
        event_channel::Subscription<ProductCreated>,
    ) {
        let (publisher, subscription) = event_channel::channel(PRODUCT_CREATED_QUEUE, 16);
        (
            ProductService::new(InMemoryProductRepository::new(), publisher),
            subscription,
        )
    }

    #[tokio::test]
    async fn test_create_then_get_by_id_round_trips() {
        let (service, _subscription) = service_with_memory_store();

        let created = service
            .create(request("Mouse", "19.9", "Periféricos"))
            .await
            .unwrap();
        let fetched = service.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.price, Decimal::from_str("19.90").unwrap());
    }

    #[tokio::test]
    async fn test_create_publishes_event_with_persisted_snapshot() {
        let (service, mut subscription) = service_with_memory_store();

        let created = service
            .create(request("Mouse", "19.9", "Periféricos"))
            .await
            .unwrap();

        let event = tokio::time::timeout(Duration::from_secs(1), subscription.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event.product.id, created.id);
        assert_eq!(event.product.price.to_string(), "19.90");
    }

    #[tokio::test]
    async fn test_create_succeeds_when_consumer_is_gone() {
        let (publisher, subscription) =
            event_channel::channel::<ProductCreated>(PRODUCT_CREATED_QUEUE, 16);
        drop(subscription);
        let service = ProductService::new(InMemoryProductRepository::new(), publisher);

        // Publish failure is silent; the create still succeeds.
        let created = service.create(request("A", "1", "X")).await.unwrap();
        assert_eq!(service.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_not_found() {
        let (service, _subscription) = service_with_memory_store();
        let id = Uuid::new_v4();

        let err = service.get_by_id(id).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_and_publishes_nothing() {
        let (service, mut subscription) = service_with_memory_store();

        let err = service
            .update(Uuid::new_v4(), request("A", "1", "X"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
        assert!(service.list().await.unwrap().is_empty());

        drop(service);
        assert!(subscription.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_overwrites_fields() {
        let (service, _subscription) = service_with_memory_store();
        let created = service.create(request("A", "1", "X")).await.unwrap();

        let updated = service
            .update(created.id, request("B", "2.5", "Y"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.name, "B");
        assert_eq!(fetched.price, Decimal::from_str("2.50").unwrap());
        assert_eq!(fetched.category, "Y");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found_and_list_excludes_id() {
        let (service, _subscription) = service_with_memory_store();
        let created = service.create(request("A", "1", "X")).await.unwrap();

        service.delete(created.id).await.unwrap();

        assert!(matches!(
            service.get_by_id(created.id).await,
            Err(CatalogError::NotFound(_))
        ));
        assert!(service.list().await.unwrap().iter().all(|p| p.id != created.id));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (service, _subscription) = service_with_memory_store();

        let err = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_search_with_no_filters_equals_list() {
        let (service, _subscription) = service_with_memory_store();
        service.create(request("A", "1", "X")).await.unwrap();
        service.create(request("B", "2", "Y")).await.unwrap();

        let mut listed: Vec<Uuid> = service.list().await.unwrap().iter().map(|p| p.id).collect();
        let mut searched: Vec<Uuid> = service
            .search(ProductFilter::default())
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        listed.sort();
        searched.sort();
        assert_eq!(listed, searched);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut mock = MockProductRepository::new();
        mock.expect_find_all()
            .returning(|| Err(CatalogError::Internal("store down".to_string())));

        let (publisher, _subscription) =
            event_channel::channel::<ProductCreated>(PRODUCT_CREATED_QUEUE, 16);
        let service = ProductService::new(mock, publisher);

        assert!(matches!(
            service.list().await,
            Err(CatalogError::Internal(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_consults_store_once() {
        let mut mock = MockProductRepository::new();
        let id = Uuid::new_v4();
        mock.expect_delete()
            .with(mockall::predicate::eq(id))
            .times(1)
            .returning(|_| Ok(true));

        let (publisher, _subscription) =
            event_channel::channel::<ProductCreated>(PRODUCT_CREATED_QUEUE, 16);
        let service = ProductService::new(mock, publisher);

        service.delete(id).await.unwrap();
    }
}
