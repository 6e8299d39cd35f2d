use std::sync::Arc;

use crate::{
    config::CatalogConfig,
    database::ProductStore,
    error::{AppError, Result},
    models::{NewProduct, Product},
};

/// Domain operations on products, applying the configured match modes on
/// top of a [`ProductStore`].
#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn ProductStore>,
    catalog: CatalogConfig,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn ProductStore>, catalog: CatalogConfig) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> CatalogConfig {
        self.catalog
    }

    pub async fn list_all(&self) -> Result<Vec<Product>> {
        self.store.all().await
    }

    /// An empty filter counts as no filter, so `?productName=` lists everything
    /// in every match mode.
    pub async fn list_by_name_filter(&self, filter: Option<&str>) -> Result<Vec<Product>> {
        match filter.filter(|name| !name.is_empty()) {
            Some(name) => self.store.by_name(name, self.catalog.name_match).await,
            None => self.list_all().await,
        }
    }

    pub async fn find_by_serial(&self, serial_num: &str) -> Result<Product> {
        self.store
            .by_serial(serial_num, self.catalog.serial_match)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product with serialNum {}", serial_num)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Product> {
        self.store
            .by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product with id {}", id)))
    }

    /// Inserts a product after checking its serial number is free. The store
    /// reports a unique violation the same way when a concurrent insert wins.
    pub async fn insert(&self, product: NewProduct) -> Result<Product> {
        if self
            .store
            .by_serial(&product.serial_num, self.catalog.serial_match)
            .await?
            .is_some()
        {
            tracing::debug!(serial_num = %product.serial_num, "Serial number already taken");
            return Err(AppError::duplicate_serial());
        }

        self.store.insert(&product).await
    }

    pub async fn delete_by_serial(&self, serial_num: &str) -> Result<()> {
        let product = self.find_by_serial(serial_num).await?;
        self.delete_by_id(product.id).await
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        match self.store.delete(id).await? {
            0 => Err(AppError::NotFound(format!("Product with id {}", id))),
            _ => Ok(()),
        }
    }

    pub async fn ping(&self) -> Result<()> {
        self.store.ping().await
    }
}
