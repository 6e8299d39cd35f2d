//! In-process [`ProductStore`] implementations for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    config::{NameMatch, SerialMatch},
    database::ProductStore,
    error::{AppError, Result},
    models::{NewProduct, Product},
};

#[derive(Default)]
struct Table {
    rows: Vec<Product>,
    last_id: i32,
}

/// Behaves like the `products` table: sequential ids and a case-sensitive
/// unique index on `serial_num`.
#[derive(Default)]
pub struct MemoryProductStore {
    table: RwLock<Table>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn all(&self) -> Result<Vec<Product>> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn by_name(&self, name: &str, mode: NameMatch) -> Result<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|p| mode.matches(&p.product_name, name))
            .cloned()
            .collect())
    }

    async fn by_serial(&self, serial_num: &str, mode: SerialMatch) -> Result<Option<Product>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|p| mode.matches(&p.serial_num, serial_num))
            .cloned())
    }

    async fn by_id(&self, id: i32) -> Result<Option<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|p| p.serial_num == product.serial_num) {
            return Err(AppError::duplicate_serial());
        }

        table.last_id += 1;
        let row = Product {
            id: table.last_id,
            product_name: product.product_name.clone(),
            serial_num: product.serial_num.clone(),
            product_desc: product.product_desc.clone(),
            image_url: product.image_url.clone(),
            price: product.price,
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|p| p.id != id);
        Ok((before - table.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Never sees an existing serial on lookup, the way a concurrent insert
/// slips between the repository's check and its write.
pub struct RacingProductStore {
    pub inner: MemoryProductStore,
}

#[async_trait]
impl ProductStore for RacingProductStore {
    async fn all(&self) -> Result<Vec<Product>> {
        self.inner.all().await
    }

    async fn by_name(&self, name: &str, mode: NameMatch) -> Result<Vec<Product>> {
        self.inner.by_name(name, mode).await
    }

    async fn by_serial(&self, _serial_num: &str, _mode: SerialMatch) -> Result<Option<Product>> {
        Ok(None)
    }

    async fn by_id(&self, id: i32) -> Result<Option<Product>> {
        self.inner.by_id(id).await
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product> {
        self.inner.insert(product).await
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        self.inner.delete(id).await
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Fails every call as if the connection pool were exhausted.
pub struct UnavailableProductStore;

#[async_trait]
impl ProductStore for UnavailableProductStore {
    async fn all(&self) -> Result<Vec<Product>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn by_name(&self, _name: &str, _mode: NameMatch) -> Result<Vec<Product>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn by_serial(&self, _serial_num: &str, _mode: SerialMatch) -> Result<Option<Product>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn by_id(&self, _id: i32) -> Result<Option<Product>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn insert(&self, _product: &NewProduct) -> Result<Product> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: i32) -> Result<u64> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn ping(&self) -> Result<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
